//! Word list input and the deduplicated vocabulary built from it.

use serde::Deserialize;
use std::collections::HashSet;

use crate::error::Result;

/// The `words.json` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WordList {
    #[serde(default)]
    pub normal: Vec<String>,
    #[serde(default)]
    pub censored: Vec<CensoredEntry>,
}

/// A censored entry: a lone word or a group of interchangeable variants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CensoredEntry {
    Word(String),
    Group(Vec<String>),
}

impl CensoredEntry {
    pub fn words(&self) -> &[String] {
        match self {
            CensoredEntry::Word(word) => std::slice::from_ref(word),
            CensoredEntry::Group(group) => group,
        }
    }
}

impl WordList {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Every word in input order: `normal` first, then each censored entry
    /// expanded in place. Duplicates are kept.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.normal
            .iter()
            .chain(self.censored.iter().flat_map(|entry| entry.words()))
            .map(String::as_str)
    }

    pub fn vocabulary(&self) -> Vocabulary {
        self.words().collect()
    }
}

/// Distinct words in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    duplicates: usize,
}

impl Vocabulary {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// How many repeated occurrences were dropped.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let mut vocabulary = Vocabulary::default();
        for word in iter {
            if seen.insert(word) {
                vocabulary.words.push(word.to_owned());
            } else {
                vocabulary.duplicates += 1;
            }
        }
        vocabulary
    }
}
