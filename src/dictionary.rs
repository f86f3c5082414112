//! The word → glyph dictionary and the stage that writes it.

use serde::ser::{Serialize, SerializeMap, Serializer};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::catalog;
use crate::error::Result;
use crate::io_utils::{read_input, write_atomic};
use crate::pipeline::Stage;
use crate::words::{Vocabulary, WordList};

/// Glyph markup keyed by word, in vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<(String, String)>,
}

impl Dictionary {
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        Self {
            entries: vocabulary
                .iter()
                .map(|word| (word.to_owned(), catalog::glyph(word)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == word)
            .map(|(_, markup)| markup.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, markup)| (key.as_str(), markup.as_str()))
    }

    /// Pretty JSON with two-space indentation; non-ASCII text is written as is.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, markup) in self.iter() {
            map.serialize_entry(key, markup)?;
        }
        map.end()
    }
}

/// Outcome of a dictionary build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Words written to the dictionary.
    pub entries: usize,
    /// Repeated words dropped while building the vocabulary.
    pub duplicates: usize,
    /// Words drawn with the fallback glyph, in vocabulary order.
    pub fallbacks: Vec<String>,
    /// Hex SHA-256 of the written file.
    pub digest: String,
}

/// Read the word list at `words_path` and write its dictionary to
/// `dictionary_path`.
///
/// Nothing is written when the word list is missing or malformed.
pub fn build_dictionary(words_path: &Path, dictionary_path: &Path) -> Result<BuildReport> {
    let text = read_input(Stage::Dictionary, words_path)?;
    let words = WordList::from_json(&text)?;
    let vocabulary = words.vocabulary();
    let dictionary = Dictionary::from_vocabulary(&vocabulary);

    let fallbacks: Vec<String> = dictionary
        .keys()
        .filter(|word| !catalog::is_known(word))
        .map(str::to_owned)
        .collect();
    for word in &fallbacks {
        debug!(word = %word, "no glyph, using fallback");
    }

    let json = dictionary.to_json()?;
    write_atomic(dictionary_path, json.as_bytes())?;

    let report = BuildReport {
        entries: dictionary.len(),
        duplicates: vocabulary.duplicates(),
        fallbacks,
        digest: hex::encode(Sha256::digest(json.as_bytes())),
    };
    info!(
        path = %dictionary_path.display(),
        entries = report.entries,
        duplicates = report.duplicates,
        fallbacks = report.fallbacks.len(),
        digest = %report.digest,
        "Successfully processed {} words",
        report.entries
    );
    Ok(report)
}

/// Load a dictionary file written by [`build_dictionary`], keys sorted.
pub fn load_dictionary(stage: Stage, path: &Path) -> Result<BTreeMap<String, String>> {
    let text = read_input(stage, path)?;
    Ok(serde_json::from_str(&text)?)
}
