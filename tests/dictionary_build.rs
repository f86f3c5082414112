use std::collections::BTreeMap;
use std::fs;

use babel_symbols::{build_dictionary, fallback, glyph, SymbolError, Stage};

fn built(words_json: &str) -> (tempfile::TempDir, BTreeMap<String, String>, String) {
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.json");
    let dictionary = dir.path().join("dictionary.json");
    fs::write(&words, words_json).unwrap();
    build_dictionary(&words, &dictionary).unwrap();
    let text = fs::read_to_string(&dictionary).unwrap();
    let map = serde_json::from_str(&text).unwrap();
    (dir, map, text)
}

#[test]
fn scenario_pronouns_and_groups() {
    let (_dir, map, _) = built(r#"{"normal": ["me", "you"], "censored": ["he", ["god", "me"]]}"#);
    assert_eq!(map.len(), 4);
    for key in ["me", "you", "he", "god"] {
        assert_eq!(map[key], glyph(key));
        assert!(!map[key].is_empty());
    }
    assert_ne!(map["me"], map["you"]);
    let person = glyph("person");
    assert!(map["me"].starts_with(&person));
    assert!(map["you"].starts_with(&person));
}

#[test]
fn keys_match_vocabulary_in_order() {
    let (_dir, _, text) = built(r#"{"normal": ["value", "and", "value"], "censored": [["or", "and"], "not"]}"#);
    let positions: Vec<usize> = ["\"value\":", "\"and\":", "\"or\":", "\"not\":"]
        .iter()
        .map(|k| text.find(k).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(text.matches("\"value\":").count(), 1);
}

#[test]
fn unknown_words_share_the_fallback() {
    let (_dir, map, _) = built(r#"{"normal": ["xyz-unknown", "qqq"], "censored": []}"#);
    assert_eq!(map["xyz-unknown"], map["qqq"]);
    assert_eq!(map["xyz-unknown"], fallback());
}

#[test]
fn report_counts_duplicates_and_fallbacks() {
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.json");
    let dictionary = dir.path().join("dictionary.json");
    fs::write(&words, r#"{"normal": ["me", "blorp", "me"], "censored": [["blorp", "god"]]}"#).unwrap();
    let report = build_dictionary(&words, &dictionary).unwrap();
    assert_eq!(report.entries, 3);
    assert_eq!(report.duplicates, 2);
    assert_eq!(report.fallbacks, vec!["blorp".to_string()]);
    assert_eq!(report.digest.len(), 64);
}

#[test]
fn rebuild_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.json");
    let dictionary = dir.path().join("dictionary.json");
    fs::write(&words, r#"{"normal": ["deity", "自由", "one"], "censored": ["***"]}"#).unwrap();
    let first = build_dictionary(&words, &dictionary).unwrap();
    let first_bytes = fs::read(&dictionary).unwrap();
    let second = build_dictionary(&words, &dictionary).unwrap();
    assert_eq!(fs::read(&dictionary).unwrap(), first_bytes);
    assert_eq!(first.digest, second.digest);
}

#[test]
fn non_ascii_words_are_written_verbatim() {
    let (_dir, map, text) = built(r#"{"normal": ["自由"], "censored": []}"#);
    assert!(text.contains("\"自由\""));
    assert!(!text.contains("\\u"));
    assert!(text.starts_with("{\n  \""));
    assert_eq!(map["自由"], fallback());
}

#[test]
fn missing_word_list_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.json");
    let dictionary = dir.path().join("dictionary.json");
    match build_dictionary(&words, &dictionary) {
        Err(SymbolError::MissingInput { stage, path }) => {
            assert_eq!(stage, Stage::Dictionary);
            assert_eq!(path, words);
        }
        other => panic!("expected missing input, got {other:?}"),
    }
    assert!(!dictionary.exists());
}

#[test]
fn malformed_word_list_keeps_old_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.json");
    let dictionary = dir.path().join("dictionary.json");
    fs::write(&dictionary, "{}").unwrap();
    fs::write(&words, r#"{"normal": ["me""#).unwrap();
    assert!(matches!(
        build_dictionary(&words, &dictionary),
        Err(SymbolError::Json(_))
    ));
    assert_eq!(fs::read_to_string(&dictionary).unwrap(), "{}");
}
