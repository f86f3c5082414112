//! HTML contact sheet of every glyph in a dictionary.
//!
//! One card per word, sorted by key, each holding the glyph on a black
//! 100×100 tile above its label. The page is static: styles are embedded and
//! nothing is loaded from elsewhere.

use maud::{html, PreEscaped, DOCTYPE};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::dictionary::load_dictionary;
use crate::error::Result;
use crate::io_utils::write_atomic;
use crate::pipeline::Stage;

pub const PAGE_TITLE: &str = "Babel Symbols Preview";

const STYLESHEET: &str = r#"
body {
    font-family: 'Courier New', Courier, monospace;
    background-color: #1e1e1e;
    color: #d4d4d4;
    margin: 0;
    padding: 20px;
}
h1 { text-align: center; color: #9cdcfe; }
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
    gap: 20px;
    max-width: 1200px;
    margin: 0 auto;
}
.card {
    background-color: #252526;
    border: 1px solid #3c3c3c;
    border-radius: 8px;
    padding: 15px;
    display: flex;
    flex-direction: column;
    align-items: center;
    transition: transform 0.2s;
}
.card:hover {
    transform: translateY(-5px);
    border-color: #007acc;
    box-shadow: 0 4px 12px rgba(0,0,0,0.5);
}
.symbol-container {
    width: 100px;
    height: 100px;
    background-color: #000;
    border: 1px solid #555;
    border-radius: 4px;
    margin-bottom: 10px;
    color: white;
}
svg {
    width: 100%;
    height: 100%;
    stroke: currentColor;
    stroke-width: 3;
    stroke-linecap: round;
    stroke-linejoin: round;
    fill: none;
}
.label {
    font-size: 14px;
    font-weight: bold;
    text-align: center;
    color: #ce9178;
    word-wrap: break-word;
    width: 100%;
}
.meta {
    margin-top: 20px;
    text-align: center;
    color: #6a9955;
    font-size: 12px;
}
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewReport {
    pub cards: usize,
    pub path: PathBuf,
}

/// Render the preview page. `source` names the dictionary in the page header.
///
/// Glyph markup is embedded verbatim; labels are escaped.
pub fn render_preview(entries: &BTreeMap<String, String>, source: &str) -> String {
    html! {
        (DOCTYPE)
        html lang="zh-TW" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (PAGE_TITLE) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                h1 { (PAGE_TITLE) }
                div.meta { "Generated from " (source) }
                br;
                div.grid {
                    @for (key, fragment) in entries {
                        div.card {
                            div.symbol-container {
                                svg viewBox="0 0 100 100" { (PreEscaped(fragment)) }
                            }
                            div.label { (key) }
                        }
                    }
                }
            }
        }
    }
    .into_string()
}

/// Read the dictionary at `dictionary_path` and write its preview page to
/// `preview_path`.
pub fn write_preview(dictionary_path: &Path, preview_path: &Path) -> Result<PreviewReport> {
    let entries = load_dictionary(Stage::Preview, dictionary_path)?;
    let source = dictionary_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dictionary_path.display().to_string());
    let page = render_preview(&entries, &source);
    write_atomic(preview_path, page.as_bytes())?;

    let path = fs::canonicalize(preview_path).unwrap_or_else(|_| preview_path.to_path_buf());
    info!(cards = entries.len(), "Preview generated: {}", path.display());
    Ok(PreviewReport {
        cards: entries.len(),
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn cards_follow_key_order() {
        let page = render_preview(&entries(&[("b", "<g/>"), ("a", "<g/>")]), "dictionary.json");
        let a = page.find(r#"<div class="label">a</div>"#).unwrap();
        let b = page.find(r#"<div class="label">b</div>"#).unwrap();
        assert!(a < b);
    }

    #[test]
    fn fragment_is_embedded_raw() {
        let page = render_preview(&entries(&[("one", r#"<circle r="10" />"#)]), "d.json");
        assert!(page.contains(r#"<svg viewBox="0 0 100 100"><circle r="10" /></svg>"#));
    }

    #[test]
    fn labels_are_escaped() {
        let page = render_preview(&entries(&[("<b>", "")]), "d.json");
        assert!(page.contains("&lt;b&gt;"));
        assert!(!page.contains("<b>"));
    }

    #[test]
    fn page_is_self_contained() {
        let page = render_preview(&BTreeMap::new(), "dictionary.json");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("Generated from dictionary.json"));
        assert!(page.contains("minmax(150px, 1fr)"));
        assert!(!page.contains("<script"));
        assert!(!page.contains("<link"));
    }
}
