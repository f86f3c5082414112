//! Standalone `.svg` files, one per dictionary word, for front-end bundling.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::dictionary::load_dictionary;
use crate::error::Result;
use crate::io_utils::io_error;
use crate::pipeline::Stage;

/// Placeholder key for redacted words; it never gets a file.
pub const CENSORED_PLACEHOLDER: &str = "***";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub written: usize,
    /// Keys that could not be used as a file name, or whose file name
    /// differs only in case from one already written.
    pub skipped: Vec<String>,
}

/// Wrap a glyph fragment into a complete SVG document.
pub fn svg_document(fragment: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\" fill=\"none\">\n{fragment}\n</svg>"
    )
}

/// Whether `key` can be used as-is as a file name inside the export directory
/// on any common filesystem.
pub fn is_safe_file_stem(key: &str) -> bool {
    !key.is_empty()
        && key != "."
        && key != ".."
        && !key.ends_with(['.', ' '])
        && !key.chars().any(|c| {
            c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
        })
}

/// Write `<out_dir>/<word>.svg` for every entry of the dictionary at
/// `dictionary_path`, skipping [`CENSORED_PLACEHOLDER`].
pub fn export_svgs(dictionary_path: &Path, out_dir: &Path) -> Result<ExportReport> {
    let entries = load_dictionary(Stage::Export, dictionary_path)?;
    fs::create_dir_all(out_dir).map_err(|e| io_error("creating directory", out_dir, e))?;

    let mut report = ExportReport::default();
    // Case-insensitive filesystems would let these overwrite each other.
    let mut taken = HashSet::new();
    for (word, fragment) in &entries {
        if word == CENSORED_PLACEHOLDER {
            continue;
        }
        if !is_safe_file_stem(word) {
            warn!(word = %word, "not a usable file name, skipping");
            report.skipped.push(word.clone());
            continue;
        }
        if !taken.insert(word.to_lowercase()) {
            warn!(word = %word, "file name differs only in case from another word, skipping");
            report.skipped.push(word.clone());
            continue;
        }
        let path = out_dir.join(format!("{word}.svg"));
        fs::write(&path, svg_document(fragment)).map_err(|e| io_error("writing", &path, e))?;
        report.written += 1;
    }

    info!(
        dir = %out_dir.display(),
        skipped = report.skipped.len(),
        "Generated {} SVGs",
        report.written
    );
    Ok(report)
}
