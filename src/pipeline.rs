use std::fmt;
use tracing::info;

use crate::config::Config;
use crate::dictionary::{build_dictionary, BuildReport};
use crate::error::Result;
use crate::export::{export_svgs, ExportReport};
use crate::preview::{write_preview, PreviewReport};

/// Generator stages in execution order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Stage {
    Dictionary,
    Preview,
    Export,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Dictionary => "dictionary",
            Stage::Preview => "preview",
            Stage::Export => "svg export",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub build: BuildReport,
    pub preview: PreviewReport,
    /// Present only when an SVG directory was configured.
    pub export: Option<ExportReport>,
}

/// Run every configured stage in order, stopping at the first failure.
///
/// A failed stage leaves the outputs of all later stages untouched.
pub fn run(config: &Config) -> Result<PipelineReport> {
    info!(path = %config.dictionary_path.display(), "--- 1. Generating dictionary ---");
    let build = build_dictionary(&config.words_path, &config.dictionary_path)?;

    info!(path = %config.preview_path.display(), "--- 2. Generating preview ---");
    let preview = write_preview(&config.dictionary_path, &config.preview_path)?;

    let export = match &config.svg_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "--- 3. Exporting SVGs ---");
            let report = export_svgs(&config.dictionary_path, dir)?;
            Some(report)
        }
        None => None,
    };

    Ok(PipelineReport {
        build,
        preview,
        export,
    })
}
