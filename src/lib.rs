//! Build-time generator for the Babel symbol language.
//!
//! A word list goes in; a JSON dictionary of hand-drawn SVG glyph fragments
//! and an HTML preview sheet come out. See [`pipeline::run`] for the stage
//! order.

pub mod catalog;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod export;
pub mod io_utils;
pub mod pipeline;
pub mod preview;
pub mod primitive;
pub mod words;

pub use catalog::{fallback, glyph, is_known};
pub use config::Config;
pub use dictionary::{build_dictionary, load_dictionary, BuildReport, Dictionary};
pub use error::{Result, SymbolError};
pub use export::{export_svgs, ExportReport};
pub use pipeline::{run, PipelineReport, Stage};
pub use preview::{render_preview, write_preview, PreviewReport};
pub use primitive::{Direction, Primitive};
pub use words::{CensoredEntry, Vocabulary, WordList};
