use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::Stage;

#[derive(Error, Debug)]
pub enum SymbolError {
    /// A stage's input file does not exist.
    #[error("{} not found (needed by the {stage} stage)", path.display())]
    MissingInput { stage: Stage, path: PathBuf },

    /// Word list or dictionary is not the expected JSON shape.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SymbolError>;
