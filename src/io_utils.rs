use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::Builder;

use crate::pipeline::Stage;
use crate::SymbolError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a std::io::Error with context.
pub fn io_error(operation: &str, path: &Path, err: io::Error) -> io::Error {
    io::Error::new(err.kind(), format_io_error(operation, path, &err))
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn symbol_cli_error(context: &str, err: SymbolError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &SymbolError) -> String {
    match err {
        SymbolError::MissingInput { stage, path } => {
            let flag = match stage {
                Stage::Dictionary => "--words",
                Stage::Preview | Stage::Export => "--dictionary",
            };
            format!(
                "{} not found. Run from the directory that holds it or pass {flag}.",
                path.display()
            )
        }
        SymbolError::Json(e) => format!("{e}. Check that the file is valid JSON of the expected shape."),
        SymbolError::Io(io) => format!("{io}"),
    }
}

/// Read a stage input, reporting a missing file as [`SymbolError::MissingInput`].
pub fn read_input(stage: Stage, path: &Path) -> Result<String, SymbolError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SymbolError::MissingInput {
            stage,
            path: path.to_path_buf(),
        },
        _ => io_error("reading", path, e).into(),
    })
}

/// Replace `path` with `contents` in one step.
///
/// The bytes go to a temporary file next to `path` which is then renamed over
/// it, so readers never observe a partially written file. An existing file
/// keeps its permissions; a new one gets the same mode `fs::write` would give it.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Requested at creation, so the umask still applies.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| io_error("creating temporary file in", dir, e))?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| io_error("setting permissions on", tmp.path(), e))?;
    }
    tmp.write_all(contents)
        .map_err(|e| io_error("writing", tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| io_error("writing", path, e.error))?;
    Ok(())
}
