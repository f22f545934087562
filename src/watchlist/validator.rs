//! Local grammar checks for watchlist configuration files.
//!
//! # Responsibilities
//! - Reject a malformed header before anything goes over the wire
//! - Pinpoint the first malformed row by its line index
//!
//! # Design Decisions
//! - Line oriented, no CSV quoting: a comma is always a field separator
//! - Stops at the first failure
//! - Line 0 is the header, so the first data row is line 1

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// The only header the service accepts.
pub const EXPECTED_HEADER: &str = "sourceId,RTSsymbol";

/// `<3-4 digit source id>,<symbol>` where the symbol uses the service alphabet.
pub const ROW_PATTERN: &str = r"^[0-9]{3,4},[A-Z0-9+;()!*\-.:/$@&_%#\\]+$";

fn row_regex() -> &'static Regex {
    static ROW_REGEX: OnceLock<Regex> = OnceLock::new();
    ROW_REGEX.get_or_init(|| Regex::new(ROW_PATTERN).expect("row pattern compiles"))
}

/// Which part of the file failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    Header,
    Row,
    File,
}

/// A configuration file that does not conform to the service grammar.
#[derive(Debug, Error)]
pub enum ValidationFailure {
    #[error("header does not conform to the prescribed format: expected '{expected}', got '{actual}'")]
    Header {
        expected: &'static str,
        actual: String,
    },

    #[error("line {line} improperly formatted")]
    Row { line: usize },

    #[error("configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ValidationFailure {
    pub fn kind(&self) -> ValidationKind {
        match self {
            ValidationFailure::Header { .. } => ValidationKind::Header,
            ValidationFailure::Row { .. } => ValidationKind::Row,
            ValidationFailure::FileNotFound(_) | ValidationFailure::Io { .. } => ValidationKind::File,
        }
    }

    /// Index of the offending row, if a row failed.
    pub fn line(&self) -> Option<usize> {
        match self {
            ValidationFailure::Row { line } => Some(*line),
            _ => None,
        }
    }
}

/// Check the header line (line endings already stripped).
pub fn validate_header(line: &str) -> Result<&str, ValidationFailure> {
    if line != EXPECTED_HEADER {
        return Err(ValidationFailure::Header {
            expected: EXPECTED_HEADER,
            actual: line.to_string(),
        });
    }
    Ok(line)
}

/// Check a data row. `index` is its position in the file, header being 0.
pub fn validate_row(line: &str, index: usize) -> Result<&str, ValidationFailure> {
    if !row_regex().is_match(line) {
        return Err(ValidationFailure::Row { line: index });
    }
    Ok(line)
}

/// Validate already loaded file contents. Returns the number of data rows.
pub fn validate_contents(contents: &str) -> Result<usize, ValidationFailure> {
    let mut lines = contents.lines();

    // An empty file has no header at all.
    validate_header(lines.next().unwrap_or_default())?;

    let mut rows = 0;
    for (offset, line) in lines.enumerate() {
        validate_row(line, offset + 1)?;
        rows += 1;
    }
    Ok(rows)
}

/// Read and validate the file at `path`. Returns the number of data rows.
pub fn validate_file(path: &Path) -> Result<usize, ValidationFailure> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ValidationFailure::FileNotFound(path.to_path_buf()),
        _ => ValidationFailure::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    validate_contents(&contents)
}

/// True if `path` points at a regular file.
pub fn config_file_exists(path: &Path) -> bool {
    path.is_file()
}
