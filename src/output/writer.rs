//! Persisting and printing results.

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::helpers::{convert_raw_utc_timestamp_to_string, TimestampError, COMPACT_FORMAT};
use crate::watchlist::{RequestSummary, RetrievedConfig};

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("output directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize request summary: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot name output file: {0}")]
    Timestamp(#[from] TimestampError),

    #[error("failed to write to console: {0}")]
    Console(#[source] std::io::Error),
}

/// `request_summary_<YYYYMMDDTHHMMSSZ>.json`
pub fn request_summary_file_name(summary: &RequestSummary) -> Result<String, OutputError> {
    let stamp = convert_raw_utc_timestamp_to_string(&summary.submission_time, COMPACT_FORMAT)?;
    Ok(format!("request_summary_{}.json", stamp))
}

/// `watchlist_config_<timestamp>.csv`
pub fn retrieved_config_file_name(config: &RetrievedConfig) -> String {
    format!("watchlist_config_{}.csv", config.timestamp)
}

/// Write the summary as pretty JSON into `dir`, returning the file path.
pub fn write_request_summary(summary: &RequestSummary, dir: &Path) -> Result<PathBuf, OutputError> {
    ensure_directory(dir)?;
    let path = dir.join(request_summary_file_name(summary)?);

    let file = File::create(&path).map_err(|source| OutputError::Io {
        path: path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writer.flush().map_err(|source| OutputError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "Request summary written");
    Ok(path)
}

/// Write the configuration body, byte for byte, into `dir`.
pub fn write_retrieved_config(config: &RetrievedConfig, dir: &Path) -> Result<PathBuf, OutputError> {
    ensure_directory(dir)?;
    let path = dir.join(retrieved_config_file_name(config));

    fs::write(&path, &config.config_body).map_err(|source| OutputError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = config.config_body.len(), "Configuration written");
    Ok(path)
}

fn ensure_directory(dir: &Path) -> Result<(), OutputError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(OutputError::MissingDirectory(dir.to_path_buf()))
    }
}

/// Human readable rendering of a submission outcome.
pub fn stringify_request_summary(summary: &RequestSummary) -> String {
    let s = &summary.summary;
    let mut out = String::new();

    let _ = writeln!(out, "Submission time: {}", summary.submission_time);
    for (label, count) in [
        ("Created", s.nb_created),
        ("Updated", s.nb_updated),
        ("Duplicated", s.nb_duplicated),
        ("Unchanged", s.nb_unchanged),
        ("Failed", s.nb_failed),
        ("Deactivated", s.nb_deactivated),
    ] {
        let _ = writeln!(out, "  {:<12} {}", format!("{}:", label), count);
    }

    if !s.failed.is_empty() {
        let _ = writeln!(out, "Failed entries:");
        for entry in &s.failed {
            let _ = writeln!(out, "  {}", render_entry(entry));
        }
    }
    out
}

fn render_entry(entry: &Value) -> String {
    match entry {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
