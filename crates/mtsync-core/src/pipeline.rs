//! The sync run: read → normalize → render → persist.

use crate::config::SyncConfig;
use crate::document::{build_markdown, build_plaintext};
use crate::error::SyncError;
use crate::normalize::normalize_lines;
use crate::source::SourceReader;
use crate::storage::write_artifact;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Where the two artifacts go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub txt: PathBuf,
    pub md: PathBuf,
}

impl From<&SyncConfig> for OutputPaths {
    fn from(cfg: &SyncConfig) -> Self {
        Self {
            txt: cfg.txt_path.clone(),
            md: cfg.md_path.clone(),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Number of unique proxies written.
    pub count: usize,
    /// Source identifier shown in the markdown header.
    pub source: String,
    pub outputs: OutputPaths,
}

/// Runs one sync, stamping the markdown with `now`.
///
/// The source is read in full before anything is written, so a failed fetch
/// leaves both artifacts as they were. The two writes are independent: if the
/// markdown write fails the plaintext artifact has already been replaced.
pub fn sync_at(
    reader: &dyn SourceReader,
    outputs: &OutputPaths,
    now: DateTime<Utc>,
) -> Result<SyncReport, SyncError> {
    let source = reader.describe();
    let raw = reader.read()?;

    let proxies = normalize_lines(&raw);

    let plaintext = build_plaintext(&proxies);
    let markdown = build_markdown(&proxies, &source, now);

    write_artifact(&outputs.txt, &plaintext)?;
    write_artifact(&outputs.md, &markdown)?;

    tracing::info!(count = proxies.len(), source = %source, "sync complete");

    Ok(SyncReport {
        count: proxies.len(),
        source,
        outputs: outputs.clone(),
    })
}

/// Runs one sync stamped with the current UTC time.
pub fn sync(reader: &dyn SourceReader, outputs: &OutputPaths) -> Result<SyncReport, SyncError> {
    sync_at(reader, outputs, Utc::now())
}
