//! Source readers: where the raw proxy list text comes from.
//!
//! The pipeline only sees [`SourceReader`], so tests can feed literal text
//! without touching the network or the filesystem.

mod remote;

pub use remote::{fetch_text, RemoteSource};

use crate::error::SyncError;
use std::fs;
use std::path::{Path, PathBuf};

/// Produces the raw text of a proxy list.
pub trait SourceReader {
    /// Reads the whole source as UTF-8 text.
    fn read(&self) -> Result<String, SyncError>;

    /// Identifier written into the markdown header.
    fn describe(&self) -> String;
}

/// Reads a local plaintext file in full.
#[derive(Debug, Clone)]
pub struct LocalSource {
    path: PathBuf,
    label: Option<String>,
}

impl LocalSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            label: None,
        }
    }

    /// Reports `label` as the source identifier instead of the file path.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SourceReader for LocalSource {
    fn read(&self) -> Result<String, SyncError> {
        tracing::debug!("reading local source {}", self.path.display());
        fs::read_to_string(&self.path).map_err(|source| SyncError::Read {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// In-memory source; handy for tests and for callers that already hold the text.
#[derive(Debug, Clone)]
pub struct StaticSource {
    text: String,
    label: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

impl SourceReader for StaticSource {
    fn read(&self) -> Result<String, SyncError> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
