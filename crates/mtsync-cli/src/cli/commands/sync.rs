//! `mtsync [--local-only]` – fetch, normalize and write both artifacts.

use anyhow::{Context, Result};
use mtsync_core::config::SyncConfig;
use mtsync_core::source::{LocalSource, RemoteSource, SourceReader};
use mtsync_core::{sync, OutputPaths};

/// Picks the source for this run.
///
/// In local mode the markdown header still names the configured source URL,
/// since the local file is a mirror of it.
pub fn source_for(cfg: &SyncConfig, local_only: bool) -> Box<dyn SourceReader> {
    if local_only {
        Box::new(LocalSource::new(&cfg.input_path).with_label(&cfg.source_url))
    } else {
        Box::new(RemoteSource::new(
            &cfg.source_url,
            cfg.timeout(),
            &cfg.user_agent,
        ))
    }
}

pub fn run_sync(cfg: &SyncConfig, local_only: bool) -> Result<()> {
    let source = source_for(cfg, local_only);
    let outputs = OutputPaths::from(cfg);
    tracing::info!(local_only, source = %source.describe(), "starting sync");

    let report = sync(source.as_ref(), &outputs).context("sync failed")?;

    println!("Synced {} proxies", report.count);
    Ok(())
}
