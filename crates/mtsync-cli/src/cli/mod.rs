//! CLI for mtsync.

mod commands;

use anyhow::Result;
use clap::Parser;
use mtsync_core::config::{self, SyncConfig};

use commands::run_sync;

/// Sync the MTProto proxy list and build a markdown index of clickable links.
#[derive(Debug, Parser)]
#[command(name = "mtsync")]
#[command(about = "Sync an MTProto proxy list into all_proxies.txt and all_proxies.md", long_about = None)]
pub struct Cli {
    /// Use the local all_proxies.txt as input instead of downloading from upstream.
    #[arg(long)]
    pub local_only: bool,

    /// Upstream URL for all_proxies.txt [default: the SoliSpirit/mtproto list].
    #[arg(long, value_name = "URL")]
    pub source_url: Option<String>,

    /// HTTP timeout in seconds [default: 30].
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Flags override the config file, which overrides built-in defaults.
    pub fn apply(&self, mut cfg: SyncConfig) -> SyncConfig {
        if let Some(url) = &self.source_url {
            cfg.source_url = url.clone();
        }
        if let Some(secs) = self.timeout {
            cfg.timeout_secs = secs;
        }
        cfg
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.apply(config::load_or_default()?);
        tracing::debug!("effective config: {:?}", cfg);
        run_sync(&cfg, cli.local_only)
    }
}
