use crate::error::SyncError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Upstream raw-text list fetched when no `--source-url` is given.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/SoliSpirit/mtproto/master/all_proxies.txt";

/// Client identifier sent with the upstream GET.
pub const DEFAULT_USER_AGENT: &str = "mtproto-sync-bot/1.0";

/// Global configuration, optionally loaded from `~/.config/mtsync/config.toml`.
///
/// Every field has a default so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Upstream URL of the plaintext proxy list.
    pub source_url: String,
    /// Whole-request timeout for the upstream GET, in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with the GET.
    pub user_agent: String,
    /// Input file used in local-only mode.
    pub input_path: PathBuf,
    /// Plaintext artifact.
    pub txt_path: PathBuf,
    /// Markdown artifact.
    pub md_path: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            input_path: PathBuf::from("all_proxies.txt"),
            txt_path: PathBuf::from("all_proxies.txt"),
            md_path: PathBuf::from("all_proxies.md"),
        }
    }
}

impl SyncConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Location of an existing `config.toml` in the XDG config dirs, if any.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mtsync")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from disk, falling back to defaults when no file exists
/// or the XDG dirs cannot be resolved (e.g. `HOME` unset under cron).
///
/// Never writes a default file: a run only touches its two artifacts.
pub fn load_or_default() -> Result<SyncConfig> {
    load_located(config_path())
}

fn load_located(located: Result<Option<PathBuf>>) -> Result<SyncConfig> {
    let found = match located {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!("cannot locate config dir ({:#}), using defaults", e);
            None
        }
    };
    match found {
        Some(path) => Ok(load_from(&path)?),
        None => Ok(SyncConfig::default()),
    }
}

/// Load configuration from an explicit path; a missing file yields defaults.
pub fn load_from(path: &Path) -> Result<SyncConfig, SyncError> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(SyncConfig::default());
    }

    let data = fs::read_to_string(path).map_err(|source| SyncError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: SyncConfig = toml::from_str(&data).map_err(|e| SyncError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    if cfg.timeout_secs == 0 {
        return Err(SyncError::Config {
            path: path.to_path_buf(),
            message: "timeout_secs must be at least 1".to_string(),
        });
    }
    tracing::info!("loaded config from {}", path.display());
    Ok(cfg)
}
