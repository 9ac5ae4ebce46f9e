//! Error taxonomy for a sync run.
//!
//! Fetch failures are classified from the curl error the same way for every
//! caller, so the CLI can report a timeout distinctly from a refused connection.

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Any failure that aborts a sync run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Curl reported a transport failure (DNS, connect, TLS, reset...).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The request did not complete within the configured timeout.
    #[error("GET {url} timed out after {secs}s")]
    Timeout { url: String, secs: u64 },
    /// The server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
    /// The response body is not valid UTF-8.
    #[error("response body from {url} is not valid UTF-8")]
    Decode {
        url: String,
        #[source]
        source: FromUtf8Error,
    },
    /// The local input file is missing, unreadable or not UTF-8.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An output artifact could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file exists but cannot be parsed.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl SyncError {
    /// Classify a curl error raised while fetching `url`.
    pub fn from_curl(url: &str, timeout_secs: u64, e: curl::Error) -> Self {
        if e.is_operation_timedout() {
            SyncError::Timeout {
                url: url.to_string(),
                secs: timeout_secs,
            }
        } else {
            SyncError::Transport {
                url: url.to_string(),
                source: e,
            }
        }
    }

    /// True for errors raised while obtaining the remote source text.
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            SyncError::Transport { .. }
                | SyncError::Timeout { .. }
                | SyncError::Http { .. }
                | SyncError::Decode { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message() {
        let e = SyncError::Http {
            url: "https://example.com/list.txt".to_string(),
            code: 404,
        };
        assert_eq!(e.to_string(), "GET https://example.com/list.txt returned HTTP 404");
        assert!(e.is_fetch());
    }

    #[test]
    fn timeout_is_fetch() {
        let e = SyncError::Timeout {
            url: "https://example.com/".to_string(),
            secs: 30,
        };
        assert!(e.is_fetch());
        assert!(e.to_string().contains("30s"));
    }

    #[test]
    fn io_errors_are_not_fetch() {
        let read = SyncError::Read {
            path: PathBuf::from("all_proxies.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(!read.is_fetch());
        assert_eq!(read.to_string(), "failed to read all_proxies.txt");

        let write = SyncError::Write {
            path: PathBuf::from("out/all_proxies.md"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!write.is_fetch());
    }

    #[test]
    fn decode_error_keeps_source() {
        let bad = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let e = SyncError::Decode {
            url: "http://127.0.0.1/".to_string(),
            source: bad,
        };
        assert!(std::error::Error::source(&e).is_some());
    }
}
