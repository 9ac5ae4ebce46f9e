//! Single HTTP GET of the upstream list via libcurl.

use super::SourceReader;
use crate::error::SyncError;
use std::time::Duration;

/// Upper bound on the connect phase; the whole request is bounded by the caller's timeout.
const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches a URL with one GET. No retries.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    pub url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>, timeout: Duration, user_agent: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout,
            user_agent: user_agent.into(),
        }
    }
}

impl SourceReader for RemoteSource {
    fn read(&self) -> Result<String, SyncError> {
        fetch_text(&self.url, self.timeout, &self.user_agent)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Performs a GET and returns the body decoded as UTF-8.
///
/// Follows redirects. Fails on transport errors, on timeout, on any non-2xx
/// final status and on a body that is not valid UTF-8.
///
/// libcurl reads a zero timeout as "no limit", so a timeout under one
/// millisecond fails immediately without sending the request.
pub fn fetch_text(url: &str, timeout: Duration, user_agent: &str) -> Result<String, SyncError> {
    let secs = timeout.as_secs();
    if timeout.as_millis() == 0 {
        return Err(SyncError::Timeout {
            url: url.to_string(),
            secs,
        });
    }
    let curl_err = |e: curl::Error| SyncError::from_curl(url, secs, e);

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_err)?;
    easy.get(true).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.max_redirections(10).map_err(curl_err)?;
    easy.useragent(user_agent).map_err(curl_err)?;
    easy.connect_timeout(timeout.min(MAX_CONNECT_TIMEOUT))
        .map_err(curl_err)?;
    easy.timeout(timeout).map_err(curl_err)?;

    tracing::debug!(url, timeout_secs = secs, "GET");
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(curl_err)?;
        transfer.perform().map_err(curl_err)?;
    }

    let code = easy.response_code().map_err(curl_err)?;
    if !(200..300).contains(&code) {
        return Err(SyncError::Http {
            url: url.to_string(),
            code,
        });
    }

    tracing::debug!(url, status = code, bytes = body.len(), "GET complete");
    String::from_utf8(body).map_err(|source| SyncError::Decode {
        url: url.to_string(),
        source,
    })
}
