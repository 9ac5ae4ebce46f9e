//! Link rendering: turn each normalized proxy URI into a clickable
//! `https://t.me/proxy?...` link plus a numbered `server:port` label.
//!
//! Rendering never fails; missing parameters degrade to defaults and a URI
//! with nothing recognizable is passed through untouched.

mod query;

pub use query::{encode_pairs, QueryParams};

use crate::normalize::ProxyUri;

/// Base of every reconstructed link.
pub const CANONICAL_BASE: &str = "https://t.me/proxy?";

/// Parameters copied into a reconstructed link, in output order.
const LINK_KEYS: [&str; 3] = ["server", "port", "secret"];

const UNKNOWN_SERVER: &str = "unknown";
const UNKNOWN_PORT: &str = "?";

/// Label and link for one list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub label: String,
    pub link: String,
}

impl RenderedEntry {
    /// Renders `uri` at 1-based position `index`.
    pub fn new(uri: &ProxyUri, index: usize) -> Self {
        Self {
            label: proxy_label(uri.as_str(), index),
            link: to_clickable_link(uri.as_str()),
        }
    }
}

/// Renders every entry with its 1-based position.
pub fn render_all(proxies: &[ProxyUri]) -> Vec<RenderedEntry> {
    proxies
        .iter()
        .enumerate()
        .map(|(i, uri)| RenderedEntry::new(uri, i + 1))
        .collect()
}

/// True for `https://t.me/...` with no explicit port or userinfo.
fn is_canonical(uri: &str) -> bool {
    match url::Url::parse(uri) {
        Ok(parsed) => {
            parsed.scheme() == "https"
                && parsed.host_str() == Some("t.me")
                && parsed.port().is_none()
                && parsed.username().is_empty()
                && parsed.password().is_none()
        }
        Err(_) => false,
    }
}

/// Returns a link that opens the proxy in Telegram.
///
/// - Canonical `https://t.me` links are returned unchanged.
/// - Otherwise `server`, `port` and `secret` are copied, in that order, into a
///   fresh `https://t.me/proxy?` query.
/// - If none of those keys are present the input is returned unchanged.
pub fn to_clickable_link(uri: &str) -> String {
    if is_canonical(uri) {
        return uri.to_string();
    }

    let params = QueryParams::from_uri(uri);
    let pairs: Vec<(&str, &str)> = LINK_KEYS
        .iter()
        .filter_map(|&key| params.get(key).map(|value| (key, value)))
        .collect();

    if pairs.is_empty() {
        return uri.to_string();
    }

    format!("{}{}", CANONICAL_BASE, encode_pairs(&pairs))
}

/// `"{index:04}. {server}:{port}"`, with `unknown` / `?` for missing values.
pub fn proxy_label(uri: &str, index: usize) -> String {
    let params = QueryParams::from_uri(uri);
    let server = params.get("server").unwrap_or(UNKNOWN_SERVER);
    let port = params.get("port").unwrap_or(UNKNOWN_PORT);
    format!("{:04}. {}:{}", index, server, port)
}
