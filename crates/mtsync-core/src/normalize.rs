//! Line normalization: filter raw text down to accepted proxy URIs, deduplicated
//! in first-seen order.
//!
//! Unrecognized lines are dropped without any diagnostic.

use std::collections::HashSet;
use std::fmt;

/// Prefixes a trimmed line must start with to be kept (case-sensitive).
pub const ACCEPTED_PREFIXES: [&str; 2] = ["tg://proxy?", "https://t.me/proxy?"];

/// A trimmed, non-empty proxy URI starting with one of [`ACCEPTED_PREFIXES`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProxyUri(String);

impl ProxyUri {
    /// Trims `line` and accepts it if it carries an accepted prefix.
    ///
    /// This is a prefix check only; the rest of the URI is not validated.
    pub fn parse(line: &str) -> Option<Self> {
        let value = trim_line(line);
        if value.is_empty() {
            return None;
        }
        if ACCEPTED_PREFIXES.iter().any(|p| value.starts_with(p)) {
            Some(ProxyUri(value.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProxyUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProxyUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Trims Unicode whitespace and the ASCII unit separator (`\x1f`).
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\x1f')
}

/// Line boundaries recognised when splitting raw text (CR, LF and the Unicode separators).
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Non-empty pieces of `raw` between line breaks. A CRLF pair yields no empty piece.
fn split_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(is_line_break).filter(|piece| !piece.is_empty())
}

/// Splits `raw` into lines, keeps accepted proxy URIs and drops later duplicates.
pub fn normalize_lines(raw: &str) -> Vec<ProxyUri> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    let mut total = 0usize;

    for line in split_lines(raw) {
        total += 1;
        let Some(uri) = ProxyUri::parse(line) else {
            continue;
        };
        if !seen.insert(trim_line(line)) {
            continue;
        }
        out.push(uri);
    }

    tracing::debug!(lines = total, kept = out.len(), "normalized source text");
    out
}
