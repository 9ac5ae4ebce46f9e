//! Serialization of the two output artifacts.

use crate::link::render_all;
use crate::normalize::ProxyUri;
use chrono::{DateTime, Utc};

const TITLE: &str = "# MTProto Proxy Links";
const INTRO: &str = "Click any link below to open it directly in Telegram:";

/// One URI per line, newline-terminated.
pub fn build_plaintext(proxies: &[ProxyUri]) -> String {
    let mut out = proxies
        .iter()
        .map(ProxyUri::as_str)
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}

/// `YYYY-MM-DD HH:MM UTC`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Markdown index: header (title, source, sync time, count) then one
/// `- [label](link)` item per proxy in list order.
pub fn build_markdown(proxies: &[ProxyUri], source: &str, generated_at: DateTime<Utc>) -> String {
    let mut lines = vec![
        TITLE.to_string(),
        String::new(),
        format!("Source: `{}`", source),
        format!("Last sync: {}", format_timestamp(generated_at)),
        format!("Total proxies: **{}**", proxies.len()),
        String::new(),
        INTRO.to_string(),
        String::new(),
    ];
    lines.extend(
        render_all(proxies)
            .into_iter()
            .map(|entry| format!("- [{}]({})", entry.label, entry.link)),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
