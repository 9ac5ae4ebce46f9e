//! Query-parameter extraction from proxy URIs.

/// First non-empty value per key from a URI's query component.
///
/// Keys keep their first-seen order. Fields without `=` or with an empty
/// value are skipped, so an empty `server=` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Extracts parameters from the text between the first `?` and the first following `#`.
    ///
    /// Works on the raw string so a URI the URL parser rejects still yields its parameters.
    /// Tabs and line breaks embedded in the URI are removed first, as URL parsers do.
    pub fn from_uri(uri: &str) -> Self {
        let cleaned: String = uri
            .chars()
            .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
            .collect();
        match raw_query(&cleaned) {
            Some(q) => Self::from_query(q),
            None => Self::default(),
        }
    }

    /// Parses a form-encoded query string (`+` is a space, `%XX` decoded lossily).
    pub fn from_query(query: &str) -> Self {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for field in query.split('&') {
            if !field.contains('=') {
                continue;
            }
            for (key, value) in url::form_urlencoded::parse(field.as_bytes()) {
                if value.is_empty() || pairs.iter().any(|(k, _)| *k == key) {
                    continue;
                }
                pairs.push((key.into_owned(), value.into_owned()));
            }
        }
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn raw_query(uri: &str) -> Option<&str> {
    let (_, rest) = uri.split_once('?')?;
    Some(match rest.split_once('#') {
        Some((q, _)) => q,
        None => rest,
    })
}

/// Form-encodes `pairs` as `k=v&k=v`.
///
/// Alphanumerics and `_.-~` pass through, space becomes `+`, everything else
/// is percent-encoded with upper-case hex.
pub fn encode_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(s: &str) -> String {
    // A space is the only input that encodes to "%20"; a literal '%' becomes "%25".
    urlencoding::encode(s).replace("%20", "+")
}
