//! Query string canonicalization.

use url::form_urlencoded;

use crate::types::Config;
use crate::url::decode::{decode_component, or_keep};

/// Canonicalize a raw query string (without the leading `?`).
///
/// Returns `None` when nothing is left, so the caller can drop the `?`.
pub fn canonicalize_query(query: &str, config: &Config) -> Option<String> {
    if !config.keep_query_params {
        return None;
    }

    let query = query.strip_suffix('&').unwrap_or(query);
    let mut cleaned = collapse_ampersands(query).replace("%20", "+");

    if config.filter_query_params.is_some() || config.sort_query_params {
        let mut pairs: Vec<(String, String)> = form_urlencoded::parse(cleaned.as_bytes())
            .into_owned()
            .collect();

        if let Some(filter) = &config.filter_query_params {
            pairs.retain(|(key, value)| filter.keep(key, value));
        }

        let serialized = if config.sort_query_params {
            // UTF-16 code unit order; sort_by is stable for equal keys.
            pairs.sort_by(|a, b| a.0.encode_utf16().cmp(b.0.encode_utf16()));
            let encoded = serialize_pairs(&pairs);
            or_keep(&encoded, decode_component).into_owned()
        } else {
            serialize_pairs(&pairs)
        };
        cleaned = serialized;
    }

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

fn collapse_ampersands(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    for c in query.chars() {
        if c == '&' && out.ends_with('&') {
            continue;
        }
        out.push(c);
    }
    out
}

fn serialize_pairs(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
