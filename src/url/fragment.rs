//! Fragment canonicalization.

use crate::types::Config;

const TEXT_FRAGMENT_MARKER: &str = ":~:text";

/// Canonicalize a fragment (without the leading `#`).
///
/// Returns `None` when the fragment should be removed.
pub fn canonicalize_fragment(fragment: &str, config: &Config) -> Option<String> {
    if !config.keep_hash {
        return None;
    }

    let fragment = if config.keep_text_fragment {
        fragment
    } else {
        strip_text_fragment(fragment)
    };

    if fragment.is_empty() {
        None
    } else {
        Some(fragment.to_string())
    }
}

/// Cut a `:~:text` directive (any case) and everything after it.
pub fn strip_text_fragment(fragment: &str) -> &str {
    match fragment.to_ascii_lowercase().find(TEXT_FRAGMENT_MARKER) {
        Some(pos) => {
            let head = &fragment[..pos];
            head.strip_suffix('#').unwrap_or(head)
        }
        None => fragment,
    }
}
