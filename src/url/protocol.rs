//! Scheme detection before parsing and scheme rewriting after serialization.

use std::borrow::Cow;

use tracing::debug;

use crate::error::{NormalizeError, Result};
use crate::types::Config;

const SCHEME_SEPARATOR: &str = "://";

/// Length of the leading run of scheme characters (`[a-zA-Z0-9.+-]`).
fn scheme_chars_len(input: &str) -> usize {
    input
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'+' | b'-'))
        .count()
}

/// True if the input starts with `scheme://`. The scheme may be empty.
pub fn has_scheme(input: &str) -> bool {
    input[scheme_chars_len(input)..].starts_with(SCHEME_SEPARATOR)
}

/// True if the input starts with `scheme:` followed by a non-digit.
///
/// A digit after the colon reads as `host:port` and is not scheme-like.
pub fn has_scheme_like_prefix(input: &str) -> bool {
    let rest = &input[scheme_chars_len(input)..];
    match rest.strip_prefix(':') {
        Some(after) => after.chars().next().is_some_and(|c| !c.is_ascii_digit()),
        None => false,
    }
}

/// Make sure the input carries a scheme, prepending `default_protocol://`
/// when it has none.
///
/// Fails with [`NormalizeError::UnsupportedProtocol`] for inputs such as
/// `data:abc`, `mailto:user@example.com` or `user:pass@example.com`.
pub fn ensure_scheme<'a>(input: &'a str, default_protocol: &str) -> Result<Cow<'a, str>> {
    if has_scheme(input) {
        return Ok(Cow::Borrowed(input));
    }
    if has_scheme_like_prefix(input) {
        debug!(input, "rejecting scheme-like prefix without //");
        return Err(NormalizeError::UnsupportedProtocol);
    }
    Ok(Cow::Owned(format!("{}{}{}", default_protocol, SCHEME_SEPARATOR, input)))
}

/// Check the parsed scheme against the allowed set.
///
/// http, https and the default protocol are always allowed. Nothing is
/// checked when a forced protocol is configured or custom protocols are on.
pub fn check_protocol(scheme: &str, config: &Config) -> Result<()> {
    if config.force_protocol.is_some() || config.allow_custom_protocol {
        return Ok(());
    }
    match scheme {
        "http" | "https" => Ok(()),
        s if s == config.default_protocol => Ok(()),
        _ => {
            debug!(scheme, "rejecting protocol outside the allowed set");
            Err(NormalizeError::InvalidProtocol(scheme.to_string()))
        }
    }
}

/// Apply `force_protocol` and `keep_protocol` to a serialized URL.
///
/// `scheme` is the scheme the URL was serialized with.
pub fn rewrite_protocol(serialized: String, scheme: &str, config: &Config) -> String {
    let mut out = serialized;
    let mut effective = scheme;

    if let Some(forced) = config.force_protocol.as_deref() {
        if let Some(rest) = strip_scheme(&out, scheme) {
            out = format!("{}{}{}", forced, SCHEME_SEPARATOR, rest);
        }
        effective = forced;
    }

    if !config.keep_protocol {
        if let Some(rest) = strip_scheme(&out, effective) {
            out = rest.to_string();
        }
    }

    out
}

fn strip_scheme<'a>(serialized: &'a str, scheme: &str) -> Option<&'a str> {
    serialized
        .strip_prefix(scheme)
        .and_then(|rest| rest.strip_prefix(SCHEME_SEPARATOR))
}
