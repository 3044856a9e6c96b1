//! Hostname canonicalization.

use tracing::debug;

use crate::error::{NormalizeError, Result};

/// Canonicalize a hostname already lowercased and ASCII-encoded by the parser.
///
/// This function:
/// 1. Strips every leading and trailing dot
/// 2. Drops a leading `www` label from three-label hosts unless `keep_www`
/// 3. Requires at least two non-empty labels
pub fn canonicalize_host(host: &str, keep_www: bool) -> Result<String> {
    let mut labels: Vec<&str> = host.trim_matches('.').split('.').collect();

    if !keep_www && labels.len() == 3 && labels[0] == "www" {
        labels.remove(0);
    }

    let canonical = labels.join(".");
    if labels.iter().filter(|label| !label.is_empty()).count() < 2 {
        debug!(host = %canonical, "rejecting host with fewer than two labels");
        return Err(NormalizeError::InvalidDomain(canonical));
    }

    Ok(canonical)
}

/// Replace the ASCII hostname of a serialized `scheme://` URL with its
/// Unicode form.
///
/// Only the host position of the authority is rewritten. Userinfo, path,
/// query and fragment are left alone even if they contain the host text.
pub fn unicode_display(serialized: &str, ascii_host: &str) -> String {
    let (unicode, _) = idna::domain_to_unicode(ascii_host);
    if unicode == ascii_host {
        return serialized.to_string();
    }

    let authority_start = serialized.find("://").map_or(0, |pos| pos + 3);
    let authority_end = serialized[authority_start..]
        .find(|c| matches!(c, '/' | '?' | '#'))
        .map_or(serialized.len(), |pos| authority_start + pos);
    // '@' inside userinfo is percent-encoded, so the last one ends it.
    let host_start = serialized[authority_start..authority_end]
        .rfind('@')
        .map_or(authority_start, |pos| authority_start + pos + 1);

    match serialized[host_start..].strip_prefix(ascii_host) {
        Some(rest) => format!("{}{}{}", &serialized[..host_start], unicode, rest),
        None => serialized.to_string(),
    }
}
