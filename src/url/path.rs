//! Path canonicalization.

use std::borrow::Cow;

use crate::url::decode::{decode_uri, or_keep};

/// Hash-router marker that keeps its trailing slash.
const HASH_ROUTER_SUFFIX: &str = "/#/";

/// Canonicalize a serialized path.
///
/// This function:
/// 1. Decodes percent escapes where safe, keeping the path on failure
/// 2. Removes a trailing `index.<ext>` segment unless `keep_directory_index`
/// 3. Collapses redundant slashes without breaking embedded `scheme://`
pub fn canonicalize_path(path: &str, keep_directory_index: bool) -> String {
    let decoded = or_keep(path, decode_uri);
    if keep_directory_index {
        collapse_slashes(&decoded)
    } else {
        collapse_slashes(&strip_directory_index(&decoded))
    }
}

/// Replace a trailing `/index.<ext>` segment with `/`.
///
/// `ext` is one or more ASCII alphanumerics; `index` matches any case.
pub fn strip_directory_index(path: &str) -> Cow<'_, str> {
    let Some((dir, file)) = path.rsplit_once('/') else {
        return Cow::Borrowed(path);
    };

    let is_index = file
        .get(..6)
        .is_some_and(|stem| stem.eq_ignore_ascii_case("index."));
    let ext = file.get(6..).unwrap_or_default();

    if is_index && !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_alphanumeric()) {
        Cow::Owned(format!("{}/", dir))
    } else {
        Cow::Borrowed(path)
    }
}

/// Collapse runs of slashes.
///
/// A run directly after `:` is an embedded scheme separator and shrinks to at
/// most `//`. Any other run of two or more becomes a single `/`.
pub fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut chars = path.chars().peekable();
    let mut prev = None;

    while let Some(c) = chars.next() {
        if c != '/' {
            out.push(c);
            prev = Some(c);
            continue;
        }

        let mut run = 1;
        while chars.next_if_eq(&'/').is_some() {
            run += 1;
        }
        let keep = if prev == Some(':') { run.min(2) } else { 1 };
        out.extend(std::iter::repeat('/').take(keep));
        prev = Some('/');
    }

    out
}

/// Drop one trailing `/` from a serialized URL unless it ends in `/#/`.
pub fn strip_trailing_slash(mut serialized: String) -> String {
    if serialized.ends_with('/') && !serialized.ends_with(HASH_ROUTER_SUFFIX) {
        serialized.pop();
    }
    serialized
}
