//! Best-effort percent decoding.
//!
//! Decoding never aborts normalization: a failed decode keeps the value it
//! was given. [`or_keep`] applies that policy to any fallible decoder.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use thiserror::Error;
use tracing::trace;

/// Characters `decodeURI`-style decoding leaves escaped.
const URI_RESERVED: &[u8] = b";/?:@&=+$,#";

/// Why a percent decode was abandoned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed percent escape at byte {0}")]
    MalformedEscape(usize),

    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// Run `decode` on `value`, falling back to `value` unchanged on failure.
pub fn or_keep<'a, F>(value: &'a str, decode: F) -> Cow<'a, str>
where
    F: FnOnce(&str) -> Result<String, DecodeError>,
{
    match decode(value) {
        Ok(decoded) => Cow::Owned(decoded),
        Err(err) => {
            trace!(value = %value, error = %err, "decode failed, keeping previous value");
            Cow::Borrowed(value)
        }
    }
}

/// Decode `%XX` escapes except those for URI-reserved characters.
///
/// Fails on an escape that is not followed by two hex digits, or when the
/// decoded bytes are not UTF-8.
pub fn decode_uri(input: &str) -> Result<String, DecodeError> {
    let mut decoded = String::with_capacity(input.len());
    let mut chunk_start = 0;

    for (pos, _) in input.match_indices('%') {
        if pos < chunk_start {
            continue;
        }
        let byte = escape_at(input, pos)?;
        if URI_RESERVED.contains(&byte) {
            decoded.push_str(&decode_utf8(&input[chunk_start..pos])?);
            decoded.push_str(&input[pos..pos + 3]);
            chunk_start = pos + 3;
        }
    }
    decoded.push_str(&decode_utf8(&input[chunk_start..])?);

    Ok(decoded)
}

/// Decode every `%XX` escape, `decodeURIComponent`-style.
pub fn decode_component(input: &str) -> Result<String, DecodeError> {
    for (pos, _) in input.match_indices('%') {
        escape_at(input, pos)?;
    }
    decode_utf8(input).map(Cow::into_owned)
}

fn escape_at(input: &str, pos: usize) -> Result<u8, DecodeError> {
    input
        .get(pos + 1..pos + 3)
        .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
        .and_then(|hex| u8::from_str_radix(hex, 16).ok())
        .ok_or(DecodeError::MalformedEscape(pos))
}

fn decode_utf8(chunk: &str) -> Result<Cow<'_, str>, DecodeError> {
    percent_decode_str(chunk)
        .decode_utf8()
        .map_err(|_| DecodeError::InvalidUtf8)
}
