//! Strict percent-decoding of the `q` parameter
//!
//! Clients escape the query text once more on top of the regular URL
//! encoding. `+` decodes to a space and every `%` must start a two digit hex
//! escape.

use percent_encoding::percent_decode_str;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid escape sequence at byte {0}")]
    InvalidEscape(usize),

    #[error("decoded query is not valid UTF-8")]
    InvalidUtf8,
}

pub fn decode_query(input: &str) -> Result<String, DecodeError> {
    if let Some(at) = first_invalid_escape(input.as_bytes()) {
        return Err(DecodeError::InvalidEscape(at));
    }

    let spaced = input.replace('+', " ");

    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecodeError::InvalidUtf8)
}

/// `percent_decode_str` passes malformed escapes through unchanged
fn first_invalid_escape(bytes: &[u8]) -> Option<usize> {
    bytes
        .iter()
        .enumerate()
        .filter(|(_, byte)| **byte == b'%')
        .map(|(at, _)| at)
        .find(|&at| {
            let hex = |offset: usize| bytes.get(at + offset).is_some_and(u8::is_ascii_hexdigit);
            !(hex(1) && hex(2))
        })
}
