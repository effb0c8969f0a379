//! Offset-based page tokens
//!
//! Tokens are URL-safe base64 of `offset:<n>`. Anything else is rejected as an
//! invalid page token.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use crate::domain::backend::BackendError;

const TOKEN_PREFIX: &str = "offset:";

pub fn encode_page_token(offset: usize) -> String {
    URL_SAFE_NO_PAD.encode(format!("{}{}", TOKEN_PREFIX, offset))
}

pub fn decode_page_token(token: &str) -> Result<usize, BackendError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|_| BackendError::InvalidPageToken)?;
    let text = String::from_utf8(bytes).map_err(|_| BackendError::InvalidPageToken)?;

    text.strip_prefix(TOKEN_PREFIX)
        .and_then(|offset| offset.parse().ok())
        .ok_or(BackendError::InvalidPageToken)
}

/// Slices one page out of `items`, returning the token for the next page
pub fn paginate<T: Clone>(
    items: &[T],
    page_token: Option<&str>,
    page_size: u32,
) -> Result<(Vec<T>, Option<String>), BackendError> {
    let offset = match page_token {
        Some(token) => decode_page_token(token)?,
        None => 0,
    };

    if offset > items.len() {
        return Err(BackendError::InvalidPageToken);
    }

    let end = (offset + page_size.max(1) as usize).min(items.len());
    let next = (end < items.len()).then(|| encode_page_token(end));

    Ok((items[offset..end].to_vec(), next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        assert_eq!(decode_page_token(&encode_page_token(42)).unwrap(), 42);
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(matches!(
            decode_page_token("!!not-base64!!"),
            Err(BackendError::InvalidPageToken)
        ));
        assert!(matches!(
            decode_page_token(&URL_SAFE_NO_PAD.encode("cursor:7")),
            Err(BackendError::InvalidPageToken)
        ));
    }

    #[test]
    fn test_paginate_walks_all_pages() {
        let items: Vec<i32> = (1..=5).collect();

        let (first, token) = paginate(&items, None, 2).unwrap();
        assert_eq!(first, vec![1, 2]);

        let (second, token) = paginate(&items, token.as_deref(), 2).unwrap();
        assert_eq!(second, vec![3, 4]);

        let (last, token) = paginate(&items, token.as_deref(), 2).unwrap();
        assert_eq!(last, vec![5]);
        assert!(token.is_none());
    }

    #[test]
    fn test_offset_past_end_rejected() {
        let items = vec![1, 2];
        let token = encode_page_token(10);

        assert!(matches!(
            paginate(&items, Some(&token), 2),
            Err(BackendError::InvalidPageToken)
        ));
    }
}
