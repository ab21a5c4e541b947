//! Opaque page tokens for offset-based listing.
//!
//! A token is the URL-safe base64 (no padding) of a compact JSON object
//! `{"limit":L,"offset":O}`. Tokens are not signed; they are a convenience
//! for resuming a listing, not a security boundary.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page size used when the caller supplies none (or a non-positive one).
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page a caller can ask for; larger sizes are clamped to it.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Errors raised while decoding a page token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageTokenError {
    #[error("page token is not valid base64: {0}")]
    Encoding(String),

    #[error("page token has an invalid payload: {0}")]
    Payload(String),

    #[error("page token limit must be positive")]
    ZeroLimit,
}

/// Position within a listing: page size plus number of records already returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageCursor {
    pub limit: u32,
    pub offset: u32,
}

impl PageCursor {
    pub const fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// First page for a raw page size.
    ///
    /// Non-positive sizes fall back to [`DEFAULT_PAGE_SIZE`]; sizes above
    /// [`MAX_PAGE_SIZE`] are clamped to it.
    pub fn first_page(page_size: i64) -> Self {
        let limit = if page_size <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            u32::try_from(page_size.min(i64::from(MAX_PAGE_SIZE))).unwrap_or(MAX_PAGE_SIZE)
        };
        Self::new(limit, 0)
    }

    /// Cursor for the page following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::new(self.limit, self.offset.saturating_add(self.limit))
    }

    /// Rows to request from the store: one extra to detect a following page.
    pub const fn fetch_limit(self) -> u32 {
        self.limit.saturating_add(1)
    }

    /// Encode as an opaque token.
    pub fn encode(&self) -> String {
        // Serializing two integers cannot fail
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    /// Decode a token produced by [`PageCursor::encode`].
    pub fn decode(token: &str) -> Result<Self, PageTokenError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(token.trim())
            .map_err(|e| PageTokenError::Encoding(e.to_string()))?;
        let cursor: Self =
            serde_json::from_slice(&bytes).map_err(|e| PageTokenError::Payload(e.to_string()))?;
        if cursor.limit == 0 {
            return Err(PageTokenError::ZeroLimit);
        }
        Ok(cursor)
    }
}

/// A list request: either a page size for the first page or a continuation token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page_size: i64,
    pub page_token: Option<String>,
}

impl PageRequest {
    /// Request the first page with the given size.
    pub const fn with_size(page_size: i64) -> Self {
        Self {
            page_size,
            page_token: None,
        }
    }

    /// Continue from a previously issued token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            page_size: 0,
            page_token: Some(token.into()),
        }
    }

    /// Resolve to a cursor. A non-empty token takes precedence over the page size.
    pub fn cursor(&self) -> Result<PageCursor, PageTokenError> {
        match self.page_token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => PageCursor::decode(token),
            _ => Ok(PageCursor::first_page(self.page_size)),
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Token for the next page; `None` at the end of the listing.
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    /// Build a page from a store result fetched with [`PageCursor::fetch_limit`].
    ///
    /// The store has already applied the offset; only the look-ahead row is dropped here.
    pub fn from_lookahead(mut rows: Vec<T>, cursor: PageCursor) -> Self {
        let limit = cursor.limit as usize;
        if rows.len() > limit {
            rows.truncate(limit);
            Self {
                items: rows,
                next_page_token: Some(cursor.next().encode()),
            }
        } else {
            Self {
                items: rows,
                next_page_token: None,
            }
        }
    }
}
