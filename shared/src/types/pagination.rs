//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Smallest page a caller can ask for
pub const MIN_LIMIT: i64 = 1;
/// Largest page a caller can ask for
pub const MAX_LIMIT: i64 = 200;
/// Page size used when the caller does not pass one
pub const DEFAULT_LIMIT: i64 = 20;

/// Offset/limit window with sanitized bounds.
///
/// Out-of-range input is coerced rather than rejected: `limit` is clamped to
/// `[MIN_LIMIT, MAX_LIMIT]` and a negative `offset` becomes zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    limit: i64,
    offset: i64,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl PageWindow {
    /// Build a window, clamping both values into range
    pub fn clamped(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(MIN_LIMIT, MAX_LIMIT),
            offset: offset.max(0),
        }
    }

    /// Build a window from optional query parameters
    pub fn from_query(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self::clamped(limit.unwrap_or(DEFAULT_LIMIT), offset.unwrap_or(0))
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(PageWindow::clamped(500, 0).limit(), MAX_LIMIT);
        assert_eq!(PageWindow::clamped(0, 0).limit(), MIN_LIMIT);
        assert_eq!(PageWindow::clamped(-3, 0).limit(), MIN_LIMIT);
        assert_eq!(PageWindow::clamped(50, 0).limit(), 50);
    }

    #[test]
    fn test_negative_offset_becomes_zero() {
        assert_eq!(PageWindow::clamped(10, -5).offset(), 0);
        assert_eq!(PageWindow::clamped(10, 40).offset(), 40);
    }

    #[test]
    fn test_query_defaults() {
        let window = PageWindow::from_query(None, None);
        assert_eq!(window, PageWindow::default());
        assert_eq!(window.limit(), DEFAULT_LIMIT);
        assert_eq!(window.offset(), 0);
    }
}
