//! Offset-based pagination types for feed queries.

use serde::{Deserialize, Serialize};

/// Default number of items per request.
pub const DEFAULT_LIMIT: u64 = 20;
/// Upper bound applied when no explicit maximum is configured.
pub const MAX_LIMIT: u64 = 100;

/// Request parameters for offset-paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Maximum number of items to return.
    pub limit: u64,
    /// Number of items to skip after ordering.
    pub offset: u64,
}

impl PageRequest {
    /// Create a new page request, clamping `limit` into `1..=max_limit`.
    pub fn new(limit: u64, offset: u64, max_limit: u64) -> Self {
        Self {
            limit: limit.clamp(1, max_limit.max(1)),
            offset,
        }
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Return the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// `LIMIT` as a Postgres `BIGINT`.
    pub fn sql_limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }

    /// `OFFSET` as a Postgres `BIGINT`, saturating so it can never go negative.
    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset).unwrap_or(i64::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// One window of an ordered result set plus the size of the whole set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items in this window.
    pub items: Vec<T>,
    /// Total number of items matching the query, ignoring limit/offset.
    pub total: u64,
}

impl<T> Page<T> {
    /// Create a new page.
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(PageRequest::new(0, 0, 100).limit(), 1);
        assert_eq!(PageRequest::new(500, 0, 100).limit(), 100);
        assert_eq!(PageRequest::new(15, 30, 100).offset(), 30);
    }

    #[test]
    fn test_huge_offset_saturates_for_sql() {
        let req = PageRequest::new(20, 1 << 63, 100);
        assert_eq!(req.sql_offset(), i64::MAX);
        assert_eq!(PageRequest::new(20, u64::MAX, 100).sql_offset(), i64::MAX);
        assert_eq!(PageRequest::new(20, 40, 100).sql_offset(), 40);
        assert_eq!(req.sql_limit(), 20);
    }

    #[test]
    fn test_default_request() {
        let req = PageRequest::default();
        assert_eq!(req.limit, DEFAULT_LIMIT);
        assert_eq!(req.offset, 0);
    }
}
