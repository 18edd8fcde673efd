//! Request DTOs.

use serde::{Deserialize, Serialize};

use skillbridge_core::error::AppError;

/// Query string of `GET /api/activities`.
///
/// Values arrive as raw strings so that a malformed number is reported as
/// a validation error in the standard error body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedQuery {
    /// Page size.
    pub limit: Option<String>,
    /// Number of records to skip.
    pub skip: Option<String>,
    /// Only `"true"` enables the filter.
    pub unread_only: Option<String>,
}

/// Parsed form of [`FeedQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedParams {
    /// Page size, if given.
    pub limit: Option<u64>,
    /// Offset.
    pub skip: u64,
    /// Unread filter.
    pub unread_only: bool,
}

impl FeedQuery {
    /// Parses the raw query values.
    pub fn parse(&self) -> Result<FeedParams, AppError> {
        Ok(FeedParams {
            limit: parse_number("limit", self.limit.as_deref())?,
            skip: parse_number("skip", self.skip.as_deref())?.unwrap_or(0),
            unread_only: self.unread_only.as_deref() == Some("true"),
        })
    }
}

fn parse_number(name: &str, raw: Option<&str>) -> Result<Option<u64>, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| AppError::validation(format!("'{name}' must be a non-negative integer"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillbridge_core::error::ErrorKind;

    fn query(limit: Option<&str>, skip: Option<&str>, unread: Option<&str>) -> FeedQuery {
        FeedQuery {
            limit: limit.map(String::from),
            skip: skip.map(String::from),
            unread_only: unread.map(String::from),
        }
    }

    #[test]
    fn test_defaults() {
        let params = FeedQuery::default().parse().unwrap();
        assert_eq!(
            params,
            FeedParams {
                limit: None,
                skip: 0,
                unread_only: false
            }
        );
    }

    #[test]
    fn test_only_literal_true_enables_filter() {
        assert!(query(None, None, Some("true")).parse().unwrap().unread_only);
        assert!(!query(None, None, Some("1")).parse().unwrap().unread_only);
        assert!(!query(None, None, Some("false")).parse().unwrap().unread_only);
    }

    #[test]
    fn test_bad_numbers_are_rejected() {
        let err = query(Some("ten"), None, None).parse().unwrap_err();
        assert!(err.is(ErrorKind::Validation));
        let err = query(None, Some("-1"), None).parse().unwrap_err();
        assert!(err.is(ErrorKind::Validation));
    }

    #[test]
    fn test_numbers_parse() {
        let params = query(Some("5"), Some("10"), None).parse().unwrap();
        assert_eq!(params.limit, Some(5));
        assert_eq!(params.skip, 10);
    }
}
