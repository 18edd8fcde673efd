//! Typed path parameter helpers.

use skillbridge_core::error::AppError;
use skillbridge_core::types::NotificationId;

/// Parses an activity id from a path segment.
///
/// A malformed id cannot name an existing activity, so it is reported as
/// `NotFound` rather than a validation failure.
pub fn parse_activity_id(s: &str) -> Result<NotificationId, AppError> {
    s.parse()
        .map_err(|_| AppError::not_found("Activity not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillbridge_core::error::ErrorKind;

    #[test]
    fn test_malformed_id_is_not_found() {
        let err = parse_activity_id("507f1f77bcf86cd799439011").unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }

    #[test]
    fn test_uuid_parses() {
        let id = NotificationId::new();
        assert_eq!(parse_activity_id(&id.to_string()).unwrap(), id);
    }
}
