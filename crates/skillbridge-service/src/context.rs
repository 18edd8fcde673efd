//! Request context carrying the authenticated user.

use serde::{Deserialize, Serialize};

use skillbridge_core::types::UserId;

/// Context for the current authenticated request.
///
/// Built by the API layer from a verified bearer token and passed into
/// feed operations so that every call knows *who* is acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
