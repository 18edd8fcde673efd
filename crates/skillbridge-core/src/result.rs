//! Convenience result type alias for SkillBridge.

use crate::error::AppError;

/// A specialized `Result` type for SkillBridge operations.
pub type AppResult<T> = Result<T, AppError>;
