//! Convenience result type alias for the guardrail.

use crate::error::AppError;

/// A specialized `Result` type for guardrail infrastructure operations.
pub type AppResult<T> = Result<T, AppError>;
