//! Convenience result type alias for TalentGate.

use crate::error::AppError;

/// A specialized `Result` type for TalentGate operations.
pub type AppResult<T> = Result<T, AppError>;
