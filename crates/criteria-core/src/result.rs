//! Convenience result type alias for the criteria crates.

use crate::error::AppError;

/// A specialized `Result` type for criteria operations that can fail.
///
/// The criteria model itself is total; this alias covers the edges
/// (configuration loading, plan serialization).
pub type AppResult<T> = Result<T, AppError>;
