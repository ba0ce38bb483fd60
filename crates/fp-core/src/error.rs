//! # AppError
//!
//! Centralized error handling for the feedpost crates.
//! The interaction controller itself never fails; errors only arise at the
//! ingestion boundary and in the render layer around it.

use thiserror::Error;

/// The primary error type for all fp-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A textual post identifier that is not a base-10 integer
    #[error("invalid post id {0:?}: expected a base-10 integer")]
    InvalidPostId(String),

    /// Validation failure (e.g., negative like count, malformed feed entry)
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Rendering failure in the UI layer
    #[error("template error: {0}")]
    Template(String),
}

/// A specialized Result type for feedpost logic.
pub type Result<T> = std::result::Result<T, AppError>;
