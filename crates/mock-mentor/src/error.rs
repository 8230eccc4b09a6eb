//! Error types for mentor operations.

use thiserror::Error;

/// Errors a mentor can return.
#[derive(Debug, Error)]
pub enum MentorError {
    /// The mentor backend cannot answer right now.
    #[error("mentor unavailable: {0}")]
    Unavailable(String),
}
