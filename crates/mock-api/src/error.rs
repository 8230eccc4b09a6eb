//! Error types for the mock API.

use mock_mentor::MentorError;
use thiserror::Error;

/// Errors a facade call can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A user-scoped call was made with nobody signed in.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The mentor could not answer.
    #[error("mentor error: {0}")]
    Mentor(#[from] MentorError),
}

/// Result type for facade calls.
pub type Result<T> = std::result::Result<T, ApiError>;
