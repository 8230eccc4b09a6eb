//! Error types for the auth store.

use thiserror::Error;

/// Errors returned by sign-in and sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email or password was empty.
    #[error("Email and password are required")]
    MissingCredentials,
}

/// Errors from a session storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored session could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
