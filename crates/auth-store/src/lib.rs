//! Current-user session store for SkillSync.
//!
//! This crate tracks the single signed-in student and broadcasts changes:
//!
//! - [`AuthStore`] - Sign in/up/out, user updates and change listeners
//! - [`SessionStorage`] - Durable backend for the session record
//!   ([`MemoryStorage`], [`FileStorage`])
//!
//! There is no credential check: any non-empty email and password sign in.
//!
//! # Example
//!
//! ```rust
//! use auth_store::AuthStore;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), auth_store::AuthError> {
//!     let auth = AuthStore::in_memory();
//!
//!     let user = auth.sign_up("jane.doe@x.com", "abc123", None).await?;
//!     assert_eq!(user.name, "Jane Doe");
//!     assert!(auth.is_authenticated().await);
//!     Ok(())
//! }
//! ```

mod error;
mod identity;
mod storage;
mod store;

pub use error::{AuthError, StorageError};
pub use identity::{avatar_url, display_name_from_email};
pub use storage::{FileStorage, MemoryStorage, SessionStorage, AUTH_USER_KEY, SESSION_KEY};
pub use store::{validate_credentials, AuthStore, AuthSubscription};
