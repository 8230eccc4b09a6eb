//! Async mock API for the SkillSync learning platform.
//!
//! [`MockApi`] presents the calls a real SkillSync backend would expose,
//! backed by the in-memory [`mock_store::MockDataStore`], the
//! [`auth_store::AuthStore`] session and a [`mock_mentor::Mentor`]. Every
//! call sleeps a simulated network delay (see [`latency`]) unless the
//! facade runs with [`Latency::Instant`].
//!
//! # Architecture
//!
//! ```text
//! caller (UI, HTTP gateway, tests)
//!          ↓
//! ┌──────────────────────────────────────────────┐
//! │                   MockApi                    │
//! │  1. user-scoped call? require a signed-in    │
//! │     user, else ApiError::NotAuthenticated    │
//! │  2. sleep the operation's delay              │
//! │  3. read/write MockDataStore / AuthStore     │
//! │  4. mentor chat? spawn the AI reply task     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_api::{ApiConfig, MockApi};
//! use skillsync_core::MessageChannel;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), mock_api::ApiError> {
//!     let api = MockApi::from_config(&ApiConfig::instant()).await;
//!
//!     let outcome = api.auth().signup("jane.doe@x.com", "abc123", None).await;
//!     assert!(outcome.success);
//!
//!     let sent = api.messages().send("I have an error in my code", MessageChannel::MentorChat).await?;
//!     if let Some(reply) = sent.mentor_reply {
//!         let reply = reply.wait().await;
//!         println!("Mentor: {:?}", reply.map(|m| m.body));
//!     }
//!     Ok(())
//! }
//! ```

mod api;
mod config;
mod error;
pub mod latency;
mod reply;
mod types;

pub use api::{
    AuthEndpoints, BadgeEndpoints, ContactEndpoints, LeaderboardEndpoints, MentorEndpoints,
    MessageEndpoints, MockApi, OnboardingEndpoints, ProfileEndpoints, ProjectEndpoints,
    SkillEndpoints, SubmissionEndpoints, TaskEndpoints,
};
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, Result};
pub use latency::Latency;
pub use mock_mentor::MentorResponse;
pub use reply::MentorReply;
pub use types::{
    AuthOutcome, AuthStatus, ContactRequest, ContactResponse, OnboardingResult, SentMessage,
    SubmissionRequest,
};
