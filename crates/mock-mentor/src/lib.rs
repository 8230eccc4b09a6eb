//! AI mentor implementations for SkillSync.
//!
//! This crate defines the [`Mentor`] trait the mock API talks to and a
//! keyword-matching implementation:
//!
//! - `KeywordMentor` - Picks a canned reply by scanning for topic keywords
//!
//! A real model-backed mentor only needs to implement [`Mentor`].
//!
//! # Example
//!
//! ```rust
//! use mock_mentor::{KeywordMentor, Mentor, ReplyCategory};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), mock_mentor::MentorError> {
//!     let mentor = KeywordMentor::new();
//!
//!     let response = mentor.respond("I have an error in my code").await?;
//!     assert_eq!(ReplyCategory::classify("I have an error"), ReplyCategory::Debugging);
//!     println!("Mentor: {}", response.message);
//!     Ok(())
//! }
//! ```

mod error;
mod keyword;
mod trait_def;

pub use async_trait::async_trait;
pub use error::MentorError;
pub use keyword::{KeywordMentor, ReplyCategory};
pub use trait_def::{Mentor, MentorResponse};
