//! In-memory seed data store for SkillSync.
//!
//! [`MockDataStore`] holds the seeded catalog (projects, tasks, badges,
//! leaderboard, skills, welcome messages) plus everything students create at
//! runtime (messages, profiles, enrollments, submissions, skill ratings).
//!
//! It is not a cache and not a database: nothing is evicted, nothing is
//! written to disk, and every accessor returns an owned copy.
//!
//! # Example
//!
//! ```rust
//! use mock_store::MockDataStore;
//! use skillsync_core::{TaskPatch, TaskStatus};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let store = MockDataStore::seeded();
//!
//!     let task = store.update_task("task-3", &TaskPatch::status(TaskStatus::Done)).await;
//!     assert_eq!(task.found().map(|t| t.status), Some(TaskStatus::Done));
//! }
//! ```

mod seed;
mod store;

pub use seed::SeedData;
pub use store::MockDataStore;
