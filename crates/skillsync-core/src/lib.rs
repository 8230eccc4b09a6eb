//! Core types for the SkillSync mock backend.
//!
//! This crate provides the records shared by every other crate in the
//! workspace:
//!
//! - [`models`] - Entities (users, projects, tasks, messages, profiles, ...)
//! - [`patch`] - Partial-update payloads with shallow-merge semantics
//! - [`Lookup`] - Explicit found/not-found result for keyed reads
//!
//! # Example
//!
//! ```rust
//! use skillsync_core::{Lookup, TaskPatch, TaskStatus};
//!
//! let patch = TaskPatch {
//!     status: Some(TaskStatus::Done),
//!     ..Default::default()
//! };
//! assert!(patch.status.is_some());
//!
//! let missing: Lookup<u32> = Lookup::not_found("Task", "task-404");
//! assert!(missing.is_not_found());
//! ```

pub mod lookup;
pub mod models;
pub mod patch;

pub use lookup::Lookup;
pub use models::{
    AuthUser, Badge, Difficulty, Experience, LeaderboardEntry, Message, MessageChannel,
    MessageSender, NewMessage, NewSubmission, OnboardingData, OnboardingPreferences, Project,
    ProjectStatus, ReviewItem, ReviewItemKind, ReviewSeverity, ReviewThread, Skill, SkillArea,
    SkillSelection, StudentProfile, StudentSkill, Submission, SubmissionKind, SubmissionStatus,
    Task, TaskStatus,
};
pub use patch::{ProfilePatch, TaskPatch, UserPatch};
