//! The Mentor trait definition.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::MentorError;

/// A mentor's answer to a student's question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorResponse {
    /// Main reply text
    pub message: String,
    /// Short practical tips
    pub tips: Vec<String>,
    /// Suggested next actions
    pub next_steps: Vec<String>,
}

/// Answers student questions.
///
/// This trait is object-safe and can be used as `Arc<dyn Mentor>`.
#[async_trait]
pub trait Mentor: Send + Sync {
    /// Answer `prompt`.
    async fn respond(&self, prompt: &str) -> Result<MentorResponse, MentorError>;

    /// Human-readable name of this implementation.
    fn name(&self) -> &str;
}
