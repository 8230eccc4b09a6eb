//! Entity records.
//!
//! Field names serialize in camelCase and status tags in upper snake case,
//! matching the JSON the SkillSync UI reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Synthesized id (e.g., "user_1718000000000")
    pub id: String,
    /// Email the user signed in with
    pub email: String,
    /// Display name
    pub name: String,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Whether onboarding has been completed
    #[serde(default)]
    pub is_onboarded: bool,
}

/// Project difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Starter,
    Intermediate,
    Advanced,
}

/// Whether a project is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    Archived,
}

/// A guided project a student can enroll in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_template: Option<String>,
    /// Expected duration in weeks
    pub estimated_weeks: u32,
    pub status: ProjectStatus,
    pub tasks: Vec<Task>,
}

/// Kanban column of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Backlog,
    InProgress,
    Review,
    Done,
}

/// A unit of work inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// Display position within the owning project
    pub order: u32,
    /// Acceptance criteria
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptance: Option<String>,
    pub points: u32,
}

/// Where a message was posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageChannel {
    MentorChat,
    System,
    Review,
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageSender {
    AiMentor,
    System,
    Student,
}

/// A message in the student's inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    pub channel: MessageChannel,
    pub from: MessageSender,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// A message before the store assigns its id and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub thread_id: Option<String>,
    pub channel: MessageChannel,
    pub from: MessageSender,
    pub body: String,
    pub metadata: Option<serde_json::Value>,
}

impl NewMessage {
    /// A plain message with no thread or metadata.
    pub fn new(channel: MessageChannel, from: MessageSender, body: impl Into<String>) -> Self {
        Self {
            thread_id: None,
            channel,
            from,
            body: body.into(),
            metadata: None,
        }
    }
}

/// Self-reported experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Experience {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// Student profile, one per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: String,
    pub user_id: String,
    /// IANA zone name or "UTC"
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub experience: Experience,
    pub weekly_hours: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StudentProfile {
    /// Profile used when a user saves profile fields for the first time.
    pub fn defaults_for(user_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: format!("profile-{}", user_id),
            user_id: user_id.to_string(),
            timezone: "UTC".to_string(),
            location: None,
            experience: Experience::Beginner,
            weekly_hours: 10,
            goals: None,
            github_url: None,
            linkedin_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// An achievement in the badge catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    /// Stable machine code (e.g., "FIRST_SUBMISSION")
    pub code: String,
    pub name: String,
    pub icon: String,
    pub criteria: String,
    pub xp: u32,
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub student_id: String,
    pub name: String,
    pub xp: u32,
    /// 1-based position
    pub rank: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// What a submission covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionKind {
    Task,
    Project,
}

/// Review state of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    PendingReview,
    ChangesRequested,
    Approved,
}

/// Severity of a review thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSeverity {
    Info,
    Warn,
    Blocker,
}

/// Kind of a single review remark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewItemKind {
    Suggestion,
    Issue,
    Praise,
}

/// A remark anchored to a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(rename = "type")]
    pub kind: ReviewItemKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix_suggestion: Option<String>,
}

/// Review discussion attached to a submission.
///
/// Nothing creates these yet; the type exists so submissions serialize with
/// the shape the UI expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewThread {
    pub id: String,
    pub submission_id: String,
    pub summary: String,
    pub severity: ReviewSeverity,
    pub items: Vec<ReviewItem>,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
}

/// Work handed in for review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub student_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: SubmissionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_url: Option<String>,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub reviews: Vec<ReviewThread>,
}

/// A submission before the store assigns id, timestamp and reviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub student_id: String,
    pub task_id: Option<String>,
    pub project_id: Option<String>,
    pub kind: SubmissionKind,
    pub notes: Option<String>,
    pub repo_url: Option<String>,
    pub zip_url: Option<String>,
    pub status: SubmissionStatus,
}

/// Technology area of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillArea {
    Frontend,
    Backend,
    #[serde(rename = "Full-Stack")]
    FullStack,
    Data,
    DevOps,
    Mobile,
}

/// An entry in the skills catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub area: SkillArea,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A skill a student rated during onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSkill {
    pub id: String,
    pub student_id: String,
    pub skill_id: String,
    /// Self-rated level, 1 through 5
    pub level: u8,
    pub skill: Skill,
}

/// A skill pick submitted by the onboarding wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSelection {
    pub skill_id: String,
    pub level: u8,
}

/// Preference step of the onboarding wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingPreferences {
    #[serde(default)]
    pub project_types: Vec<String>,
    #[serde(default)]
    pub stack_focus: Vec<String>,
    #[serde(default)]
    pub available_days: Vec<String>,
}

/// Everything collected by the onboarding wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingData {
    #[serde(default)]
    pub profile: crate::patch::ProfilePatch,
    #[serde(default)]
    pub skills: Vec<SkillSelection>,
    #[serde(default)]
    pub preferences: OnboardingPreferences,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_wire_format() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");

        let status: TaskStatus = serde_json::from_str("\"DONE\"").unwrap();
        assert_eq!(status, TaskStatus::Done);
    }

    #[test]
    fn test_message_channel_and_sender_tags() {
        assert_eq!(
            serde_json::to_string(&MessageChannel::MentorChat).unwrap(),
            "\"MENTOR_CHAT\""
        );
        assert_eq!(
            serde_json::to_string(&MessageSender::AiMentor).unwrap(),
            "\"AI_MENTOR\""
        );
    }

    #[test]
    fn test_auth_user_camel_case() {
        let user = AuthUser {
            id: "user_1".to_string(),
            email: "a@b.c".to_string(),
            name: "A".to_string(),
            avatar: None,
            is_onboarded: true,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["isOnboarded"], true);
        assert!(value.get("avatar").is_none());
    }

    #[test]
    fn test_submission_tags() {
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::PendingReview).unwrap(),
            "\"PENDING_REVIEW\""
        );
        let kind: SubmissionKind = serde_json::from_str("\"PROJECT\"").unwrap();
        assert_eq!(kind, SubmissionKind::Project);
    }

    #[test]
    fn test_skill_area_full_stack_name() {
        let area: SkillArea = serde_json::from_str("\"Full-Stack\"").unwrap();
        assert_eq!(area, SkillArea::FullStack);
    }

    #[test]
    fn test_profile_defaults() {
        let now = Utc::now();
        let profile = StudentProfile::defaults_for("user_7", now);

        assert_eq!(profile.id, "profile-user_7");
        assert_eq!(profile.timezone, "UTC");
        assert_eq!(profile.experience, Experience::Beginner);
        assert_eq!(profile.weekly_hours, 10);
        assert_eq!(profile.created_at, now);
    }
}
