//! Request and response shapes of the facade.

use auth_store::AuthError;
use serde::{Deserialize, Serialize};
use skillsync_core::{AuthUser, Message, StudentProfile, StudentSkill, SubmissionKind};

use crate::reply::MentorReply;

/// Outcome of a login or signup. Callers must check `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthOutcome {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: &AuthError) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
        }
    }
}

impl<T> From<Result<T, AuthError>> for AuthOutcome {
    fn from(result: Result<T, AuthError>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(e) => Self::failure(&e),
        }
    }
}

/// Who is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    pub user: Option<AuthUser>,
    pub authenticated: bool,
}

/// A sent message and, for mentor chat, the pending automatic reply.
#[derive(Debug)]
pub struct SentMessage {
    pub message: Message,
    pub mentor_reply: Option<MentorReply>,
}

/// Fields a student provides when submitting work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: SubmissionKind,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
}

/// Everything stored when onboarding completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingResult {
    pub user: AuthUser,
    pub profile: StudentProfile,
    pub skills: Vec<StudentSkill>,
}

/// A message from the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Acknowledgement of a contact form message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_outcome_from_result() {
        let ok: Result<(), AuthError> = Ok(());
        assert_eq!(AuthOutcome::from(ok), AuthOutcome::success());

        let failed = AuthOutcome::from(Err::<(), _>(AuthError::MissingCredentials));
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("Email and password are required"));
    }

    #[test]
    fn test_auth_outcome_wire_shape() {
        let json = serde_json::to_value(AuthOutcome::success()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));
    }

    #[test]
    fn test_submission_request_from_json() {
        let request: SubmissionRequest =
            serde_json::from_str(r#"{"projectId":"project-2","type":"PROJECT"}"#).unwrap();

        assert_eq!(request.kind, SubmissionKind::Project);
        assert_eq!(request.project_id.as_deref(), Some("project-2"));
        assert!(request.task_id.is_none());
    }
}
