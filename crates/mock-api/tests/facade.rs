//! End-to-end tests for the mock API facade.

use std::sync::Arc;
use std::time::Duration;

use auth_store::{AuthStore, FileStorage};
use mock_api::{
    ApiConfig, ApiError, ContactRequest, Latency, MockApi, SubmissionRequest,
};
use mock_mentor::{async_trait, KeywordMentor, Mentor, MentorError, MentorResponse, ReplyCategory};
use mock_store::MockDataStore;
use skillsync_core::{
    Experience, MessageChannel, MessageSender, OnboardingData, ProfilePatch, SkillSelection,
    SubmissionKind, SubmissionStatus, TaskPatch, TaskStatus,
};
use tokio::time::Instant;

fn api(latency: Latency) -> MockApi {
    MockApi::new(
        Arc::new(MockDataStore::seeded()),
        Arc::new(AuthStore::in_memory()),
        Arc::new(KeywordMentor::new()),
        latency,
    )
}

async fn signed_in(latency: Latency) -> MockApi {
    let api = api(latency);
    assert!(api.auth().signup("jane.doe@x.com", "abc123", None).await.success);
    api
}

struct SilentMentor;

#[async_trait]
impl Mentor for SilentMentor {
    async fn respond(&self, _prompt: &str) -> Result<MentorResponse, MentorError> {
        Err(MentorError::Unavailable("offline".to_string()))
    }

    fn name(&self) -> &str {
        "SilentMentor"
    }
}

#[tokio::test]
async fn test_signup_scenario() {
    let api = api(Latency::Instant);

    let outcome = api.auth().signup("jane.doe@x.com", "abc123", None).await;
    assert!(outcome.success);
    assert!(outcome.error.is_none());

    let status = api.auth().status().await;
    assert!(status.authenticated);
    let user = status.user.unwrap();
    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.email, "jane.doe@x.com");
}

#[tokio::test]
async fn test_login_requires_credentials() {
    let api = api(Latency::Instant);

    for (email, password) in [("", ""), ("a@b.c", ""), ("", "pw")] {
        let outcome = api.auth().login(email, password).await;
        assert!(!outcome.success);
        assert_eq!(
            outcome.error.as_deref(),
            Some("Email and password are required")
        );
    }
    assert!(!api.auth().status().await.authenticated);
}

#[tokio::test(start_paused = true)]
async fn test_failed_login_returns_without_delay() {
    let api = api(Latency::Simulated);

    let start = Instant::now();
    assert!(!api.auth().login("", "").await.success);
    assert!(start.elapsed() < Duration::from_millis(1000));

    let start = Instant::now();
    assert!(api.auth().login("a@b.c", "pw").await.success);
    assert!(start.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test]
async fn test_logout_clears_user() {
    let api = signed_in(Latency::Instant).await;

    api.auth().logout().await;
    let status = api.auth().status().await;
    assert!(!status.authenticated);
    assert!(status.user.is_none());
}

#[tokio::test]
async fn test_user_scoped_calls_require_a_user() {
    let api = api(Latency::Instant);

    assert!(matches!(
        api.projects().enroll("project-1").await,
        Err(ApiError::NotAuthenticated)
    ));
    assert!(matches!(
        api.messages().send("hi", MessageChannel::MentorChat).await,
        Err(ApiError::NotAuthenticated)
    ));
    assert!(matches!(
        api.profile().get().await,
        Err(ApiError::NotAuthenticated)
    ));
    assert!(matches!(
        api.profile().update(&ProfilePatch::default()).await,
        Err(ApiError::NotAuthenticated)
    ));
    assert!(matches!(
        api.submissions()
            .create(SubmissionRequest {
                task_id: Some("task-1".to_string()),
                project_id: None,
                kind: SubmissionKind::Task,
                notes: None,
                repo_url: None,
            })
            .await,
        Err(ApiError::NotAuthenticated)
    ));
    assert!(matches!(
        api.onboarding().complete(&OnboardingData::default()).await,
        Err(ApiError::NotAuthenticated)
    ));

    // Nothing was written.
    assert_eq!(api.messages().list().await.len(), 2);
}

#[tokio::test]
async fn test_enroll_is_idempotent() {
    let api = signed_in(Latency::Instant).await;

    api.projects().enroll("project-2").await.unwrap();
    let enrolled = api.projects().enroll("project-2").await.unwrap();
    assert_eq!(enrolled, vec!["project-2".to_string()]);
    assert_eq!(api.projects().enrolled().await.unwrap(), enrolled);
}

#[tokio::test]
async fn test_profile_update_merges() {
    let api = signed_in(Latency::Instant).await;
    assert!(api.profile().get().await.unwrap().is_not_found());

    let first = api
        .profile()
        .update(&ProfilePatch {
            timezone: Some("America/Chicago".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(first.experience, Experience::Beginner);
    assert_eq!(first.weekly_hours, 10);

    api.profile()
        .update(&ProfilePatch {
            goals: Some("X".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let profile = api.profile().get().await.unwrap().found().unwrap();
    assert_eq!(profile.goals.as_deref(), Some("X"));
    assert_eq!(profile.timezone, "America/Chicago");
    assert_eq!(profile.id, first.id);
    assert_eq!(profile.created_at, first.created_at);
}

#[tokio::test]
async fn test_task_update_found_and_missing() {
    let api = api(Latency::Instant);
    let before = api.tasks().list(None).await.len();

    let updated = api
        .tasks()
        .update("task-3", &TaskPatch::status(TaskStatus::Done))
        .await;
    assert_eq!(updated.found().map(|t| t.status), Some(TaskStatus::Done));

    let missing = api
        .tasks()
        .update("task-99", &TaskPatch::status(TaskStatus::Done))
        .await;
    assert!(missing.is_not_found());
    assert_eq!(api.tasks().list(None).await.len(), before);
    assert_eq!(api.tasks().list(Some("project-1")).await.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_mentor_chat_auto_reply_scenario() {
    let api = signed_in(Latency::Simulated).await;
    let seeded = api.store().messages().await.len();

    let sent = api
        .messages()
        .send("I have an error in my code", MessageChannel::MentorChat)
        .await
        .unwrap();
    let sent_at = Instant::now();

    assert_eq!(sent.message.from, MessageSender::Student);
    assert_eq!(sent.message.channel, MessageChannel::MentorChat);
    let messages = api.store().messages().await;
    assert_eq!(messages.len(), seeded + 1);
    assert_eq!(messages.last(), Some(&sent.message));

    let reply = sent.mentor_reply.unwrap().wait().await.unwrap();
    let waited = sent_at.elapsed();
    assert!(waited >= Duration::from_millis(1000));
    assert!(waited <= Duration::from_millis(3000));

    assert_eq!(reply.from, MessageSender::AiMentor);
    assert_eq!(reply.channel, MessageChannel::MentorChat);
    assert_eq!(reply.body, ReplyCategory::Debugging.reply());

    let messages = api.store().messages().await;
    assert_eq!(messages.len(), seeded + 2);
    assert_eq!(messages.last(), Some(&reply));
}

#[tokio::test]
async fn test_system_message_gets_no_reply() {
    let api = signed_in(Latency::Instant).await;

    let sent = api
        .messages()
        .send("status update", MessageChannel::System)
        .await
        .unwrap();
    assert!(sent.mentor_reply.is_none());
    assert_eq!(api.messages().list().await.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_reply_never_lands() {
    let api = signed_in(Latency::Simulated).await;

    let sent = api
        .messages()
        .send("react question", MessageChannel::MentorChat)
        .await
        .unwrap();
    let reply = sent.mentor_reply.unwrap();
    reply.cancel();

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(reply.is_finished());
    assert!(reply.wait().await.is_none());
    assert_eq!(api.store().messages().await.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_reply_still_lands() {
    let api = signed_in(Latency::Simulated).await;

    let sent = api
        .messages()
        .send("how do I fetch data?", MessageChannel::MentorChat)
        .await
        .unwrap();
    drop(sent.mentor_reply);

    tokio::time::sleep(Duration::from_millis(3100)).await;
    let messages = api.store().messages().await;
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[3].body, ReplyCategory::Data.reply());
}

#[tokio::test]
async fn test_failed_mentor_appends_nothing() {
    let api = MockApi::new(
        Arc::new(MockDataStore::seeded()),
        Arc::new(AuthStore::in_memory()),
        Arc::new(SilentMentor),
        Latency::Instant,
    );
    api.auth().login("a@b.c", "pw").await;

    let sent = api
        .messages()
        .send("hello", MessageChannel::MentorChat)
        .await
        .unwrap();
    assert!(sent.mentor_reply.unwrap().wait().await.is_none());
    assert_eq!(api.messages().list().await.len(), 3);

    assert!(matches!(
        api.mentor().chat("hello").await,
        Err(ApiError::Mentor(_))
    ));
}

#[tokio::test]
async fn test_mentor_chat_response() {
    let api = api(Latency::Instant);

    let response = api.mentor().chat("My React component won't render").await.unwrap();
    assert_eq!(response.message, ReplyCategory::React.reply());
    assert_eq!(response.tips[0], "Use TypeScript for better type safety");
    assert_eq!(response.next_steps.len(), 4);
}

#[tokio::test]
async fn test_submission_create_and_get() {
    let api = signed_in(Latency::Instant).await;
    let user = api.auth().status().await.user.unwrap();

    let submission = api
        .submissions()
        .create(SubmissionRequest {
            task_id: Some("task-2".to_string()),
            project_id: Some("project-1".to_string()),
            kind: SubmissionKind::Task,
            notes: Some("CRUD done".to_string()),
            repo_url: Some("https://github.com/jane/tasks".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(submission.student_id, user.id);
    assert_eq!(submission.status, SubmissionStatus::PendingReview);
    assert!(submission.reviews.is_empty());

    let fetched = api.submissions().get(&submission.id).await;
    assert_eq!(fetched.found(), Some(submission));
    assert!(api.submissions().get("submission-missing").await.is_not_found());
}

#[tokio::test]
async fn test_catalogs_are_read_only() {
    let api = api(Latency::Instant);

    let badges = api.badges().list().await;
    assert_eq!(badges.len(), 3);
    assert_eq!(api.badges().list().await, badges);

    let leaderboard = api.leaderboard().get().await;
    assert_eq!(leaderboard[0].name, "Alex Chen");
    assert_eq!(leaderboard[0].rank, 1);

    assert_eq!(api.skills().list().await.len(), 12);
    assert_eq!(api.projects().list().await.len(), 3);
    assert!(api.projects().get("project-3").await.is_found());
}

#[tokio::test]
async fn test_onboarding_complete() {
    let api = signed_in(Latency::Instant).await;

    let data = OnboardingData {
        profile: ProfilePatch {
            experience: Some(Experience::Intermediate),
            weekly_hours: Some(15),
            ..Default::default()
        },
        skills: vec![
            SkillSelection {
                skill_id: "2".to_string(),
                level: 3,
            },
            SkillSelection {
                skill_id: "9".to_string(),
                level: 2,
            },
        ],
        ..Default::default()
    };

    let result = api.onboarding().complete(&data).await.unwrap();
    assert!(result.user.is_onboarded);
    assert_eq!(result.profile.experience, Experience::Intermediate);
    assert_eq!(result.profile.weekly_hours, 15);
    assert_eq!(result.skills.len(), 2);
    assert_eq!(result.skills[0].skill.name, "TypeScript");

    assert!(api.auth().status().await.user.unwrap().is_onboarded);
    assert_eq!(
        api.profile().get().await.unwrap().found(),
        Some(result.profile)
    );
}

#[tokio::test(start_paused = true)]
async fn test_contact_always_succeeds() {
    let api = api(Latency::Simulated);

    let start = Instant::now();
    let response = api
        .contact()
        .send(&ContactRequest {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            message: "Do you offer team plans?".to_string(),
        })
        .await;

    assert!(response.success);
    assert_eq!(response.message, "Message sent successfully!");
    assert!(start.elapsed() >= Duration::from_millis(800));
}

#[tokio::test]
async fn test_from_config_restores_file_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = ApiConfig {
        latency: Latency::Instant,
        storage_dir: Some(dir.path().to_path_buf()),
    };

    let first = MockApi::from_config(&config).await;
    assert!(first.auth().login("alex@example.com", "pw").await.success);

    let second = MockApi::from_config(&config).await;
    let user = second.auth().status().await.user.unwrap();
    assert_eq!(user.email, "alex@example.com");

    // Runtime data is not persisted.
    second.auth().logout().await;
    let storage = FileStorage::new(dir.path());
    let restored = AuthStore::load(Arc::new(storage)).await;
    assert!(restored.current_user().await.is_none());
}
