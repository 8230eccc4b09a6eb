//! The mock API facade.

use std::sync::Arc;

use auth_store::{validate_credentials, AuthStore, FileStorage, MemoryStorage, SessionStorage};
use chrono::Utc;
use mock_mentor::{KeywordMentor, Mentor, MentorResponse};
use mock_store::MockDataStore;
use skillsync_core::{
    AuthUser, Badge, LeaderboardEntry, Lookup, Message, MessageChannel, MessageSender,
    NewMessage, NewSubmission, OnboardingData, Project, ProfilePatch, Skill, StudentProfile,
    Submission, SubmissionStatus, Task, TaskPatch, UserPatch,
};
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::latency::{delays, Delay, Latency};
use crate::reply::MentorReply;
use crate::types::{
    AuthOutcome, AuthStatus, ContactRequest, ContactResponse, OnboardingResult, SentMessage,
    SubmissionRequest,
};

struct Services {
    store: Arc<MockDataStore>,
    auth: Arc<AuthStore>,
    mentor: Arc<dyn Mentor>,
    latency: Latency,
}

/// Async facade over the data store, auth store and mentor.
///
/// Calls are grouped the way a REST client would group them
/// (`api.projects().list()`, `api.messages().send(..)`), sleep a simulated
/// network delay and return plain values. Cloning is cheap; clones share
/// state.
#[derive(Clone)]
pub struct MockApi {
    services: Arc<Services>,
}

impl MockApi {
    /// Build a facade from explicit parts.
    pub fn new(
        store: Arc<MockDataStore>,
        auth: Arc<AuthStore>,
        mentor: Arc<dyn Mentor>,
        latency: Latency,
    ) -> Self {
        Self {
            services: Arc::new(Services {
                store,
                auth,
                mentor,
                latency,
            }),
        }
    }

    /// Build a facade with seed data, the keyword mentor and session storage
    /// chosen by `config`. A previously saved session is restored.
    pub async fn from_config(config: &ApiConfig) -> Self {
        let storage: Arc<dyn SessionStorage> = match &config.storage_dir {
            Some(dir) => {
                info!("Using file session storage at {}", dir.display());
                Arc::new(FileStorage::new(dir.clone()))
            }
            None => Arc::new(MemoryStorage::new()),
        };

        Self::new(
            Arc::new(MockDataStore::seeded()),
            Arc::new(AuthStore::load(storage).await),
            Arc::new(KeywordMentor::new()),
            config.latency,
        )
    }

    /// The shared data store.
    pub fn store(&self) -> &Arc<MockDataStore> {
        &self.services.store
    }

    /// The shared auth store.
    pub fn auth_store(&self) -> &Arc<AuthStore> {
        &self.services.auth
    }

    pub fn latency(&self) -> Latency {
        self.services.latency
    }

    pub fn auth(&self) -> AuthEndpoints<'_> {
        AuthEndpoints { api: self }
    }

    pub fn projects(&self) -> ProjectEndpoints<'_> {
        ProjectEndpoints { api: self }
    }

    pub fn tasks(&self) -> TaskEndpoints<'_> {
        TaskEndpoints { api: self }
    }

    pub fn messages(&self) -> MessageEndpoints<'_> {
        MessageEndpoints { api: self }
    }

    pub fn mentor(&self) -> MentorEndpoints<'_> {
        MentorEndpoints { api: self }
    }

    pub fn profile(&self) -> ProfileEndpoints<'_> {
        ProfileEndpoints { api: self }
    }

    pub fn submissions(&self) -> SubmissionEndpoints<'_> {
        SubmissionEndpoints { api: self }
    }

    pub fn badges(&self) -> BadgeEndpoints<'_> {
        BadgeEndpoints { api: self }
    }

    pub fn leaderboard(&self) -> LeaderboardEndpoints<'_> {
        LeaderboardEndpoints { api: self }
    }

    pub fn skills(&self) -> SkillEndpoints<'_> {
        SkillEndpoints { api: self }
    }

    pub fn onboarding(&self) -> OnboardingEndpoints<'_> {
        OnboardingEndpoints { api: self }
    }

    pub fn contact(&self) -> ContactEndpoints<'_> {
        ContactEndpoints { api: self }
    }

    async fn require_user(&self) -> Result<AuthUser> {
        self.services
            .auth
            .current_user()
            .await
            .ok_or(ApiError::NotAuthenticated)
    }

    async fn wait(&self, delay: Delay) {
        self.services.latency.wait(delay).await;
    }

    /// Merge `patch` onto the stored profile, or onto defaults if none.
    async fn merge_profile(&self, user_id: &str, patch: &ProfilePatch) -> StudentProfile {
        let now = Utc::now();
        let mut profile = match self.services.store.profile(user_id).await {
            Lookup::Found(profile) => profile,
            Lookup::NotFound { .. } => StudentProfile::defaults_for(user_id, now),
        };

        patch.apply(&mut profile);
        profile.updated_at = now;
        self.services.store.put_profile(user_id, profile).await
    }

    fn spawn_mentor_reply(&self, prompt: String) -> MentorReply {
        let store = self.services.store.clone();
        let mentor = self.services.mentor.clone();
        let delay = self.services.latency.duration(delays::MENTOR_AUTO_REPLY);

        debug!("Scheduling mentor reply in {:?}", delay);
        let handle = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            match mentor.respond(&prompt).await {
                Ok(response) => Some(
                    store
                        .add_message(NewMessage::new(
                            MessageChannel::MentorChat,
                            MessageSender::AiMentor,
                            response.message,
                        ))
                        .await,
                ),
                Err(e) => {
                    warn!("{} failed to reply: {}", mentor.name(), e);
                    None
                }
            }
        });

        MentorReply::new(handle)
    }
}

/// `auth.*` calls.
pub struct AuthEndpoints<'a> {
    api: &'a MockApi,
}

impl AuthEndpoints<'_> {
    pub async fn status(&self) -> AuthStatus {
        let user = self.api.services.auth.current_user().await;
        AuthStatus {
            authenticated: user.is_some(),
            user,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        if let Err(e) = validate_credentials(email, password) {
            return AuthOutcome::failure(&e);
        }
        self.api.wait(delays::AUTH).await;
        self.api.services.auth.sign_in(email, password).await.into()
    }

    pub async fn signup(&self, email: &str, password: &str, name: Option<&str>) -> AuthOutcome {
        if let Err(e) = validate_credentials(email, password) {
            return AuthOutcome::failure(&e);
        }
        self.api.wait(delays::AUTH).await;
        self.api
            .services
            .auth
            .sign_up(email, password, name)
            .await
            .into()
    }

    pub async fn logout(&self) {
        self.api.services.auth.sign_out().await;
    }
}

/// `projects.*` calls.
pub struct ProjectEndpoints<'a> {
    api: &'a MockApi,
}

impl ProjectEndpoints<'_> {
    pub async fn list(&self) -> Vec<Project> {
        self.api.wait(delays::PROJECTS_LIST).await;
        self.api.services.store.projects().await
    }

    pub async fn get(&self, id: &str) -> Lookup<Project> {
        self.api.wait(delays::PROJECTS_GET).await;
        self.api.services.store.project(id).await
    }

    /// Enroll the current user; returns all project ids they are enrolled in.
    ///
    /// The project id is not checked against the catalog.
    pub async fn enroll(&self, project_id: &str) -> Result<Vec<String>> {
        let user = self.api.require_user().await?;
        self.api.wait(delays::PROJECTS_ENROLL).await;
        Ok(self.api.services.store.enroll_user(&user.id, project_id).await)
    }

    /// Project ids the current user is enrolled in.
    pub async fn enrolled(&self) -> Result<Vec<String>> {
        let user = self.api.require_user().await?;
        self.api.wait(delays::PROJECTS_GET).await;
        Ok(self.api.services.store.user_enrollments(&user.id).await)
    }
}

/// `tasks.*` calls.
pub struct TaskEndpoints<'a> {
    api: &'a MockApi,
}

impl TaskEndpoints<'_> {
    pub async fn list(&self, project_id: Option<&str>) -> Vec<Task> {
        self.api.wait(delays::TASKS_LIST).await;
        self.api.services.store.tasks(project_id).await
    }

    pub async fn update(&self, id: &str, patch: &TaskPatch) -> Lookup<Task> {
        self.api.wait(delays::TASKS_UPDATE).await;
        self.api.services.store.update_task(id, patch).await
    }
}

/// `messages.*` calls.
pub struct MessageEndpoints<'a> {
    api: &'a MockApi,
}

impl MessageEndpoints<'_> {
    pub async fn list(&self) -> Vec<Message> {
        self.api.wait(delays::MESSAGES_LIST).await;
        self.api.services.store.messages().await
    }

    /// Post `body` as the current student.
    ///
    /// On [`MessageChannel::MentorChat`] an AI mentor reply is scheduled; its
    /// handle is returned alongside the stored message.
    pub async fn send(&self, body: &str, channel: MessageChannel) -> Result<SentMessage> {
        self.api.require_user().await?;
        self.api.wait(delays::MESSAGES_SEND).await;

        let message = self
            .api
            .services
            .store
            .add_message(NewMessage::new(channel, MessageSender::Student, body))
            .await;

        let mentor_reply = (channel == MessageChannel::MentorChat)
            .then(|| self.api.spawn_mentor_reply(body.to_string()));

        Ok(SentMessage {
            message,
            mentor_reply,
        })
    }
}

/// `mentor.*` calls.
pub struct MentorEndpoints<'a> {
    api: &'a MockApi,
}

impl MentorEndpoints<'_> {
    pub async fn chat(&self, message: &str) -> Result<MentorResponse> {
        self.api.wait(delays::MENTOR_CHAT).await;
        Ok(self.api.services.mentor.respond(message).await?)
    }
}

/// `profile.*` calls.
pub struct ProfileEndpoints<'a> {
    api: &'a MockApi,
}

impl ProfileEndpoints<'_> {
    pub async fn get(&self) -> Result<Lookup<StudentProfile>> {
        let user = self.api.require_user().await?;
        self.api.wait(delays::PROFILE_GET).await;
        Ok(self.api.services.store.profile(&user.id).await)
    }

    /// Merge `patch` into the current user's profile, creating it if needed.
    pub async fn update(&self, patch: &ProfilePatch) -> Result<StudentProfile> {
        let user = self.api.require_user().await?;
        self.api.wait(delays::PROFILE_UPDATE).await;
        Ok(self.api.merge_profile(&user.id, patch).await)
    }
}

/// `submissions.*` calls.
pub struct SubmissionEndpoints<'a> {
    api: &'a MockApi,
}

impl SubmissionEndpoints<'_> {
    /// Submit work as the current user. Always starts pending review.
    pub async fn create(&self, request: SubmissionRequest) -> Result<Submission> {
        let user = self.api.require_user().await?;
        self.api.wait(delays::SUBMISSIONS_CREATE).await;

        let submission = NewSubmission {
            student_id: user.id,
            task_id: request.task_id,
            project_id: request.project_id,
            kind: request.kind,
            notes: request.notes,
            repo_url: request.repo_url,
            zip_url: None,
            status: SubmissionStatus::PendingReview,
        };
        Ok(self.api.services.store.create_submission(submission).await)
    }

    pub async fn get(&self, id: &str) -> Lookup<Submission> {
        self.api.wait(delays::SUBMISSIONS_GET).await;
        self.api.services.store.submission(id).await
    }
}

/// `badges.*` calls.
pub struct BadgeEndpoints<'a> {
    api: &'a MockApi,
}

impl BadgeEndpoints<'_> {
    pub async fn list(&self) -> Vec<Badge> {
        self.api.wait(delays::BADGES_LIST).await;
        self.api.services.store.badges().await
    }
}

/// `leaderboard.*` calls.
pub struct LeaderboardEndpoints<'a> {
    api: &'a MockApi,
}

impl LeaderboardEndpoints<'_> {
    pub async fn get(&self) -> Vec<LeaderboardEntry> {
        self.api.wait(delays::LEADERBOARD_GET).await;
        self.api.services.store.leaderboard().await
    }
}

/// `skills.*` calls.
pub struct SkillEndpoints<'a> {
    api: &'a MockApi,
}

impl SkillEndpoints<'_> {
    pub async fn list(&self) -> Vec<Skill> {
        self.api.wait(delays::SKILLS_LIST).await;
        self.api.services.store.skills().await
    }
}

/// `onboarding.*` calls.
pub struct OnboardingEndpoints<'a> {
    api: &'a MockApi,
}

impl OnboardingEndpoints<'_> {
    /// Store the wizard's answers and mark the current user onboarded.
    pub async fn complete(&self, data: &OnboardingData) -> Result<OnboardingResult> {
        let user = self.api.require_user().await?;
        self.api.wait(delays::ONBOARDING_COMPLETE).await;

        let profile = self.api.merge_profile(&user.id, &data.profile).await;
        let skills = self
            .api
            .services
            .store
            .set_student_skills(&user.id, &data.skills)
            .await;
        debug!(
            "Onboarding preferences for {}: {:?}",
            user.id, data.preferences
        );

        // The user may have signed out while we slept.
        let user = self
            .api
            .services
            .auth
            .update_user(&UserPatch::onboarded())
            .await
            .ok_or(ApiError::NotAuthenticated)?;

        info!("Completed onboarding for {}", user.email);
        Ok(OnboardingResult {
            user,
            profile,
            skills,
        })
    }
}

/// `contact.*` calls.
pub struct ContactEndpoints<'a> {
    api: &'a MockApi,
}

impl ContactEndpoints<'_> {
    /// Accept a contact form message. Nothing is stored.
    pub async fn send(&self, request: &ContactRequest) -> ContactResponse {
        self.api.wait(delays::CONTACT_SEND).await;
        info!(
            "Contact message from {} <{}> ({} chars)",
            request.name,
            request.email,
            request.message.len()
        );
        ContactResponse {
            success: true,
            message: "Message sent successfully!".to_string(),
        }
    }
}
