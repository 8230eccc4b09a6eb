//! The in-memory data store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use skillsync_core::{
    Badge, LeaderboardEntry, Lookup, Message, NewMessage, NewSubmission, Project, Skill,
    SkillSelection, StudentProfile, StudentSkill, Submission, Task, TaskPatch,
};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::seed::SeedData;

const MIN_SKILL_LEVEL: u8 = 1;
const MAX_SKILL_LEVEL: u8 = 5;

#[derive(Debug)]
struct Collections {
    projects: Vec<Project>,
    tasks: Vec<Task>,
    messages: Vec<Message>,
    submissions: Vec<Submission>,
    badges: Vec<Badge>,
    leaderboard: Vec<LeaderboardEntry>,
    skills: Vec<Skill>,
    /// user id -> profile
    profiles: HashMap<String, StudentProfile>,
    /// user id -> rated skills
    student_skills: HashMap<String, Vec<StudentSkill>>,
    /// user id -> enrolled project ids, in enrollment order
    enrollments: HashMap<String, Vec<String>>,
}

impl From<SeedData> for Collections {
    fn from(seed: SeedData) -> Self {
        Self {
            projects: seed.projects,
            tasks: seed.tasks,
            messages: seed.messages,
            submissions: Vec::new(),
            badges: seed.badges,
            leaderboard: seed.leaderboard,
            skills: seed.skills,
            profiles: HashMap::new(),
            student_skills: HashMap::new(),
            enrollments: HashMap::new(),
        }
    }
}

/// Seed collections plus runtime writes, held in memory.
///
/// All state sits behind one lock, so each call is atomic with respect to
/// every other call.
#[derive(Debug)]
pub struct MockDataStore {
    data: RwLock<Collections>,
    sequence: AtomicU64,
}

impl MockDataStore {
    /// Store loaded with `seed`.
    pub fn new(seed: SeedData) -> Self {
        Self {
            data: RwLock::new(seed.into()),
            sequence: AtomicU64::new(0),
        }
    }

    /// Store loaded with the SkillSync demo catalog.
    pub fn seeded() -> Self {
        Self::new(SeedData::skillsync(Utc::now()))
    }

    /// `<prefix>-<unix millis>-<sequence>`; unique within this store.
    fn next_id(&self, prefix: &str) -> String {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}-{}", prefix, Utc::now().timestamp_millis(), seq)
    }

    // Projects

    pub async fn projects(&self) -> Vec<Project> {
        self.data.read().await.projects.clone()
    }

    pub async fn project(&self, id: &str) -> Lookup<Project> {
        let data = self.data.read().await;
        Lookup::from_option(
            data.projects.iter().find(|p| p.id == id).cloned(),
            "Project",
            id,
        )
    }

    // Tasks

    /// All tasks, or only those of `project_id`.
    pub async fn tasks(&self, project_id: Option<&str>) -> Vec<Task> {
        let data = self.data.read().await;
        match project_id {
            Some(project_id) => data
                .tasks
                .iter()
                .filter(|t| t.project_id == project_id)
                .cloned()
                .collect(),
            None => data.tasks.clone(),
        }
    }

    pub async fn task(&self, id: &str) -> Lookup<Task> {
        let data = self.data.read().await;
        Lookup::from_option(data.tasks.iter().find(|t| t.id == id).cloned(), "Task", id)
    }

    /// Merge `patch` into the task with `id` and return the result.
    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> Lookup<Task> {
        let mut data = self.data.write().await;
        let Some(task) = data.tasks.iter_mut().find(|t| t.id == id) else {
            debug!("update_task: no task {}", id);
            return Lookup::not_found("Task", id);
        };

        patch.apply(task);
        debug!("Updated task {} (status {:?})", task.id, task.status);
        Lookup::Found(task.clone())
    }

    // Messages

    /// Every message in append order.
    pub async fn messages(&self) -> Vec<Message> {
        self.data.read().await.messages.clone()
    }

    /// Append a message, assigning its id and timestamp.
    pub async fn add_message(&self, message: NewMessage) -> Message {
        let message = Message {
            id: self.next_id("msg"),
            thread_id: message.thread_id,
            channel: message.channel,
            from: message.from,
            body: message.body,
            metadata: message.metadata,
            created_at: Utc::now(),
        };

        debug!("Appending message {} on {:?}", message.id, message.channel);
        self.data.write().await.messages.push(message.clone());
        message
    }

    // Catalogs

    pub async fn badges(&self) -> Vec<Badge> {
        self.data.read().await.badges.clone()
    }

    pub async fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.data.read().await.leaderboard.clone()
    }

    pub async fn skills(&self) -> Vec<Skill> {
        self.data.read().await.skills.clone()
    }

    // Profiles

    pub async fn profile(&self, user_id: &str) -> Lookup<StudentProfile> {
        let data = self.data.read().await;
        Lookup::from_option(data.profiles.get(user_id).cloned(), "StudentProfile", user_id)
    }

    /// Store `profile` for `user_id`, replacing any previous value.
    ///
    /// Merging is the caller's job.
    pub async fn put_profile(&self, user_id: &str, profile: StudentProfile) -> StudentProfile {
        self.data
            .write()
            .await
            .profiles
            .insert(user_id.to_string(), profile.clone());
        profile
    }

    // Skills rated by students

    pub async fn student_skills(&self, user_id: &str) -> Vec<StudentSkill> {
        self.data
            .read()
            .await
            .student_skills
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Replace the skills `user_id` rated.
    ///
    /// Selections naming an unknown skill are skipped; levels are clamped to
    /// 1..=5. Returns what was stored.
    pub async fn set_student_skills(
        &self,
        user_id: &str,
        selections: &[SkillSelection],
    ) -> Vec<StudentSkill> {
        let mut data = self.data.write().await;

        let mut rated = Vec::with_capacity(selections.len());
        for selection in selections {
            let Some(skill) = data.skills.iter().find(|s| s.id == selection.skill_id) else {
                warn!("Skipping unknown skill id {}", selection.skill_id);
                continue;
            };
            rated.push(StudentSkill {
                id: self.next_id("student-skill"),
                student_id: user_id.to_string(),
                skill_id: skill.id.clone(),
                level: selection.level.clamp(MIN_SKILL_LEVEL, MAX_SKILL_LEVEL),
                skill: skill.clone(),
            });
        }

        data.student_skills
            .insert(user_id.to_string(), rated.clone());
        rated
    }

    // Enrollments

    /// Project ids `user_id` enrolled in, oldest first.
    pub async fn user_enrollments(&self, user_id: &str) -> Vec<String> {
        self.data
            .read()
            .await
            .enrollments
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Enroll `user_id` in `project_id` unless already enrolled.
    ///
    /// Returns the user's full enrollment list.
    pub async fn enroll_user(&self, user_id: &str, project_id: &str) -> Vec<String> {
        let mut data = self.data.write().await;
        let enrollments = data.enrollments.entry(user_id.to_string()).or_default();

        if !enrollments.iter().any(|p| p == project_id) {
            enrollments.push(project_id.to_string());
            debug!("Enrolled {} in {}", user_id, project_id);
        }
        enrollments.clone()
    }

    // Submissions

    /// Record a submission, assigning id and timestamp; reviews start empty.
    pub async fn create_submission(&self, submission: NewSubmission) -> Submission {
        let submission = Submission {
            id: self.next_id("submission"),
            student_id: submission.student_id,
            task_id: submission.task_id,
            project_id: submission.project_id,
            kind: submission.kind,
            notes: submission.notes,
            repo_url: submission.repo_url,
            zip_url: submission.zip_url,
            status: submission.status,
            created_at: Utc::now(),
            reviews: Vec::new(),
        };

        debug!("Created submission {}", submission.id);
        self.data.write().await.submissions.push(submission.clone());
        submission
    }

    pub async fn submission(&self, id: &str) -> Lookup<Submission> {
        let data = self.data.read().await;
        Lookup::from_option(
            data.submissions.iter().find(|s| s.id == id).cloned(),
            "Submission",
            id,
        )
    }
}

impl Default for MockDataStore {
    fn default() -> Self {
        Self::seeded()
    }
}
