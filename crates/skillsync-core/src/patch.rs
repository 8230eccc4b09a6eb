//! Partial updates.
//!
//! Every field is optional; `None` leaves the target untouched. Applying a
//! patch is a shallow merge: nested values are replaced whole.

use serde::{Deserialize, Serialize};

use crate::models::{AuthUser, Experience, StudentProfile, Task, TaskStatus};

/// Changes to the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_onboarded: Option<bool>,
}

impl UserPatch {
    /// Patch that only flips the onboarding flag.
    pub fn onboarded() -> Self {
        Self {
            is_onboarded: Some(true),
            ..Default::default()
        }
    }

    /// Merge into `user`.
    pub fn apply(&self, user: &mut AuthUser) {
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(avatar) = &self.avatar {
            user.avatar = Some(avatar.clone());
        }
        if let Some(is_onboarded) = self.is_onboarded {
            user.is_onboarded = is_onboarded;
        }
    }
}

/// Changes to a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default)]
    pub acceptance: Option<String>,
    #[serde(default)]
    pub points: Option<u32>,
}

impl TaskPatch {
    /// Patch that only moves the task to `status`.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Merge into `task`. The id and owning project never change.
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(order) = self.order {
            task.order = order;
        }
        if let Some(acceptance) = &self.acceptance {
            task.acceptance = Some(acceptance.clone());
        }
        if let Some(points) = self.points {
            task.points = points;
        }
    }
}

/// Changes to a student profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub experience: Option<Experience>,
    #[serde(default)]
    pub weekly_hours: Option<u32>,
    #[serde(default)]
    pub goals: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

impl ProfilePatch {
    /// Merge into `profile`. Identity and timestamps are left to the caller.
    pub fn apply(&self, profile: &mut StudentProfile) {
        if let Some(timezone) = &self.timezone {
            profile.timezone = timezone.clone();
        }
        if let Some(location) = &self.location {
            profile.location = Some(location.clone());
        }
        if let Some(experience) = self.experience {
            profile.experience = experience;
        }
        if let Some(weekly_hours) = self.weekly_hours {
            profile.weekly_hours = weekly_hours;
        }
        if let Some(goals) = &self.goals {
            profile.goals = Some(goals.clone());
        }
        if let Some(github_url) = &self.github_url {
            profile.github_url = Some(github_url.clone());
        }
        if let Some(linkedin_url) = &self.linkedin_url {
            profile.linkedin_url = Some(linkedin_url.clone());
        }
    }
}
