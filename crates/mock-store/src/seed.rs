//! Fixed seed data loaded when a store is built.

use chrono::{DateTime, Duration, Utc};
use skillsync_core::{
    Badge, Difficulty, LeaderboardEntry, Message, MessageChannel, MessageSender, Project,
    ProjectStatus, Skill, SkillArea, Task, TaskStatus,
};

/// Collections a store starts with.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub messages: Vec<Message>,
    pub badges: Vec<Badge>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub skills: Vec<Skill>,
}

impl SeedData {
    /// The SkillSync demo catalog. Message timestamps are relative to `now`.
    pub fn skillsync(now: DateTime<Utc>) -> Self {
        let tasks = tasks();
        let mut projects = projects();
        if let Some(first) = projects.first_mut() {
            first.tasks = tasks
                .iter()
                .filter(|t| t.project_id == first.id)
                .cloned()
                .collect();
        }

        Self {
            projects,
            tasks,
            messages: messages(now),
            badges: badges(),
            leaderboard: leaderboard(),
            skills: skills(),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "project-1".to_string(),
            title: "React Task Manager".to_string(),
            description: "Build a full-featured task management app with React, TypeScript, and Tailwind CSS".to_string(),
            difficulty: Difficulty::Intermediate,
            tags: strings(&["React", "TypeScript", "Tailwind", "State Management"]),
            repo_template: None,
            estimated_weeks: 3,
            status: ProjectStatus::Active,
            tasks: Vec::new(),
        },
        Project {
            id: "project-2".to_string(),
            title: "E-commerce API".to_string(),
            description: "Create a RESTful API for an e-commerce platform with authentication and payment processing".to_string(),
            difficulty: Difficulty::Advanced,
            tags: strings(&["Node.js", "Express", "MongoDB", "JWT", "Stripe"]),
            repo_template: None,
            estimated_weeks: 4,
            status: ProjectStatus::Active,
            tasks: Vec::new(),
        },
        Project {
            id: "project-3".to_string(),
            title: "Landing Page Portfolio".to_string(),
            description: "Design and develop a responsive portfolio website with modern animations".to_string(),
            difficulty: Difficulty::Starter,
            tags: strings(&["HTML", "CSS", "JavaScript", "Responsive Design"]),
            repo_template: None,
            estimated_weeks: 2,
            status: ProjectStatus::Active,
            tasks: Vec::new(),
        },
    ]
}

fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: "task-1".to_string(),
            project_id: "project-1".to_string(),
            title: "Set up project structure".to_string(),
            description: "Initialize React app with TypeScript and Tailwind CSS".to_string(),
            status: TaskStatus::Done,
            order: 1,
            acceptance: Some(
                "Project structure is set up with proper TypeScript configuration".to_string(),
            ),
            points: 10,
        },
        Task {
            id: "task-2".to_string(),
            project_id: "project-1".to_string(),
            title: "Create task list component".to_string(),
            description: "Build reusable task list component with add/edit/delete functionality"
                .to_string(),
            status: TaskStatus::InProgress,
            order: 2,
            acceptance: Some("Task list displays tasks and allows CRUD operations".to_string()),
            points: 20,
        },
        Task {
            id: "task-3".to_string(),
            project_id: "project-1".to_string(),
            title: "Implement drag and drop".to_string(),
            description: "Add drag and drop functionality for task reordering".to_string(),
            status: TaskStatus::Backlog,
            order: 3,
            acceptance: Some("Tasks can be reordered via drag and drop".to_string()),
            points: 15,
        },
    ]
}

fn badges() -> Vec<Badge> {
    vec![
        Badge {
            id: "badge-1".to_string(),
            code: "FIRST_SUBMISSION".to_string(),
            name: "First Steps".to_string(),
            icon: "🌟".to_string(),
            criteria: "Submit your first task".to_string(),
            xp: 50,
        },
        Badge {
            id: "badge-2".to_string(),
            code: "TASK_MASTER".to_string(),
            name: "Task Master".to_string(),
            icon: "🎯".to_string(),
            criteria: "Complete 10 tasks".to_string(),
            xp: 200,
        },
        Badge {
            id: "badge-3".to_string(),
            code: "CODE_REVIEWER".to_string(),
            name: "Code Reviewer".to_string(),
            icon: "👨‍💻".to_string(),
            criteria: "Receive positive code review".to_string(),
            xp: 100,
        },
    ]
}

fn leaderboard() -> Vec<LeaderboardEntry> {
    [
        ("student-1", "Alex Chen", 1250, "alex"),
        ("student-2", "Sarah Johnson", 1100, "sarah"),
        ("student-3", "Michael Brown", 950, "michael"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (student_id, name, xp, seed))| LeaderboardEntry {
        student_id: student_id.to_string(),
        name: name.to_string(),
        xp,
        rank: i as u32 + 1,
        avatar: Some(format!(
            "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
            seed
        )),
    })
    .collect()
}

fn messages(now: DateTime<Utc>) -> Vec<Message> {
    vec![
        Message {
            id: "msg-1".to_string(),
            thread_id: None,
            channel: MessageChannel::System,
            from: MessageSender::System,
            body: "Welcome to SkillSync! Complete your onboarding to get started.".to_string(),
            metadata: None,
            created_at: now - Duration::days(1),
        },
        Message {
            id: "msg-2".to_string(),
            thread_id: None,
            channel: MessageChannel::MentorChat,
            from: MessageSender::AiMentor,
            body: "Great job on completing your first task! Keep up the momentum.".to_string(),
            metadata: None,
            created_at: now - Duration::hours(2),
        },
    ]
}

fn skills() -> Vec<Skill> {
    [
        ("1", "React", SkillArea::Frontend, "⚛️"),
        ("2", "TypeScript", SkillArea::Frontend, "🔷"),
        ("3", "Next.js", SkillArea::FullStack, "▲"),
        ("4", "Node.js", SkillArea::Backend, "🟢"),
        ("5", "Express", SkillArea::Backend, "🚂"),
        ("6", "PostgreSQL", SkillArea::Backend, "🐘"),
        ("7", "MongoDB", SkillArea::Backend, "🍃"),
        ("8", "Python", SkillArea::Backend, "🐍"),
        ("9", "Docker", SkillArea::DevOps, "🐳"),
        ("10", "AWS", SkillArea::DevOps, "☁️"),
        ("11", "React Native", SkillArea::Mobile, "📱"),
        ("12", "TensorFlow", SkillArea::Data, "🤖"),
    ]
    .into_iter()
    .map(|(id, name, area, icon)| Skill {
        id: id.to_string(),
        name: name.to_string(),
        area,
        icon: Some(icon.to_string()),
    })
    .collect()
}
