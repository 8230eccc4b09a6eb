//! Simulated network latency.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

/// How long one kind of call takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delay {
    /// Always this many milliseconds.
    Fixed(u64),
    /// Uniformly random between the two bounds, in milliseconds, inclusive.
    Between(u64, u64),
}

impl Delay {
    /// Draw a concrete duration.
    pub fn sample(self) -> Duration {
        match self {
            Delay::Fixed(ms) => Duration::from_millis(ms),
            Delay::Between(low, high) if low >= high => Duration::from_millis(low),
            Delay::Between(low, high) => {
                Duration::from_millis(rand::thread_rng().gen_range(low..=high))
            }
        }
    }
}

/// Per-operation delays.
pub mod delays {
    use super::Delay;

    pub const AUTH: Delay = Delay::Fixed(1000);
    pub const PROJECTS_LIST: Delay = Delay::Fixed(300);
    pub const PROJECTS_GET: Delay = Delay::Fixed(200);
    pub const PROJECTS_ENROLL: Delay = Delay::Fixed(500);
    pub const TASKS_LIST: Delay = Delay::Fixed(200);
    pub const TASKS_UPDATE: Delay = Delay::Fixed(300);
    pub const MESSAGES_LIST: Delay = Delay::Fixed(200);
    pub const MESSAGES_SEND: Delay = Delay::Fixed(300);
    /// Between a student's mentor-chat message and the automatic reply.
    pub const MENTOR_AUTO_REPLY: Delay = Delay::Between(1000, 3000);
    pub const MENTOR_CHAT: Delay = Delay::Between(1000, 2000);
    pub const PROFILE_GET: Delay = Delay::Fixed(200);
    pub const PROFILE_UPDATE: Delay = Delay::Fixed(400);
    pub const SUBMISSIONS_CREATE: Delay = Delay::Fixed(600);
    pub const SUBMISSIONS_GET: Delay = Delay::Fixed(200);
    pub const BADGES_LIST: Delay = Delay::Fixed(150);
    pub const LEADERBOARD_GET: Delay = Delay::Fixed(200);
    pub const SKILLS_LIST: Delay = Delay::Fixed(150);
    pub const ONBOARDING_COMPLETE: Delay = Delay::Fixed(400);
    pub const CONTACT_SEND: Delay = Delay::Fixed(800);
}

/// Whether calls wait out their simulated delay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Latency {
    /// Sleep the per-operation delay.
    #[default]
    Simulated,
    /// Return as soon as the work is done.
    Instant,
}

impl Latency {
    /// Duration to wait for `delay` under this mode.
    pub fn duration(self, delay: Delay) -> Duration {
        match self {
            Latency::Simulated => delay.sample(),
            Latency::Instant => Duration::ZERO,
        }
    }

    /// Sleep for `delay` under this mode.
    pub async fn wait(self, delay: Delay) {
        let duration = self.duration(delay);
        if !duration.is_zero() {
            sleep(duration).await;
        }
    }
}

/// Error parsing a [`Latency`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown latency mode '{0}' (expected 'simulated' or 'instant')")]
pub struct ParseLatencyError(pub String);

impl FromStr for Latency {
    type Err = ParseLatencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simulated" => Ok(Latency::Simulated),
            "instant" => Ok(Latency::Instant),
            other => Err(ParseLatencyError(other.to_string())),
        }
    }
}

impl fmt::Display for Latency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Latency::Simulated => write!(f, "simulated"),
            Latency::Instant => write!(f, "instant"),
        }
    }
}
