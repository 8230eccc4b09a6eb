//! Handle for the mentor's automatic reply.

use skillsync_core::Message;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// The pending AI mentor reply to a mentor-chat message.
///
/// The reply is written to the store by a background task. Await
/// [`MentorReply::wait`] to observe it, call [`MentorReply::cancel`] to stop
/// it from landing, or drop the handle to let it finish unobserved.
#[derive(Debug)]
pub struct MentorReply {
    handle: JoinHandle<Option<Message>>,
}

impl MentorReply {
    pub(crate) fn new(handle: JoinHandle<Option<Message>>) -> Self {
        Self { handle }
    }

    /// Wait for the reply to be appended.
    ///
    /// Returns `None` if the reply was cancelled or the mentor failed.
    pub async fn wait(self) -> Option<Message> {
        match self.handle.await {
            Ok(message) => message,
            Err(e) if e.is_cancelled() => {
                debug!("Mentor reply was cancelled");
                None
            }
            Err(e) => {
                warn!("Mentor reply task failed: {}", e);
                None
            }
        }
    }

    /// Stop the reply. Has no effect once it has been appended.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// True once the reply was appended, failed or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
