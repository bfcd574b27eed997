use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

use course_core::model::WeekId;

use crate::session::CourseSession;

/// Delay before the tutor announces the next prompt after an answer.
pub const FOLLOW_UP_DELAY: Duration = Duration::from_millis(1000);

//
// ─── FOLLOW-UP ─────────────────────────────────────────────────────────────────
//

/// A deferred tutor message announcing the next prompt.
///
/// Created by the tutor when a turn leaves prompts unanswered, held per week
/// by the session until either its timer fires or the student answers again
/// first (in which case it is force-flushed ahead of the new turn's
/// messages, keeping the log in prompt order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUp {
    pub week_id: WeekId,
    pub content: String,
    pub due_at: DateTime<Utc>,
}

impl FollowUp {
    /// Builds a follow-up due one standard delay after `now`.
    #[must_use]
    pub fn scheduled_at(week_id: WeekId, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        let delay = chrono::Duration::from_std(FOLLOW_UP_DELAY)
            .unwrap_or_else(|_| chrono::Duration::zero());
        Self {
            week_id,
            content: content.into(),
            due_at: now + delay,
        }
    }
}

//
// ─── TIMER ─────────────────────────────────────────────────────────────────────
//

/// Cancellable delivery task for one week's pending follow-up.
///
/// The task sleeps for [`FOLLOW_UP_DELAY`], then flushes whatever follow-up
/// is still pending for the week. Aborting (or dropping the handle) before
/// the delay elapses guarantees no write into the session; a fire after the
/// pending entry was already flushed or the week was closed appends nothing.
#[derive(Debug)]
pub struct FollowUpTimer {
    week_id: WeekId,
    task: JoinHandle<()>,
}

impl FollowUpTimer {
    /// Spawns the delivery task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn spawn(session: Arc<Mutex<CourseSession>>, week_id: WeekId) -> Self {
        let task = tokio::spawn(async move {
            tokio::time::sleep(FOLLOW_UP_DELAY).await;
            if let Ok(mut session) = session.lock() {
                if session.flush_follow_up(week_id) {
                    tracing::debug!(week = %week_id, "follow-up prompt delivered");
                }
            }
        });
        Self { week_id, task }
    }

    #[must_use]
    pub fn week_id(&self) -> WeekId {
        self.week_id
    }

    /// Cancels delivery. Safe to call after the task already ran.
    pub fn cancel(&self) {
        self.task.abort();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for FollowUpTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::time::fixed_now;

    #[test]
    fn follow_up_is_due_one_delay_after_now() {
        let now = fixed_now();
        let follow_up = FollowUp::scheduled_at(WeekId::new(2), "next question", now);

        assert_eq!(follow_up.week_id, WeekId::new(2));
        assert_eq!(follow_up.content, "next question");
        assert_eq!(follow_up.due_at, now + chrono::Duration::milliseconds(1000));
    }
}
