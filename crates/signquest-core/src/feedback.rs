//! Transient feedback with delayed auto-clear.
//!
//! There is one timer slot. Every `show` replaces the message, cancels the
//! pending clear and arms a fresh one, so the message always disappears a
//! full window after the most recent call.
//!
//! Timers run on the ambient tokio runtime; `show` must be called from
//! within one.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::model::{Feedback, FeedbackStyle};

/// How long a feedback message stays on screen.
pub const FEEDBACK_WINDOW: Duration = Duration::from_millis(3000);

/// A single cancellable delayed callback.
#[derive(Debug, Default)]
pub struct TimerSlot {
    pending: Option<JoinHandle<()>>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `on_fire` after `after`, cancelling whatever was armed before.
    pub fn arm<F>(&mut self, after: Duration, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel_if_pending();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(after).await;
            on_fire();
        }));
    }

    /// Cancel the armed callback. Returns `true` if one had not fired yet.
    pub fn cancel_if_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let live = !handle.is_finished();
                handle.abort();
                live
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        self.cancel_if_pending();
    }
}

#[derive(Debug, Default)]
struct Slot {
    feedback: Feedback,
    // Bumped on every show; a timer only clears the message it armed for.
    generation: u64,
}

/// Owns the feedback message and its auto-clear timer.
#[derive(Debug)]
pub struct FeedbackScheduler {
    slot: Arc<Mutex<Slot>>,
    timer: TimerSlot,
    window: Duration,
}

impl FeedbackScheduler {
    pub fn new(window: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            timer: TimerSlot::new(),
            window,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Replace the current message and restart the clear window.
    pub fn show(&mut self, message: impl Into<String>, style: FeedbackStyle) {
        let expires_at = Instant::now() + self.window;
        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation = slot.generation.wrapping_add(1);
            slot.feedback = Feedback {
                message: Some(message.into()),
                style,
                expires_at: Some(expires_at),
            };
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        self.timer.arm(self.window, move || {
            let mut slot = lock(&slot);
            if slot.generation == generation {
                slot.feedback = Feedback::default();
                tracing::trace!("feedback cleared");
            }
        });
    }

    /// The message on screen right now.
    pub fn current(&self) -> Feedback {
        lock(&self.slot).feedback.clone()
    }

    /// Whether an auto-clear is still armed.
    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Teardown: stop the pending clear so nothing fires after the screen
    /// is gone. The last message is left as it was.
    pub fn cancel(&mut self) {
        if self.timer.cancel_if_pending() {
            tracing::trace!("pending feedback clear cancelled");
        }
    }
}

impl Default for FeedbackScheduler {
    fn default() -> Self {
        Self::new(FEEDBACK_WINDOW)
    }
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
