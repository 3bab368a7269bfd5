//! Referral Code Copy Feedback
//!
//! A successful copy shows "Copied!" for [`COPY_ACK_MS`]. Each copy arms a
//! new token; only the timer holding the newest token may clear the flag, and
//! it clears at most once.

use gloo_timers::callback::Timeout;
use leptos::*;

/// How long the acknowledgment stays visible
pub const COPY_ACK_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: bool,
    generation: u64,
}

/// Token handed to the timer that will clear an acknowledgment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AckToken(u64);

impl CopyFeedback {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Show the acknowledgment, superseding any pending expiry
    pub fn acknowledge(&mut self) -> AckToken {
        self.generation += 1;
        self.copied = true;
        AckToken(self.generation)
    }

    /// Timer callback: clear the flag if this token is still the newest
    pub fn expire(&mut self, token: AckToken) -> bool {
        if self.copied && token.0 == self.generation {
            self.copied = false;
            true
        } else {
            false
        }
    }

    /// Clear immediately and orphan every outstanding token
    pub fn reset(&mut self) {
        self.generation += 1;
        self.copied = false;
    }
}

/// Owns the pending expiry timer for one view's copy feedback
///
/// Arming a new timer drops the previous handle, which cancels it.
pub struct AckTimer {
    feedback: RwSignal<CopyFeedback>,
    pending: Option<Timeout>,
}

impl AckTimer {
    pub fn new(feedback: RwSignal<CopyFeedback>) -> Self {
        Self {
            feedback,
            pending: None,
        }
    }

    /// Show "Copied!" and arm a fresh [`COPY_ACK_MS`] expiry
    ///
    /// Returns false if the view's signal is already disposed.
    pub fn acknowledge(&mut self) -> bool {
        let Some(token) = self.feedback.try_update(|f| f.acknowledge()) else {
            return false;
        };

        let feedback = self.feedback;
        self.pending = Some(Timeout::new(COPY_ACK_MS, move || {
            feedback.try_update(|f| f.expire(token));
        }));
        true
    }

    /// Cancel any pending expiry and clear the acknowledgment
    pub fn cancel(&mut self) {
        self.pending.take();
        self.feedback.try_update(|f| f.reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_then_expire() {
        let mut feedback = CopyFeedback::default();
        assert!(!feedback.is_copied());

        let token = feedback.acknowledge();
        assert!(feedback.is_copied());

        assert!(feedback.expire(token));
        assert!(!feedback.is_copied());
    }

    #[test]
    fn test_expire_clears_only_once() {
        let mut feedback = CopyFeedback::default();
        let token = feedback.acknowledge();

        assert!(feedback.expire(token));
        assert!(!feedback.expire(token));
    }

    #[test]
    fn test_second_copy_supersedes_first_timer() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.acknowledge();
        let second = feedback.acknowledge();

        // The first timer firing must not cut the second acknowledgment short
        assert!(!feedback.expire(first));
        assert!(feedback.is_copied());

        assert!(feedback.expire(second));
        assert!(!feedback.is_copied());
    }

    #[test]
    fn test_reset_orphans_pending_timer() {
        let mut feedback = CopyFeedback::default();
        let token = feedback.acknowledge();
        feedback.reset();

        assert!(!feedback.is_copied());
        assert!(!feedback.expire(token));
    }

    #[test]
    fn test_ack_duration() {
        assert_eq!(COPY_ACK_MS, 2_000);
    }
}
