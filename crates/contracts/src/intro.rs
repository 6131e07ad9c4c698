//! One-shot state machine behind the splash overlay shown on page load.
//!
//! The frontend owns the real timer; this type owns the semantics: the
//! completion signal is reported exactly once, never before the full
//! duration has elapsed, and never after `cancel`.

use serde::{Deserialize, Serialize};

/// How long the splash stays up before dismissing itself, in milliseconds.
pub const INTRO_DURATION_MS: u32 = 2800;

/// Phase of the splash overlay. `Hidden` is terminal for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntroPhase {
    Showing,
    Hidden,
}

#[derive(Debug, Clone)]
pub struct IntroSequencer {
    phase: IntroPhase,
    cancelled: bool,
}

impl IntroSequencer {
    pub fn new() -> Self {
        Self {
            phase: IntroPhase::Showing,
            cancelled: false,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// Advance to `elapsed_ms` since the sequencer entered `Showing`.
    ///
    /// Returns `true` exactly once: on the first call at or past
    /// [`INTRO_DURATION_MS`], unless `cancel` ran first.
    pub fn poll(&mut self, elapsed_ms: u32) -> bool {
        if self.cancelled || self.phase == IntroPhase::Hidden {
            return false;
        }
        if elapsed_ms >= INTRO_DURATION_MS {
            self.phase = IntroPhase::Hidden;
            return true;
        }
        false
    }

    /// Teardown before the deadline: goes `Hidden` without ever completing.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.phase = IntroPhase::Hidden;
    }
}

impl Default for IntroSequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_showing() {
        assert_eq!(IntroSequencer::new().phase(), IntroPhase::Showing);
    }

    #[test]
    fn does_not_fire_before_duration() {
        let mut seq = IntroSequencer::new();
        assert!(!seq.poll(0));
        assert!(!seq.poll(1000));
        assert!(!seq.poll(2799));
        assert_eq!(seq.phase(), IntroPhase::Showing);
    }

    #[test]
    fn fires_exactly_once_at_duration() {
        let mut seq = IntroSequencer::new();
        assert!(seq.poll(2800));
        assert_eq!(seq.phase(), IntroPhase::Hidden);
        // further time never re-fires
        assert!(!seq.poll(2800));
        assert!(!seq.poll(10_000));
        assert_eq!(seq.phase(), IntroPhase::Hidden);
    }

    #[test]
    fn cancel_before_deadline_suppresses_the_signal() {
        let mut seq = IntroSequencer::new();
        assert!(!seq.poll(1000));
        seq.cancel();
        assert_eq!(seq.phase(), IntroPhase::Hidden);
        assert!(!seq.poll(2800));
        assert!(!seq.poll(60_000));
    }

    #[test]
    fn cancel_after_completion_is_a_no_op() {
        let mut seq = IntroSequencer::new();
        assert!(seq.poll(2800));
        seq.cancel();
        assert_eq!(seq.phase(), IntroPhase::Hidden);
    }
}
