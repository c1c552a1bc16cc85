use crate::PostureState;
use std::time::{Duration, Instant};

/// Fires once per POOR episode after it has lasted longer than `after`.
///
/// A GOOD state re-arms the latch.
#[derive(Debug, Clone)]
pub struct AlertLatch {
    after: Duration,
    fired: bool,
}

impl AlertLatch {
    pub fn new(after: Duration) -> Self {
        Self {
            after,
            fired: false,
        }
    }

    pub fn after(&self) -> Duration {
        self.after
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns true on the first update whose POOR time strictly exceeds `after`.
    pub fn update(&mut self, state: &PostureState, now: Instant) -> bool {
        match state.poor_elapsed(now) {
            None => {
                self.fired = false;
                false
            }
            Some(elapsed) if !self.fired && elapsed > self.after => {
                self.fired = true;
                true
            }
            Some(_) => false,
        }
    }
}
