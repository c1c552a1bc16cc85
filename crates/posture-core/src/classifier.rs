use crate::AngleMeasurement;
use std::fmt;
use std::time::{Duration, Instant};

/// Angles at or above which posture counts as poor, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub neck: f32,
    pub torso: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            neck: 40.0,
            torso: 10.0,
        }
    }
}

impl Thresholds {
    pub fn neck_fault(&self, angles: &AngleMeasurement) -> bool {
        angles.neck >= self.neck
    }

    pub fn torso_fault(&self, angles: &AngleMeasurement) -> bool {
        angles.torso >= self.torso
    }

    pub fn verdict(&self, angles: &AngleMeasurement) -> Verdict {
        if self.neck_fault(angles) || self.torso_fault(angles) {
            Verdict::Poor
        } else {
            Verdict::Good
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Good,
    Poor,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Good => write!(f, "GOOD"),
            Verdict::Poor => write!(f, "POOR"),
        }
    }
}

/// Classifier state carried from one frame to the next.
///
/// `poor_since` is set exactly while the verdict is POOR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostureState {
    poor_since: Option<Instant>,
}

impl PostureState {
    pub fn good() -> Self {
        Self { poor_since: None }
    }

    pub fn verdict(&self) -> Verdict {
        match self.poor_since {
            Some(_) => Verdict::Poor,
            None => Verdict::Good,
        }
    }

    pub fn is_poor(&self) -> bool {
        self.poor_since.is_some()
    }

    /// When the current POOR episode started.
    pub fn poor_since(&self) -> Option<Instant> {
        self.poor_since
    }

    /// Time spent in the current POOR episode, `None` while GOOD.
    pub fn poor_elapsed(&self, now: Instant) -> Option<Duration> {
        self.poor_since
            .map(|since| now.saturating_duration_since(since))
    }
}

/// Advance the posture state by one measurement.
///
/// Entering POOR stamps `now`, staying POOR keeps the original stamp and
/// returning to GOOD clears it.
pub fn classify(
    angles: &AngleMeasurement,
    thresholds: &Thresholds,
    previous: PostureState,
    now: Instant,
) -> PostureState {
    match (thresholds.verdict(angles), previous.poor_since) {
        (Verdict::Good, _) => PostureState::good(),
        (Verdict::Poor, Some(since)) => PostureState {
            poor_since: Some(since),
        },
        (Verdict::Poor, None) => PostureState {
            poor_since: Some(now),
        },
    }
}
