use crate::{
    AlertLatch, AngleMeasurement, GuidanceMessage, InvalidAngle, Landmarks, PostureState,
    Settings, Thresholds, compute_angles, classify, guidance,
};
use std::time::{Duration, Instant};

/// Everything the renderer needs to know about one processed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub angles: Result<AngleMeasurement, InvalidAngle>,
    pub state: PostureState,
    pub poor_elapsed: Option<Duration>,
    pub guidance: Option<GuidanceMessage>,
    /// Set on the single frame where the audible alert should play.
    pub alert: bool,
}

/// Per-frame posture pipeline: angles, classification, guidance and alert.
#[derive(Debug, Clone)]
pub struct Monitor {
    thresholds: Thresholds,
    min_visibility: f32,
    guidance_enabled: bool,
    state: PostureState,
    latch: AlertLatch,
}

impl Monitor {
    pub fn new(settings: &Settings) -> Self {
        Self {
            thresholds: settings.thresholds,
            min_visibility: settings.min_visibility,
            guidance_enabled: settings.guidance_enabled,
            state: PostureState::good(),
            latch: AlertLatch::new(settings.alert_after),
        }
    }

    pub fn state(&self) -> PostureState {
        self.state
    }

    /// Run one frame's landmarks through the pipeline.
    ///
    /// Frames without measurable angles leave the posture state and the
    /// alert latch untouched.
    pub fn process(&mut self, landmarks: &Landmarks, now: Instant) -> FrameReport {
        let angles = compute_angles(landmarks, self.min_visibility);

        let (guidance, alert) = match &angles {
            Ok(measurement) => {
                let next = classify(measurement, &self.thresholds, self.state, now);
                if next.verdict() != self.state.verdict() {
                    log::info!(
                        "posture {} (neck {:.0}, torso {:.0})",
                        next.verdict(),
                        measurement.neck,
                        measurement.torso
                    );
                }
                self.state = next;
                let alert = self.latch.update(&self.state, now);
                if alert {
                    log::warn!(
                        "poor posture for more than {:.1}s",
                        self.latch.after().as_secs_f32()
                    );
                }
                (
                    guidance(measurement, &self.thresholds, self.guidance_enabled),
                    alert,
                )
            }
            Err(e) => {
                log::debug!("skipping classification: {e}");
                (None, false)
            }
        };

        FrameReport {
            angles,
            state: self.state,
            poor_elapsed: self.state.poor_elapsed(now),
            guidance,
            alert,
        }
    }
}
