use crate::{AngleMeasurement, Thresholds};
use std::fmt;

/// Corrective instruction shown while posture is poor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidanceMessage {
    StraightenNeck,
    SitUpStraight,
    StraightenNeckAndSitUp,
}

impl GuidanceMessage {
    pub fn text(self) -> &'static str {
        match self {
            GuidanceMessage::StraightenNeck => "Straighten your neck",
            GuidanceMessage::SitUpStraight => "Sit up straight",
            GuidanceMessage::StraightenNeckAndSitUp => "Straighten your neck, then sit up straight",
        }
    }
}

impl fmt::Display for GuidanceMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Name the angle(s) at fault. When both are, the neck comes first.
pub fn guidance(
    angles: &AngleMeasurement,
    thresholds: &Thresholds,
    enabled: bool,
) -> Option<GuidanceMessage> {
    if !enabled {
        return None;
    }
    match (thresholds.neck_fault(angles), thresholds.torso_fault(angles)) {
        (true, true) => Some(GuidanceMessage::StraightenNeckAndSitUp),
        (true, false) => Some(GuidanceMessage::StraightenNeck),
        (false, true) => Some(GuidanceMessage::SitUpStraight),
        (false, false) => None,
    }
}
