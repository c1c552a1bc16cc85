use crate::{Landmark, LandmarkId, Landmarks};
use posture_base::Vec2;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

impl Side {
    /// `[shoulder, ear, hip]` for this side.
    pub const fn landmarks(self) -> [LandmarkId; 3] {
        match self {
            Side::Left => [LandmarkId::LeftShoulder, LandmarkId::LeftEar, LandmarkId::LeftHip],
            Side::Right => [
                LandmarkId::RightShoulder,
                LandmarkId::RightEar,
                LandmarkId::RightHip,
            ],
        }
    }
}

// Earlier rows win ties.
const SIDES: [(Side, [LandmarkId; 3]); 2] = [
    (Side::Left, Side::Left.landmarks()),
    (Side::Right, Side::Right.landmarks()),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidAngle {
    /// Neither side has shoulder, ear and hip all visible enough.
    NoVisibleSide,
    /// A shoulder-ear or hip-shoulder segment has zero length or non-finite ends.
    DegenerateSegment,
}

impl fmt::Display for InvalidAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidAngle::NoVisibleSide => write!(f, "no side has shoulder, ear and hip visible"),
            InvalidAngle::DegenerateSegment => write!(f, "degenerate landmark segment"),
        }
    }
}

impl std::error::Error for InvalidAngle {}

/// Neck and torso inclination from vertical, in degrees within [0, 180].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleMeasurement {
    pub neck: f32,
    pub torso: f32,
    pub side: Side,
}

/// Pick the body side to measure from.
///
/// A side qualifies when its shoulder, ear and hip are all present with
/// visibility of at least `min_visibility`. The qualifying side with the
/// highest combined visibility wins. Returns the landmarks in
/// `[shoulder, ear, hip]` order.
pub fn select_side(landmarks: &Landmarks, min_visibility: f32) -> Option<(Side, [Landmark; 3])> {
    let mut best: Option<(Side, [Landmark; 3], f32)> = None;

    for (side, ids) in SIDES {
        let [shoulder, ear, hip] = ids.map(|id| landmarks.get(id).copied());
        let (Some(shoulder), Some(ear), Some(hip)) = (shoulder, ear, hip) else {
            continue;
        };
        let points = [shoulder, ear, hip];
        if !points.iter().all(|p| p.visibility >= min_visibility) {
            continue;
        }
        let score: f32 = points.iter().map(|p| p.visibility).sum();
        if best.as_ref().is_none_or(|(_, _, best_score)| score > *best_score) {
            best = Some((side, points, score));
        }
    }

    best.map(|(side, points, _)| (side, points))
}

/// Compute the neck angle (shoulder→ear against straight up) and the torso
/// angle (hip→shoulder against straight up).
pub fn compute_angles(
    landmarks: &Landmarks,
    min_visibility: f32,
) -> Result<AngleMeasurement, InvalidAngle> {
    let (side, [shoulder, ear, hip]) =
        select_side(landmarks, min_visibility).ok_or(InvalidAngle::NoVisibleSide)?;

    let neck_vector = ear.position - shoulder.position;
    let torso_vector = shoulder.position - hip.position;

    let neck = neck_vector
        .angle_to(Vec2::UP)
        .ok_or(InvalidAngle::DegenerateSegment)?;
    let torso = torso_vector
        .angle_to(Vec2::UP)
        .ok_or(InvalidAngle::DegenerateSegment)?;

    Ok(AngleMeasurement { neck, torso, side })
}
