use posture_base::{Tensor, Vec2};

/// Body parts the posture analysis needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LandmarkId {
    LeftShoulder,
    RightShoulder,
    LeftEar,
    RightEar,
    LeftHip,
    RightHip,
}

impl LandmarkId {
    pub const ALL: [LandmarkId; 6] = [
        LandmarkId::LeftShoulder,
        LandmarkId::RightShoulder,
        LandmarkId::LeftEar,
        LandmarkId::RightEar,
        LandmarkId::LeftHip,
        LandmarkId::RightHip,
    ];

    fn slot(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            LandmarkId::LeftShoulder => "left_shoulder",
            LandmarkId::RightShoulder => "right_shoulder",
            LandmarkId::LeftEar => "left_ear",
            LandmarkId::RightEar => "right_ear",
            LandmarkId::LeftHip => "left_hip",
            LandmarkId::RightHip => "right_hip",
        }
    }
}

/// A detected body part in pixel coordinates (origin top-left, y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub position: Vec2<f32>,
    /// Detector confidence in [0, 1].
    pub visibility: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, visibility: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            visibility,
        }
    }
}

/// The landmarks found in one frame, at most one per [`LandmarkId`].
///
/// Empty when no body was detected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Landmarks {
    slots: [Option<Landmark>; 6],
}

impl Landmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a landmark, returning the one it replaced.
    pub fn insert(&mut self, id: LandmarkId, landmark: Landmark) -> Option<Landmark> {
        self.slots[id.slot()].replace(landmark)
    }

    pub fn get(&self, id: LandmarkId) -> Option<&Landmark> {
        self.slots[id.slot()].as_ref()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LandmarkId, &Landmark)> {
        LandmarkId::ALL
            .into_iter()
            .filter_map(|id| self.get(id).map(|landmark| (id, landmark)))
    }

    /// Landmarks whose visibility reaches `min_visibility`.
    pub fn visible(&self, min_visibility: f32) -> impl Iterator<Item = (LandmarkId, &Landmark)> {
        self.iter()
            .filter(move |(_, landmark)| landmark.visibility >= min_visibility)
    }
}

impl FromIterator<(LandmarkId, Landmark)> for Landmarks {
    fn from_iter<I: IntoIterator<Item = (LandmarkId, Landmark)>>(iter: I) -> Self {
        let mut landmarks = Landmarks::new();
        for (id, landmark) in iter {
            landmarks.insert(id, landmark);
        }
        landmarks
    }
}

/// Anything that can find body landmarks in an RGB `[H, W, 3]` frame.
pub trait LandmarkProvider {
    type Error;

    /// Detect the landmarks of the most prominent person in `frame`.
    ///
    /// Returns empty `Landmarks` when nobody is in view.
    fn detect(&mut self, frame: &Tensor<u8>) -> Result<Landmarks, Self::Error>;
}
