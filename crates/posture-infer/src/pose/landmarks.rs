use posture_core::{Landmark, LandmarkId, Landmarks};

use super::types::{KeypointIndex, PoseDetection};

const MAPPING: [(LandmarkId, KeypointIndex); 6] = [
    (LandmarkId::LeftShoulder, KeypointIndex::LeftShoulder),
    (LandmarkId::RightShoulder, KeypointIndex::RightShoulder),
    (LandmarkId::LeftEar, KeypointIndex::LeftEar),
    (LandmarkId::RightEar, KeypointIndex::RightEar),
    (LandmarkId::LeftHip, KeypointIndex::LeftHip),
    (LandmarkId::RightHip, KeypointIndex::RightHip),
];

/// Pick the ears, shoulders and hips out of a COCO detection.
pub fn landmarks_from_detection(detection: &PoseDetection) -> Landmarks {
    MAPPING
        .into_iter()
        .map(|(id, index)| {
            let keypoint = detection.keypoint(index);
            (
                id,
                Landmark {
                    position: keypoint.position,
                    visibility: keypoint.confidence,
                },
            )
        })
        .collect()
}
