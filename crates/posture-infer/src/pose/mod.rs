mod estimator;
mod landmarks;
mod postprocess;
mod preprocess;
mod types;

pub use estimator::YoloPoseEstimator;
pub use landmarks::landmarks_from_detection;
pub use postprocess::{iou, postprocess};
pub use preprocess::{INPUT_SIZE, preprocess};
pub use types::{COCO_KEYPOINT_COUNT, Keypoint, KeypointIndex, LetterboxInfo, PoseDetection};
