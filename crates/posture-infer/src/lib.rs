//! Body landmark detection for the posture monitor.
//!
//! A `Backend` loads a model into a `Session`; `YoloPoseEstimator` wraps a
//! session running a YOLO pose model and implements `LandmarkProvider`.

pub mod backend;
pub mod backends;
pub mod device;
pub mod error;
pub mod modelsource;
pub mod pose;
pub mod session;

pub use backend::Backend;
pub use backends::OnnxBackend;
pub use device::Device;
pub use error::InferError;
pub use modelsource::ModelSource;
pub use pose::{
    COCO_KEYPOINT_COUNT, Keypoint, KeypointIndex, LetterboxInfo, PoseDetection,
    YoloPoseEstimator, iou, landmarks_from_detection, postprocess, preprocess,
};
pub use session::Session;
