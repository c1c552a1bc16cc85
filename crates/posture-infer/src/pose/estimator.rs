use crate::{Backend, InferError, ModelSource, Session};
use posture_base::Tensor;
use posture_core::{LandmarkProvider, Landmarks};

use super::landmarks::landmarks_from_detection;
use super::postprocess::postprocess;
use super::preprocess::preprocess;
use super::types::PoseDetection;

const CONF_THRESHOLD: f32 = 0.25;
const IOU_THRESHOLD: f32 = 0.45;

/// YOLO pose pipeline: letterbox, inference, decoding and NMS.
pub struct YoloPoseEstimator {
    session: Box<dyn Session>,
}

impl YoloPoseEstimator {
    /// Load `model` with `backend`.
    pub fn new(model: ModelSource, backend: &dyn Backend) -> Result<Self, InferError> {
        let session = backend.load_model(model)?;
        log::info!("loaded pose model with {} backend", backend.name());
        Ok(Self::from_session(session))
    }

    /// Wrap an already loaded session.
    pub fn from_session(session: Box<dyn Session>) -> Self {
        Self { session }
    }

    /// Detect people in an `[H, W, 3]` image with values in [0, 255].
    ///
    /// Returns detections above confidence 0.25 after NMS at IoU 0.45,
    /// sorted by confidence, best first.
    pub fn estimate(&mut self, image: &Tensor<f32>) -> Result<Vec<PoseDetection>, InferError> {
        let (input, letterbox) = preprocess(image)?;

        let input_name = self
            .session
            .input_names()
            .first()
            .ok_or_else(|| InferError::Backend("model has no inputs".to_string()))?
            .clone();
        let output_name = self
            .session
            .output_names()
            .first()
            .ok_or_else(|| InferError::Backend("model has no outputs".to_string()))?
            .clone();

        let outputs = self.session.run(&[(input_name.as_str(), input)])?;
        let output = outputs.get(&output_name).ok_or_else(|| {
            InferError::Backend(format!("model did not produce output '{output_name}'"))
        })?;

        postprocess(output, &letterbox, CONF_THRESHOLD, IOU_THRESHOLD)
    }
}

impl LandmarkProvider for YoloPoseEstimator {
    type Error = InferError;

    fn detect(&mut self, frame: &Tensor<u8>) -> Result<Landmarks, InferError> {
        let image = frame.map(|&v| v as f32);
        let detections = self.estimate(&image)?;
        Ok(detections
            .first()
            .map(landmarks_from_detection)
            .unwrap_or_default())
    }
}
