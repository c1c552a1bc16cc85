use crate::Device;
use std::fmt;

#[derive(Debug)]
pub enum InferError {
    ModelLoad(String),
    UnsupportedDevice(Device),
    InvalidInput {
        name: String,
        expected_names: Vec<String>,
    },
    ShapeMismatch {
        expected: String,
        got: String,
    },
    UnsupportedDtype(String),
    Backend(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::UnsupportedDevice(device) => write!(f, "unsupported device: {device}"),
            InferError::InvalidInput {
                name,
                expected_names,
            } => write!(f, "unknown input '{name}', model expects {expected_names:?}"),
            InferError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            InferError::UnsupportedDtype(msg) => write!(f, "unsupported dtype: {msg}"),
            InferError::Backend(msg) => write!(f, "backend error: {msg}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<ort::Error> for InferError {
    fn from(err: ort::Error) -> Self {
        InferError::Backend(err.to_string())
    }
}

impl From<posture_base::TensorError> for InferError {
    fn from(err: posture_base::TensorError) -> Self {
        InferError::Backend(err.to_string())
    }
}
