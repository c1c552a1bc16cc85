mod onnx;

pub use onnx::{OnnxBackend, OnnxSession, ndarray_to_tensor, tensor_to_ndarray};
