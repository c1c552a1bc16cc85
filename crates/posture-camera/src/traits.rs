use crate::{CameraConfig, CameraError};
use posture_base::Tensor;

/// Async camera trait for frame capture.
#[allow(async_fn_in_trait)]
pub trait Camera {
    /// Receive the next frame as an RGB `Tensor<u8>` with shape `[height, width, 3]`.
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError>;

    /// The configuration actually in effect, after the device negotiated size and rate.
    fn config(&self) -> &CameraConfig;
}
