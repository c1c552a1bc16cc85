//! Frame conversions for the posture monitor.
//!
//! Everything produced here is an RGB `Tensor<u8>` in HWC layout:
//! `[height, width, 3]`.

pub mod convert;
pub mod error;
pub mod rotate;

pub use convert::yuyv_to_rgb;
pub use error::ImageError;
pub use rotate::{Rotation, rotate};

use posture_base::Tensor;

/// Decode a compressed image (MJPEG frame, PNG, ...) into an RGB tensor.
///
/// Grayscale and alpha variants are converted to plain RGB so every frame
/// entering the pipeline has three channels.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the data is invalid or the format is unsupported.
pub fn decode_rgb(data: &[u8]) -> Result<Tensor<u8>, ImageError> {
    let rgb = image::load_from_memory(data)?.into_rgb8();
    let (width, height) = rgb.dimensions();
    let tensor = Tensor::new(vec![height as usize, width as usize, 3], rgb.into_raw())?;
    Ok(tensor)
}
