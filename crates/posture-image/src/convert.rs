use crate::ImageError;
use posture_base::Tensor;

fn clamp_u8(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

/// Converts packed YUYV (YUV 4:2:2) pixel data to an RGB tensor.
///
/// YUYV packs as `[Y0, U, Y1, V, ...]`, two pixels sharing one U/V pair.
/// Uses BT.601 coefficients.
///
/// # Errors
///
/// Returns `ImageError::Format` if the width is odd or the buffer holds fewer
/// than `width * height * 2` bytes.
pub fn yuyv_to_rgb(data: &[u8], width: usize, height: usize) -> Result<Tensor<u8>, ImageError> {
    if width % 2 != 0 {
        return Err(ImageError::Format(format!("YUYV width must be even, got {width}")));
    }
    let expected_len = width * height * 2;
    if data.len() < expected_len {
        return Err(ImageError::Format(format!(
            "YUYV buffer too short: expected {expected_len} bytes, got {}",
            data.len()
        )));
    }

    let mut rgb = Vec::with_capacity(width * height * 3);
    for chunk in data[..expected_len].chunks_exact(4) {
        let u = chunk[1] as f32 - 128.0;
        let v = chunk[3] as f32 - 128.0;
        for y in [chunk[0] as f32, chunk[2] as f32] {
            rgb.push(clamp_u8(y + 1.402 * v));
            rgb.push(clamp_u8(y - 0.344 * u - 0.714 * v));
            rgb.push(clamp_u8(y + 1.772 * u));
        }
    }

    Ok(Tensor::new(vec![height, width, 3], rgb)?)
}
