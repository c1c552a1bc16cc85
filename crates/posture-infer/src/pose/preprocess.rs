use crate::InferError;
use posture_base::Tensor;

use super::types::LetterboxInfo;

/// Side length of the square model input.
pub const INPUT_SIZE: usize = 640;
const PAD_VALUE: f32 = 114.0 / 255.0;

/// Letterbox an `[H, W, 3]` image with values in [0, 255] into a
/// `[1, 3, 640, 640]` NCHW tensor with values in [0, 1].
///
/// Scaling keeps the aspect ratio (nearest neighbour), and the unused
/// border is filled with gray.
pub fn preprocess(image: &Tensor<f32>) -> Result<(Tensor<f32>, LetterboxInfo), InferError> {
    let (h, w) = match image.shape.as_slice() {
        [h, w, 3] if *h > 0 && *w > 0 => (*h, *w),
        _ => {
            return Err(InferError::ShapeMismatch {
                expected: "[H, W, 3] with H, W > 0".to_string(),
                got: format!("{:?}", image.shape),
            });
        }
    };

    let scale = (INPUT_SIZE as f32 / w as f32).min(INPUT_SIZE as f32 / h as f32);
    let new_w = ((w as f32 * scale) as usize).min(INPUT_SIZE);
    let new_h = ((h as f32 * scale) as usize).min(INPUT_SIZE);
    let pad_x = (INPUT_SIZE - new_w) / 2;
    let pad_y = (INPUT_SIZE - new_h) / 2;

    let plane = INPUT_SIZE * INPUT_SIZE;
    let mut nchw = vec![PAD_VALUE; 3 * plane];
    for y in 0..new_h {
        let src_y = ((y as f32 / scale) as usize).min(h - 1);
        for x in 0..new_w {
            let src_x = ((x as f32 / scale) as usize).min(w - 1);
            let src = (src_y * w + src_x) * 3;
            let dst = (y + pad_y) * INPUT_SIZE + (x + pad_x);
            for ch in 0..3 {
                nchw[ch * plane + dst] = image.data[src + ch] / 255.0;
            }
        }
    }

    let input = Tensor::new(vec![1, 3, INPUT_SIZE, INPUT_SIZE], nchw)?;
    let letterbox = LetterboxInfo {
        scale,
        pad_x: pad_x as f32,
        pad_y: pad_y as f32,
    };
    Ok((input, letterbox))
}
