use crate::ImageError;
use posture_base::Tensor;
use std::fmt;

/// Clockwise rotation applied to every captured frame, for cameras mounted sideways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    None,
    Cw90,
    Cw180,
    Cw270,
}

impl TryFrom<u32> for Rotation {
    type Error = String;

    fn try_from(degrees: u32) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::None),
            90 => Ok(Rotation::Cw90),
            180 => Ok(Rotation::Cw180),
            270 => Ok(Rotation::Cw270),
            _ => Err(format!("rotation must be 0, 90, 180 or 270 degrees, got {degrees}")),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = match self {
            Rotation::None => 0,
            Rotation::Cw90 => 90,
            Rotation::Cw180 => 180,
            Rotation::Cw270 => 270,
        };
        write!(f, "{degrees}")
    }
}

/// Rotate an HWC frame clockwise. 90 and 270 degrees swap width and height.
///
/// # Errors
///
/// Returns `ImageError::Format` for tensors that are not rank 3.
pub fn rotate(frame: Tensor<u8>, rotation: Rotation) -> Result<Tensor<u8>, ImageError> {
    let (h, w, c) = match frame.shape.as_slice() {
        [h, w, c] => (*h, *w, *c),
        _ => {
            return Err(ImageError::Format(format!(
                "expected [H, W, C] frame, got {:?}",
                frame.shape
            )));
        }
    };
    if rotation == Rotation::None {
        return Ok(frame);
    }

    let (out_h, out_w) = match rotation {
        Rotation::Cw90 | Rotation::Cw270 => (w, h),
        _ => (h, w),
    };
    let mut rotated = Tensor::<u8>::zeros(vec![out_h, out_w, c])?;
    for y in 0..h {
        for x in 0..w {
            let (dst_y, dst_x) = match rotation {
                Rotation::Cw90 => (x, h - 1 - y),
                Rotation::Cw180 => (h - 1 - y, w - 1 - x),
                Rotation::Cw270 => (w - 1 - x, y),
                Rotation::None => (y, x),
            };
            let src = (y * w + x) * c;
            let dst = (dst_y * out_w + dst_x) * c;
            rotated.data[dst..dst + c].copy_from_slice(&frame.data[src..src + c]);
        }
    }

    Ok(rotated)
}
