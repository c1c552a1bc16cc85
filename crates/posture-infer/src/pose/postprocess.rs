use crate::InferError;
use posture_base::{Rect, Tensor, Vec2};
use std::cmp::Ordering;

use super::types::{COCO_KEYPOINT_COUNT, Keypoint, LetterboxInfo, PoseDetection};

/// Box (4) + score (1) + 17 keypoints of (x, y, confidence).
const ROW_LEN: usize = 5 + COCO_KEYPOINT_COUNT * 3;

/// Intersection over union of two boxes, 0 for empty boxes.
pub fn iou(a: &Rect<f32>, b: &Rect<f32>) -> f32 {
    if a.size.x <= 0.0 || a.size.y <= 0.0 || b.size.x <= 0.0 || b.size.y <= 0.0 {
        return 0.0;
    }
    let intersection = a.intersection(*b).map_or(0.0, |r| r.area());
    let union = a.area() + b.area() - intersection;
    if union <= 0.0 {
        return 0.0;
    }
    intersection / union
}

/// Decode raw YOLO pose output of shape `[1, 56, N]` into detections in
/// frame coordinates, best first.
///
/// Candidates scoring below `conf_threshold` are dropped, then greedy
/// non-maximum suppression removes boxes overlapping a better one by more
/// than `iou_threshold`.
pub fn postprocess(
    output: &Tensor<f32>,
    letterbox: &LetterboxInfo,
    conf_threshold: f32,
    iou_threshold: f32,
) -> Result<Vec<PoseDetection>, InferError> {
    let n = match output.shape.as_slice() {
        [1, ROW_LEN, n] => *n,
        _ => {
            return Err(InferError::ShapeMismatch {
                expected: format!("[1, {ROW_LEN}, N]"),
                got: format!("{:?}", output.shape),
            });
        }
    };

    // element [0, row, i] lives at row * n + i
    let at = |row: usize, i: usize| output.data[row * n + i];

    let mut candidates: Vec<PoseDetection> = (0..n)
        .filter(|&i| at(4, i) >= conf_threshold)
        .map(|i| {
            let keypoints = std::array::from_fn(|k| {
                let base = 5 + k * 3;
                Keypoint {
                    position: letterbox.to_frame(at(base, i), at(base + 1, i)),
                    confidence: at(base + 2, i),
                }
            });
            let center = letterbox.to_frame(at(0, i), at(1, i));
            let size = Vec2::new(at(2, i) / letterbox.scale, at(3, i) / letterbox.scale);
            PoseDetection {
                bbox: Rect::new(center - size * 0.5, size),
                confidence: at(4, i),
                keypoints,
            }
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });

    let mut kept: Vec<PoseDetection> = Vec::new();
    for candidate in candidates {
        if kept
            .iter()
            .all(|k| iou(&k.bbox, &candidate.bbox) <= iou_threshold)
        {
            kept.push(candidate);
        }
    }

    Ok(kept)
}
