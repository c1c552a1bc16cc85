use posture_base::Tensor;
use posture_infer::{InferError, preprocess};

#[test]
fn test_rejects_non_rgb() {
    let gray = Tensor::new(vec![4, 4, 1], vec![0.0; 16]).unwrap();
    assert!(matches!(preprocess(&gray), Err(InferError::ShapeMismatch { .. })));

    let flat = Tensor::new(vec![16], vec![0.0; 16]).unwrap();
    assert!(matches!(preprocess(&flat), Err(InferError::ShapeMismatch { .. })));
}

#[test]
fn test_landscape_frame_is_padded_vertically() {
    let frame = Tensor::new(vec![480, 640, 3], vec![255.0; 480 * 640 * 3]).unwrap();
    let (input, letterbox) = preprocess(&frame).unwrap();

    assert_eq!(input.shape, vec![1, 3, 640, 640]);
    assert_eq!(letterbox.scale, 1.0);
    assert_eq!(letterbox.pad_x, 0.0);
    assert_eq!(letterbox.pad_y, 80.0);

    let plane = 640 * 640;
    // top border is gray, image area is white
    assert!((input.data[0] - 114.0 / 255.0).abs() < 1e-6);
    assert_eq!(input.data[100 * 640 + 10], 1.0);
    assert_eq!(input.data[2 * plane + 300 * 640 + 320], 1.0);
    assert!((input.data[2 * plane + 639 * 640] - 114.0 / 255.0).abs() < 1e-6);
}

#[test]
fn test_channels_are_split_into_planes() {
    let mut data = Vec::new();
    for _ in 0..(2 * 2) {
        data.extend_from_slice(&[255.0, 0.0, 51.0]);
    }
    let frame = Tensor::new(vec![2, 2, 3], data).unwrap();
    let (input, letterbox) = preprocess(&frame).unwrap();

    assert_eq!(letterbox.scale, 320.0);
    let plane = 640 * 640;
    let center = 320 * 640 + 320;
    assert_eq!(input.data[center], 1.0);
    assert_eq!(input.data[plane + center], 0.0);
    assert!((input.data[2 * plane + center] - 0.2).abs() < 1e-6);
}
