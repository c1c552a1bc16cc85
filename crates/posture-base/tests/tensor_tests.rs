use posture_base::{Tensor, TensorError};

#[test]
fn test_tensor_new_valid() {
    let tensor = Tensor::new(vec![2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(tensor.shape, vec![2, 3]);
    assert_eq!(tensor.len(), 6);
    assert_eq!(tensor.ndim(), 2);
}

#[test]
fn test_tensor_new_shape_mismatch() {
    let result = Tensor::new(vec![2, 3], vec![1.0, 2.0, 3.0]);
    assert_eq!(
        result.unwrap_err(),
        TensorError::ShapeMismatch { expected: 6, got: 3 }
    );
}

#[test]
fn test_tensor_new_overflow() {
    let result = Tensor::<u8>::new(vec![usize::MAX, 2], vec![]);
    assert!(matches!(result, Err(TensorError::ShapeOverflow)));
}

#[test]
fn test_tensor_zeros() {
    let tensor = Tensor::<u8>::zeros(vec![4, 2, 3]).unwrap();
    assert_eq!(tensor.data, vec![0; 24]);
}

#[test]
fn test_tensor_map_keeps_shape() {
    let tensor = Tensor::new(vec![1, 1, 3], vec![0u8, 127, 255]).unwrap();
    let converted = tensor.map(|&v| v as f32);
    assert_eq!(converted.shape, vec![1, 1, 3]);
    assert_eq!(converted.data, vec![0.0, 127.0, 255.0]);
}

#[test]
fn test_tensor_image_size() {
    let frame = Tensor::<u8>::zeros(vec![480, 640, 3]).unwrap();
    assert_eq!(frame.image_size(), Some((480, 640)));

    let flat = Tensor::<u8>::zeros(vec![12]).unwrap();
    assert_eq!(flat.image_size(), None);
}

#[test]
fn test_tensor_debug_omits_data() {
    let frame = Tensor::<u8>::zeros(vec![2, 2, 3]).unwrap();
    let debug = format!("{:?}", frame);
    assert!(debug.contains("shape: [2, 2, 3]"));
    assert!(debug.contains("len: 12"));
}
