use posture_base::Tensor;
use posture_camera::{Camera, CameraConfig, CameraError};
use posture_image::ImageError;

struct MockCamera {
    config: CameraConfig,
    frames: Vec<Result<Tensor<u8>, CameraError>>,
}

impl MockCamera {
    fn new(frames: Vec<Result<Tensor<u8>, CameraError>>) -> Self {
        Self {
            config: CameraConfig::default().with_width(2).with_height(2),
            frames,
        }
    }
}

impl Camera for MockCamera {
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError> {
        if self.frames.is_empty() {
            return Err(CameraError::Channel("capture thread stopped".to_string()));
        }
        self.frames.remove(0)
    }

    fn config(&self) -> &CameraConfig {
        &self.config
    }
}

fn frame() -> Tensor<u8> {
    Tensor::new(vec![2, 2, 3], vec![0u8; 12]).unwrap()
}

#[tokio::test]
async fn test_mock_delivers_frames_in_order() {
    let mut cam = MockCamera::new(vec![Ok(frame()), Ok(frame())]);

    assert_eq!(cam.recv().await.unwrap().shape, vec![2, 2, 3]);
    assert_eq!(cam.recv().await.unwrap().shape, vec![2, 2, 3]);
    assert!(matches!(cam.recv().await, Err(CameraError::Channel(_))));
}

#[tokio::test]
async fn test_generic_reader_skips_transient_errors() {
    async fn next_good_frame(camera: &mut impl Camera) -> Result<Tensor<u8>, CameraError> {
        loop {
            match camera.recv().await {
                Ok(frame) => return Ok(frame),
                Err(e) if e.is_transient() => continue,
                Err(e) => return Err(e),
            }
        }
    }

    let mut cam = MockCamera::new(vec![
        Err(CameraError::Decode(ImageError::Decode("corrupt".to_string()))),
        Ok(frame()),
    ]);
    let frame = next_good_frame(&mut cam).await.unwrap();
    assert_eq!(frame.image_size(), Some((2, 2)));

    let err = next_good_frame(&mut cam).await.unwrap_err();
    assert!(matches!(err, CameraError::Channel(_)));
}

#[test]
fn test_config_accessor() {
    let cam = MockCamera::new(Vec::new());
    assert_eq!(cam.config().width(), 2);
}
