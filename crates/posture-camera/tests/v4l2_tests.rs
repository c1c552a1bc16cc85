#[cfg(feature = "v4l2")]
mod v4l2_tests {
    use posture_camera::{CameraConfig, CameraError, V4l2Camera};

    #[test]
    fn test_missing_index_is_unavailable() {
        let config = CameraConfig::default().with_index(63);

        match V4l2Camera::new(config) {
            Err(CameraError::Unavailable(msg)) => assert!(msg.contains("camera 63")),
            Err(other) => panic!("expected CameraError::Unavailable, got {other:?}"),
            Ok(_) => panic!("no camera should exist at index 63"),
        }
    }
}
