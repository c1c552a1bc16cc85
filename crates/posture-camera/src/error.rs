use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    /// The requested camera index cannot be opened.
    Unavailable(String),
    Device(String),
    Stream(String),
    Decode(posture_image::ImageError),
    Channel(String),
}

impl CameraError {
    /// Whether the camera can still deliver frames after this error.
    ///
    /// Decode failures only spoil one frame, and after a stream failure the
    /// capture worker reopens the device on its own. Everything else means
    /// the worker is gone or never started.
    pub fn is_transient(&self) -> bool {
        matches!(self, CameraError::Decode(_) | CameraError::Stream(_))
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Unavailable(msg) => write!(f, "camera unavailable: {msg}"),
            CameraError::Device(msg) => write!(f, "device error: {msg}"),
            CameraError::Stream(msg) => write!(f, "stream error: {msg}"),
            CameraError::Decode(err) => write!(f, "decode error: {err}"),
            CameraError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Device(err.to_string())
    }
}

impl From<posture_image::ImageError> for CameraError {
    fn from(err: posture_image::ImageError) -> Self {
        CameraError::Decode(err)
    }
}
