use crate::Thresholds;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Highest camera index accepted (`/dev/video63`).
pub const MAX_CAMERA_INDEX: u32 = 63;

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    FrameSize { width: u32, height: u32 },
    CameraIndex(u32),
    Threshold { name: &'static str, value: f32 },
    Visibility(f32),
    Rotation(u32),
    AlertAfter(f32),
    ResizeBounds(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::FrameSize { width, height } => {
                write!(f, "invalid frame size {width}x{height}")
            }
            SettingsError::CameraIndex(index) => {
                write!(f, "camera index {index} out of range 0..={MAX_CAMERA_INDEX}")
            }
            SettingsError::Threshold { name, value } => {
                write!(f, "{name} threshold {value} must be between 0 and 180 degrees")
            }
            SettingsError::Visibility(value) => {
                write!(f, "minimum visibility {value} must be between 0 and 1")
            }
            SettingsError::Rotation(degrees) => {
                write!(f, "rotation must be 0, 90, 180 or 270 degrees, got {degrees}")
            }
            SettingsError::AlertAfter(secs) => {
                write!(f, "alert delay {secs}s must be a non-negative number of seconds")
            }
            SettingsError::ResizeBounds(msg) => write!(f, "invalid resize bounds: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Frame size limits and step for interactive resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeBounds {
    pub min_width: u32,
    pub min_height: u32,
    pub max_width: u32,
    pub max_height: u32,
    pub step: u32,
}

impl Default for ResizeBounds {
    fn default() -> Self {
        Self {
            min_width: 160,
            min_height: 120,
            max_width: 1920,
            max_height: 1080,
            step: 32,
        }
    }
}

impl ResizeBounds {
    /// Clamp a size into `[min, max]` on both axes.
    pub fn clamp(&self, width: i64, height: i64) -> (u32, u32) {
        (
            width.clamp(self.min_width as i64, self.max_width as i64) as u32,
            height.clamp(self.min_height as i64, self.max_height as i64) as u32,
        )
    }
}

/// Startup configuration. Read-only once the monitor is running.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub camera_index: u32,
    /// Clockwise frame rotation in degrees.
    pub rotation: u32,
    pub thresholds: Thresholds,
    pub min_visibility: f32,
    pub guidance_enabled: bool,
    pub alert_after: Duration,
    pub model_path: PathBuf,
    pub resize: ResizeBounds,
    pub log_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            camera_index: 0,
            rotation: 0,
            thresholds: Thresholds::default(),
            min_visibility: 0.5,
            guidance_enabled: true,
            alert_after: Duration::from_secs(3),
            model_path: PathBuf::from("models/yolov8n-pose.onnx"),
            resize: ResizeBounds::default(),
            log_dir: None,
        }
    }
}

fn valid_threshold(value: f32) -> bool {
    value > 0.0 && value < 180.0
}

impl Settings {
    /// Reject configurations the monitor cannot run with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let resize = &self.resize;
        if resize.step == 0 {
            return Err(SettingsError::ResizeBounds("step must be positive".to_string()));
        }
        if resize.min_width == 0
            || resize.min_height == 0
            || resize.min_width > resize.max_width
            || resize.min_height > resize.max_height
        {
            return Err(SettingsError::ResizeBounds(format!(
                "{}x{} to {}x{}",
                resize.min_width, resize.min_height, resize.max_width, resize.max_height
            )));
        }
        if self.width == 0
            || self.height == 0
            || self.width > resize.max_width
            || self.height > resize.max_height
        {
            return Err(SettingsError::FrameSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.camera_index > MAX_CAMERA_INDEX {
            return Err(SettingsError::CameraIndex(self.camera_index));
        }
        if !valid_threshold(self.thresholds.neck) {
            return Err(SettingsError::Threshold {
                name: "neck",
                value: self.thresholds.neck,
            });
        }
        if !valid_threshold(self.thresholds.torso) {
            return Err(SettingsError::Threshold {
                name: "torso",
                value: self.thresholds.torso,
            });
        }
        if !(0.0..=1.0).contains(&self.min_visibility) {
            return Err(SettingsError::Visibility(self.min_visibility));
        }
        if !matches!(self.rotation, 0 | 90 | 180 | 270) {
            return Err(SettingsError::Rotation(self.rotation));
        }
        Ok(())
    }
}
