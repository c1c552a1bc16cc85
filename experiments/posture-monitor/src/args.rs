use clap::Parser;
use posture_core::{Settings, SettingsError, Thresholds};
use std::path::PathBuf;
use std::time::Duration;

/// Watch your posture through the webcam.
#[derive(Parser, Debug)]
#[command(name = "posture-monitor", version, about)]
pub struct Args {
    /// Capture width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Capture height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Camera index (/dev/video<N>)
    #[arg(long, default_value_t = 0)]
    pub camera: u32,

    /// Do not show corrective guidance
    #[arg(long)]
    pub no_guidance: bool,

    /// Rotate frames clockwise by 0, 90, 180 or 270 degrees
    #[arg(long, default_value_t = 0)]
    pub rotate: u32,

    /// YOLO pose model in ONNX format
    #[arg(long, env = "POSTURE_MODEL_PATH", default_value = "models/yolov8n-pose.onnx")]
    pub model: PathBuf,

    /// Neck angle from vertical at which posture is poor, in degrees
    #[arg(long, default_value_t = 40.0)]
    pub neck_threshold: f32,

    /// Torso angle from vertical at which posture is poor, in degrees
    #[arg(long, default_value_t = 10.0)]
    pub torso_threshold: f32,

    /// Seconds of poor posture before the audible alert
    #[arg(long, default_value_t = 3.0)]
    pub alert_after: f32,

    /// Landmarks less confident than this are ignored
    #[arg(long, default_value_t = 0.5)]
    pub min_visibility: f32,

    /// Write logs to date-named files in this directory instead of stdout
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Run the pose model on this CUDA device
    #[cfg(feature = "cuda")]
    #[arg(long)]
    pub cuda: Option<i32>,
}

impl Args {
    /// Build and validate the runtime settings.
    pub fn settings(&self) -> Result<Settings, SettingsError> {
        let alert_after = Duration::try_from_secs_f32(self.alert_after)
            .map_err(|_| SettingsError::AlertAfter(self.alert_after))?;

        let settings = Settings {
            width: self.width,
            height: self.height,
            camera_index: self.camera,
            rotation: self.rotate,
            thresholds: Thresholds {
                neck: self.neck_threshold,
                torso: self.torso_threshold,
            },
            min_visibility: self.min_visibility,
            guidance_enabled: !self.no_guidance,
            alert_after,
            model_path: self.model.clone(),
            log_dir: self.log_dir.clone(),
            ..Settings::default()
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn device(&self) -> posture_infer::Device {
        #[cfg(feature = "cuda")]
        if let Some(device_id) = self.cuda {
            return posture_infer::Device::Cuda { device_id };
        }
        posture_infer::Device::Cpu
    }
}
