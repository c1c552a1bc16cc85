mod args;
mod draw;
mod keys;
mod overlay;
mod window;

use args::Args;
use clap::{CommandFactory, Parser, error::ErrorKind};
use draw::rgb_to_argb;
use keys::{Controls, KeyAction};
use minifb::KeyRepeat;
use overlay::View;
use posture_audio::{AudioOut, alert_chime};
use posture_base::{default_level, init_console_logger, init_file_logger};
use posture_camera::{Camera, CameraConfig, ReconnectingCamera, V4l2Camera};
use posture_core::{LandmarkProvider, Landmarks, Monitor, Settings};
use posture_image::{Rotation, rotate};
use posture_infer::{ModelSource, OnnxBackend, YoloPoseEstimator};
use std::time::Instant;

const ALERT_SAMPLE_RATE: u32 = 48000;

fn camera_config(settings: &Settings) -> CameraConfig {
    CameraConfig::default()
        .with_index(settings.camera_index)
        .with_width(settings.width)
        .with_height(settings.height)
}

/// Displayed size of a `width` x `height` capture after rotation.
fn rotated_size(width: u32, height: u32, rotation: Rotation) -> (usize, usize) {
    match rotation {
        Rotation::Cw90 | Rotation::Cw270 => (height as usize, width as usize),
        Rotation::None | Rotation::Cw180 => (width as usize, height as usize),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let settings = match args.settings() {
        Ok(settings) => settings,
        Err(e) => Args::command().error(ErrorKind::InvalidValue, e).exit(),
    };

    match &settings.log_dir {
        Some(dir) => init_file_logger(dir, default_level())?,
        None => init_console_logger(default_level()),
    }
    let rotation = Rotation::try_from(settings.rotation)?;
    log::info!(
        "camera {} at {}x{}, rotation {rotation}, neck < {} deg, torso < {} deg, alert after {:.1}s",
        settings.camera_index,
        settings.width,
        settings.height,
        settings.thresholds.neck,
        settings.thresholds.torso,
        settings.alert_after.as_secs_f32()
    );

    log::info!("loading pose model {}", settings.model_path.display());
    let backend = OnnxBackend::new(args.device());
    let mut estimator =
        YoloPoseEstimator::new(ModelSource::File(settings.model_path.clone()), &backend)?;

    let mut controls = Controls::new(settings.width, settings.height, settings.resize);
    let mut camera = ReconnectingCamera::open(camera_config(&settings), |config: &CameraConfig| {
        V4l2Camera::new(config.clone())
    })
    .inspect_err(|e| log::error!("cannot open camera: {e}"))?;
    controls.adopt(camera.config().width(), camera.config().height());

    let audio = match AudioOut::new(None, ALERT_SAMPLE_RATE) {
        Ok(audio) => {
            log::info!(
                "alert audio on {} at {} Hz",
                audio.device().unwrap_or("default sink"),
                audio.sample_rate()
            );
            Some(audio)
        }
        Err(e) => {
            log::warn!("audible alerts disabled: {e}");
            None
        }
    };
    let chime = alert_chime(ALERT_SAMPLE_RATE);

    let (window_w, window_h) = rotated_size(controls.size().0, controls.size().1, rotation);
    let mut window = window::open_window(window_w, window_h, controls.fullscreen())?;

    let mut monitor = Monitor::new(&settings);

    'running: while window.is_open() {
        let mut resize_to = None;
        let mut reopen_window = false;
        for key in window.get_keys_pressed(KeyRepeat::Yes) {
            match controls.handle(key) {
                KeyAction::Quit => break 'running,
                KeyAction::ToggleResize => {
                    log::info!("resize mode {}", if controls.resize_mode() { "on" } else { "off" });
                }
                KeyAction::ToggleFullscreen => reopen_window = !reopen_window,
                KeyAction::Resize { width, height } => resize_to = Some((width, height)),
                KeyAction::None => {}
            }
        }

        if reopen_window {
            let (w, h) = rotated_size(controls.size().0, controls.size().1, rotation);
            // the old window stays up if the new one cannot be created
            match window::open_window(w, h, controls.fullscreen()) {
                Ok(new_window) => window = new_window,
                Err(e) => {
                    log::warn!("cannot switch fullscreen mode: {e}");
                    controls.set_fullscreen(!controls.fullscreen());
                }
            }
        }

        if let Some((width, height)) = resize_to {
            log::info!("reopening camera at {width}x{height}");
            camera.resize(width, height);
            controls.adopt(camera.config().width(), camera.config().height());
        }

        // camera failures only cost frames; the camera reopens itself
        let frame = match camera.recv().await {
            Ok(frame) => frame,
            Err(e) if camera.is_connected() => {
                log::warn!("dropping frame: {e}");
                window.update();
                continue;
            }
            Err(e) => {
                log::warn!("camera unavailable, retrying: {e}");
                window.update();
                continue;
            }
        };
        let frame = match rotate(frame, rotation) {
            Ok(frame) => frame,
            Err(e) => {
                log::warn!("dropping frame: {e}");
                window.update();
                continue;
            }
        };
        let Some((height, width)) = frame.image_size() else {
            continue;
        };

        let landmarks = match estimator.detect(&frame) {
            Ok(landmarks) => landmarks,
            Err(e) => {
                log::warn!("pose estimation failed: {e}");
                Landmarks::new()
            }
        };
        let report = monitor.process(&landmarks, Instant::now());

        if report.alert {
            if let Some(audio) = &audio {
                if let Err(e) = audio.try_send(chime.clone()) {
                    log::warn!("alert playback failed: {e}");
                }
            }
        }

        let view = View {
            resize_mode: controls.resize_mode(),
            frame_size: controls.size(),
            min_visibility: settings.min_visibility,
        };
        let mut rgb = frame.data;
        overlay::render(&mut rgb, width, height, &landmarks, &report, &view);
        window.update_with_buffer(&rgb_to_argb(&rgb, width, height), width, height)?;
    }

    log::info!("exiting");
    Ok(())
}
