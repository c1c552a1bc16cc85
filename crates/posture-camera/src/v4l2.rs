use crate::{Camera, CameraConfig, CameraError};
use posture_base::Tensor;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::sync::mpsc;
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::video::capture::Parameters;
use v4l::{Device, Format, FourCC};

type FrameResult = Result<Tensor<u8>, CameraError>;

const MJPG: &[u8; 4] = b"MJPG";
const YUYV: &[u8; 4] = b"YUYV";

// a driver that stops delivering frames is treated as a stream failure
const CAPTURE_TIMEOUT: Duration = Duration::from_secs(2);

// delay before reopening the device after a stream failure
const WAIT_BEFORE_RECONNECT_MS: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
enum PixelFormat {
    Mjpeg,
    Yuyv,
}

/// V4L2 webcam opened by index, delivering RGB frames from a capture thread.
pub struct V4l2Camera {
    config: CameraConfig,
    format: PixelFormat,
    receiver: Option<mpsc::Receiver<FrameResult>>,
    cancel: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("format", &self.format)
            .field("running", &self.thread_handle.is_some())
            .finish()
    }
}

impl Camera for V4l2Camera {
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError> {
        let receiver = self
            .receiver
            .as_mut()
            .ok_or_else(|| CameraError::Channel("receiver not initialized".to_string()))?;

        receiver
            .recv()
            .await
            .ok_or_else(|| CameraError::Channel("capture thread stopped".to_string()))?
    }

    fn config(&self) -> &CameraConfig {
        &self.config
    }
}

impl Drop for V4l2Camera {
    fn drop(&mut self) {
        // the worker notices within one capture timeout or reconnect wait
        self.cancel.store(true, Ordering::Relaxed);
        drop(self.receiver.take());

        if let Some(handle) = self.thread_handle.take() {
            if handle.join().is_err() {
                log::error!("camera capture thread panicked");
            }
        }
        log::debug!("released camera {}", self.config.index());
    }
}

impl V4l2Camera {
    /// Open `/dev/video<index>` and start capturing.
    ///
    /// MJPEG is requested first; devices that only stream raw frames fall
    /// back to YUYV. The stored config reflects the size and rate the
    /// driver actually granted.
    ///
    /// If the stream fails later, the capture thread reports a
    /// `CameraError::Stream` and reopens the device with the same settings.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Unavailable` if the device cannot be opened or
    /// its buffers cannot be mapped, and `CameraError::Device` if it offers
    /// neither MJPEG nor YUYV.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        let index = config.index();
        let opened = open_stream(&config)?;

        let granted = config
            .clone()
            .with_width(opened.width)
            .with_height(opened.height)
            .with_fps(opened.fps);
        log::info!(
            "opened camera {index}: {}x{} {:?} at {} fps",
            granted.width(),
            granted.height(),
            opened.format,
            granted.fps()
        );

        let (tx, rx) = mpsc::channel(config.buffer_count().max(1) as usize);
        let cancel = Arc::new(AtomicBool::new(false));
        let format = opened.format;
        let handle = thread::Builder::new()
            .name(format!("camera-{index}"))
            .spawn({
                let cancel = Arc::clone(&cancel);
                move || capture_loop(opened, config, tx, cancel)
            })?;

        Ok(Self {
            config: granted,
            format,
            receiver: Some(rx),
            cancel,
            thread_handle: Some(handle),
        })
    }
}

/// A mapped capture stream and the format the driver settled on.
struct OpenStream {
    stream: MmapStream<'static>,
    format: PixelFormat,
    width: u32,
    height: u32,
    fps: u32,
}

fn open_stream(config: &CameraConfig) -> Result<OpenStream, CameraError> {
    let index = config.index();
    let device = Device::new(index as usize)
        .map_err(|e| CameraError::Unavailable(format!("camera {index}: {e}")))?;

    let (format, granted) = negotiate_format(&device, config)?;

    let params = Parameters::with_fps(config.fps());
    let fps = match Capture::set_params(&device, &params) {
        Ok(p) if p.interval.numerator > 0 => p.interval.denominator / p.interval.numerator,
        Ok(_) => config.fps(),
        Err(e) => {
            log::warn!("camera {index}: could not set {} fps: {e}", config.fps());
            config.fps()
        }
    };

    let mut stream =
        MmapStream::with_buffers(&device, Type::VideoCapture, config.buffer_count().max(1))
            .map_err(|e| CameraError::Unavailable(format!("camera {index}: {e}")))?;
    stream.set_timeout(CAPTURE_TIMEOUT);

    Ok(OpenStream {
        stream,
        format,
        width: granted.width,
        height: granted.height,
        fps,
    })
}

fn negotiate_format(
    device: &Device,
    config: &CameraConfig,
) -> Result<(PixelFormat, Format), CameraError> {
    for (fourcc, pixel_format) in [(MJPG, PixelFormat::Mjpeg), (YUYV, PixelFormat::Yuyv)] {
        let requested = Format::new(config.width(), config.height(), FourCC::new(fourcc));
        let granted = Capture::set_format(device, &requested)?;
        if granted.fourcc == FourCC::new(fourcc) {
            if granted.width != config.width() || granted.height != config.height() {
                log::warn!(
                    "camera {}: requested {}x{}, driver granted {}x{}",
                    config.index(),
                    config.width(),
                    config.height(),
                    granted.width,
                    granted.height
                );
            }
            return Ok((pixel_format, granted));
        }
        log::debug!("camera {}: {} not accepted", config.index(), FourCC::new(fourcc));
    }
    Err(CameraError::Device(
        "device supports neither MJPEG nor YUYV".to_string(),
    ))
}

fn decode_frame(
    data: &[u8],
    format: PixelFormat,
    width: usize,
    height: usize,
) -> Result<Tensor<u8>, CameraError> {
    let frame = match format {
        PixelFormat::Mjpeg => posture_image::decode_rgb(data)?,
        PixelFormat::Yuyv => posture_image::yuyv_to_rgb(data, width, height)?,
    };
    Ok(frame)
}

/// Reads frames until cancelled or the receiver is dropped.
///
/// A frame that fails to decode is forwarded as an error and capture
/// continues. A stream failure (including a capture timeout) is forwarded,
/// then the device is closed and reopened with `config`.
fn capture_loop(
    opened: OpenStream,
    config: CameraConfig,
    tx: mpsc::Sender<FrameResult>,
    cancel: Arc<AtomicBool>,
) {
    let index = config.index();
    let mut current = Some(opened);

    while !cancel.load(Ordering::Relaxed) {
        let Some(opened) = current.as_mut() else {
            current = reconnect(&config, &cancel);
            continue;
        };
        let format = opened.format;
        let (width, height) = (opened.width as usize, opened.height as usize);

        let captured = match CaptureStream::next(&mut opened.stream) {
            Ok((data, meta)) => {
                let used = meta.bytesused as usize;
                let bytes = if used > 0 && used <= data.len() {
                    &data[..used]
                } else {
                    data
                };
                Ok(decode_frame(bytes, format, width, height))
            }
            Err(e) => Err(e),
        };

        let result = match captured {
            Ok(result) => result,
            Err(_) if cancel.load(Ordering::Relaxed) => break,
            Err(e) => {
                log::error!("camera {index}: capture failed: {e}");
                // release the device before trying to open it again
                current = None;
                Err(CameraError::Stream(e.to_string()))
            }
        };

        if tx.blocking_send(result).is_err() {
            log::debug!("frame receiver dropped, stopping capture");
            return;
        }
    }
    log::debug!("camera {index}: capture stopped");
}

/// Reopen the device until it succeeds or capture is cancelled.
fn reconnect(config: &CameraConfig, cancel: &AtomicBool) -> Option<OpenStream> {
    while !cancel.load(Ordering::Relaxed) {
        thread::sleep(Duration::from_millis(WAIT_BEFORE_RECONNECT_MS));
        log::info!("camera {}: reconnecting", config.index());
        match open_stream(config) {
            Ok(opened) => {
                log::info!(
                    "camera {}: reconnected at {}x{}",
                    config.index(),
                    opened.width,
                    opened.height
                );
                return Some(opened);
            }
            Err(e) => log::debug!("camera {}: reopen failed: {e}", config.index()),
        }
    }
    None
}
