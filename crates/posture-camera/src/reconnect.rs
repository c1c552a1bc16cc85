use crate::{Camera, CameraConfig, CameraError};
use posture_base::Tensor;
use std::time::Duration;

// delay before reopening a camera whose capture worker has gone away
const WAIT_BEFORE_RECONNECT: Duration = Duration::from_millis(500);

/// Camera wrapper that reopens the underlying device instead of giving up.
///
/// `open` builds a camera from a config. Only the first open, in
/// [`ReconnectingCamera::open`], reports failure to the caller; after that a
/// lost camera is dropped and reopened on a later `recv`, and a resize that
/// the device refuses falls back to the previous size.
pub struct ReconnectingCamera<C, F> {
    open: F,
    config: CameraConfig,
    camera: Option<C>,
    retry_delay: Duration,
}

impl<C, F> ReconnectingCamera<C, F>
where
    C: Camera,
    F: FnMut(&CameraConfig) -> Result<C, CameraError>,
{
    /// Open the camera for the first time.
    ///
    /// # Errors
    ///
    /// Returns whatever `open` returns, typically `CameraError::Unavailable`.
    pub fn open(config: CameraConfig, mut open: F) -> Result<Self, CameraError> {
        let camera = open(&config)?;
        Ok(Self {
            open,
            config: camera.config().clone(),
            camera: Some(camera),
            retry_delay: WAIT_BEFORE_RECONNECT,
        })
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn is_connected(&self) -> bool {
        self.camera.is_some()
    }

    /// Reopen at a new frame size.
    ///
    /// The old camera is released first since the device stays busy while it
    /// streams. If the new size cannot be opened the previous config is
    /// reopened; if that fails too, the next `recv` keeps retrying it.
    pub fn resize(&mut self, width: u32, height: u32) {
        drop(self.camera.take());

        let requested = self.config.clone().with_width(width).with_height(height);
        match (self.open)(&requested) {
            Ok(camera) => {
                self.connected(camera);
                return;
            }
            Err(e) => log::warn!(
                "cannot open camera at {width}x{height}: {e}, keeping {}x{}",
                self.config.width(),
                self.config.height()
            ),
        }

        match (self.open)(&self.config) {
            Ok(camera) => self.connected(camera),
            Err(e) => log::warn!("cannot reopen camera: {e}, will retry"),
        }
    }

    fn connected(&mut self, camera: C) {
        self.config = camera.config().clone();
        self.camera = Some(camera);
    }
}

impl<C, F> Camera for ReconnectingCamera<C, F>
where
    C: Camera,
    F: FnMut(&CameraConfig) -> Result<C, CameraError>,
{
    /// Next frame, or the error that spoiled it.
    ///
    /// Errors are never final: after a non-transient one the camera is
    /// dropped, and the following call waits `retry_delay` and reopens it.
    async fn recv(&mut self) -> Result<Tensor<u8>, CameraError> {
        if self.camera.is_none() {
            if !self.retry_delay.is_zero() {
                tokio::time::sleep(self.retry_delay).await;
            }
            let camera = (self.open)(&self.config)?;
            log::info!("camera {} reconnected", self.config.index());
            self.connected(camera);
        }

        let Some(camera) = self.camera.as_mut() else {
            return Err(CameraError::Channel("camera not connected".to_string()));
        };
        let result = camera.recv().await;
        if let Err(e) = &result {
            if !e.is_transient() {
                log::warn!("camera {} lost: {e}, reconnecting", self.config.index());
                self.camera = None;
            }
        }
        result
    }

    fn config(&self) -> &CameraConfig {
        &self.config
    }
}
