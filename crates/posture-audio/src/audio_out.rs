use crate::AudioError;
use libpulse_binding::sample::{Format, Spec};
use libpulse_binding::stream::Direction;
use libpulse_simple_binding::Simple;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const QUEUE_DEPTH: usize = 4;

/// Mono S16NE playback on a PulseAudio sink.
///
/// Chunks are queued to a blocking playback task, so sending never waits
/// for the audio server. The connection is opened on the first chunk and
/// reopened after a write failure. Chunks that arrive while the server is
/// unreachable are dropped.
///
/// Must be created inside a tokio runtime.
pub struct AudioOut {
    sample_rate: u32,
    device: Option<String>,
    sender: Option<mpsc::Sender<Vec<i16>>>,
    task_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for AudioOut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioOut")
            .field("sample_rate", &self.sample_rate)
            .field("device", &self.device)
            .field("sender", &self.sender.is_some())
            .field("task_handle", &self.task_handle.is_some())
            .finish()
    }
}

impl AudioOut {
    /// Start a playback task for `device` (`None` for the default sink).
    ///
    /// # Errors
    ///
    /// Returns `AudioError::Device` for a sample rate PulseAudio cannot use.
    pub fn new(device: Option<&str>, sample_rate: u32) -> Result<Self, AudioError> {
        let spec = spec(sample_rate);
        if !spec.is_valid() {
            return Err(AudioError::Device(format!(
                "invalid sample rate {sample_rate}"
            )));
        }

        let device = device.map(str::to_string);
        let (sender, receiver) = mpsc::channel(QUEUE_DEPTH);
        let task_device = device.clone();
        let task_handle = tokio::task::spawn_blocking(move || {
            playback_loop(task_device, spec, receiver);
        });

        Ok(Self {
            sample_rate,
            device,
            sender: Some(sender),
            task_handle: Some(task_handle),
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    /// Queue samples without waiting.
    ///
    /// # Errors
    ///
    /// Returns `AudioError::Channel` when the queue is full and
    /// `AudioError::Stream` when the playback task has stopped.
    pub fn try_send(&self, samples: Vec<i16>) -> Result<(), AudioError> {
        self.sender()?.try_send(samples).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => {
                AudioError::Channel("playback queue full".to_string())
            }
            mpsc::error::TrySendError::Closed(_) => {
                AudioError::Stream("playback task terminated".to_string())
            }
        })
    }

    fn sender(&self) -> Result<&mpsc::Sender<Vec<i16>>, AudioError> {
        self.sender
            .as_ref()
            .ok_or_else(|| AudioError::Channel("sender not initialized".to_string()))
    }
}

impl Drop for AudioOut {
    fn drop(&mut self) {
        // the task drains what is queued, flushes and exits
        drop(self.sender.take());
        drop(self.task_handle.take());
    }
}

fn spec(sample_rate: u32) -> Spec {
    Spec {
        format: Format::S16NE,
        channels: 1,
        rate: sample_rate,
    }
}

fn connect(device: Option<&str>, spec: &Spec) -> Result<Simple, AudioError> {
    Simple::new(
        None,
        "posture-monitor",
        Direction::Playback,
        device,
        "posture-alert",
        spec,
        None,
        None,
    )
    .map_err(|e| AudioError::Device(format!("{e}")))
}

fn playback_loop(device: Option<String>, spec: Spec, mut rx: mpsc::Receiver<Vec<i16>>) {
    let mut stream: Option<Simple> = None;

    while let Some(samples) = rx.blocking_recv() {
        if stream.is_none() {
            match connect(device.as_deref(), &spec) {
                Ok(simple) => stream = Some(simple),
                Err(e) => {
                    log::warn!("failed to connect to PulseAudio, dropping {} samples: {e}", samples.len());
                    continue;
                }
            }
        }

        let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_ne_bytes()).collect();
        if let Some(simple) = &stream {
            if let Err(e) = simple.write(&bytes) {
                log::warn!("PulseAudio write error: {e}");
                stream = None;
            }
        }
    }

    if let Some(simple) = stream {
        if let Err(e) = simple.drain() {
            log::debug!("PulseAudio drain failed: {e}");
        }
    }
}
