//! Audible posture alerts over PulseAudio.

pub mod audio_out;
pub mod error;
pub mod tone;

pub use audio_out::AudioOut;
pub use error::AudioError;
pub use tone::{Tone, alert_chime};
