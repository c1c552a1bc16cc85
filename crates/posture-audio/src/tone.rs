use std::f32::consts::TAU;
use std::time::Duration;

/// A sine tone with short linear fades so it starts and stops without clicks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration: Duration,
    /// Peak amplitude in [0, 1].
    pub volume: f32,
}

const FADE: Duration = Duration::from_millis(10);

impl Tone {
    pub fn new(frequency_hz: f32, duration: Duration, volume: f32) -> Self {
        Self {
            frequency_hz,
            duration,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    /// Render the tone as mono 16-bit samples.
    pub fn samples(&self, sample_rate: u32) -> Vec<i16> {
        let rate = sample_rate as f32;
        let count = (self.duration.as_secs_f32() * rate).round() as usize;
        let fade = ((FADE.as_secs_f32() * rate) as usize).min(count / 2).max(1);
        let peak = self.volume * i16::MAX as f32;

        (0..count)
            .map(|i| {
                let envelope = (i.min(count - 1 - i) as f32 / fade as f32).min(1.0);
                let phase = TAU * self.frequency_hz * i as f32 / rate;
                (phase.sin() * peak * envelope) as i16
            })
            .collect()
    }
}

/// Two short rising beeps separated by a gap of silence.
pub fn alert_chime(sample_rate: u32) -> Vec<i16> {
    let beep = Duration::from_millis(150);
    let gap = vec![0i16; (sample_rate / 10) as usize];

    let mut samples = Tone::new(660.0, beep, 0.5).samples(sample_rate);
    samples.extend_from_slice(&gap);
    samples.extend(Tone::new(880.0, beep, 0.5).samples(sample_rate));
    samples
}
