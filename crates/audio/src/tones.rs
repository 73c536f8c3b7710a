//! Beep schedules for game events.
//!
//! Every event maps to a short list of square-wave beeps. A beep's amplitude
//! starts at its gain and decays exponentially to near silence over its
//! duration.

use arrayvec::ArrayVec;

use crate::types::GameEvent;

/// Amplitude of a beep unless the event asks for something quieter.
pub const DEFAULT_GAIN: f32 = 0.05;

/// Amplitude every beep decays towards by its end.
pub const FLOOR_GAIN: f32 = 0.0001;

/// Most beeps a single event produces.
pub const MAX_TONES: usize = 4;

/// One square-wave beep, scheduled `delay_ms` after the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq_hz: f32,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub gain: f32,
}

impl Tone {
    pub const fn new(freq_hz: f32, duration_ms: u32) -> Self {
        Self {
            freq_hz,
            duration_ms,
            delay_ms: 0,
            gain: DEFAULT_GAIN,
        }
    }

    pub const fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    pub const fn after(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Envelope amplitude `t_secs` into the beep; zero once it is over.
    pub fn amplitude_at(&self, t_secs: f32) -> f32 {
        let duration = self.duration_ms as f32 / 1000.0;
        if t_secs < 0.0 || t_secs >= duration || self.gain <= 0.0 {
            return 0.0;
        }
        let ratio = (FLOOR_GAIN / self.gain).min(1.0);
        self.gain * ratio.powf(t_secs / duration)
    }

    /// Square-wave sample at `t_secs`, envelope applied.
    pub fn sample_at(&self, t_secs: f32) -> f32 {
        let amp = self.amplitude_at(t_secs);
        if (t_secs * self.freq_hz).fract() < 0.5 {
            amp
        } else {
            -amp
        }
    }
}

/// Beeps to play for `event`, in start order.
pub fn tones_for(event: GameEvent) -> ArrayVec<Tone, MAX_TONES> {
    let mut tones = ArrayVec::new();
    match event {
        GameEvent::Started => tones.push(Tone::new(660.0, 80)),
        GameEvent::Moved => tones.push(Tone::new(330.0, 30)),
        GameEvent::Rotated => tones.push(Tone::new(520.0, 40)),
        GameEvent::SoftDropStep => tones.push(Tone::new(200.0, 20).with_gain(0.03)),
        GameEvent::Locked => tones.push(Tone::new(280.0, 60)),
        GameEvent::LinesCleared(n) => {
            for i in 0..(n as u32).min(MAX_TONES as u32) {
                tones.push(Tone::new(700.0 - 80.0 * i as f32, 60).after(70 * i));
            }
        }
        GameEvent::GameOver => {
            for (i, freq) in [400.0, 300.0, 200.0].into_iter().enumerate() {
                tones.push(Tone::new(freq, 100).after(120 * i as u32));
            }
        }
    }
    tones
}
