//! Speaker output through rodio.

use std::time::Duration;

use anyhow::Result;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

use crate::tones::{tones_for, Tone};
use crate::types::GameEvent;
use crate::Feedback;

const SAMPLE_RATE: u32 = 44_100;

/// A single decaying square-wave beep as a rodio source.
#[derive(Debug, Clone)]
struct Beep {
    tone: Tone,
    sample: u64,
    total: u64,
}

impl Beep {
    fn new(tone: Tone) -> Self {
        let total = (SAMPLE_RATE as u64) * (tone.duration_ms as u64) / 1000;
        Self {
            tone,
            sample: 0,
            total,
        }
    }
}

impl Iterator for Beep {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.sample >= self.total {
            return None;
        }
        let t = self.sample as f32 / SAMPLE_RATE as f32;
        self.sample += 1;
        Some(self.tone.sample_at(t))
    }
}

impl Source for Beep {
    fn current_frame_len(&self) -> Option<usize> {
        Some((self.total - self.sample) as usize)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_millis(self.tone.duration_ms as u64))
    }
}

/// Plays the beep schedule of each event on the default output device.
///
/// Each beep gets its own detached sink, so overlapping schedules mix instead
/// of queueing behind each other.
pub struct ToneSfx {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    volume: f32,
}

impl ToneSfx {
    /// Open the default output device. `volume` scales every beep (0.0-1.0).
    pub fn new(volume: f32) -> Result<Self> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            volume: volume.clamp(0.0, 1.0),
        })
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    fn play(&self, tone: Tone) {
        let sink = match Sink::try_new(&self.handle) {
            Ok(sink) => sink,
            Err(err) => {
                log::debug!("sfx sink unavailable: {err}");
                return;
            }
        };
        sink.set_volume(self.volume);
        sink.append(Beep::new(tone).delay(Duration::from_millis(tone.delay_ms as u64)));
        sink.detach();
    }
}

impl Feedback for ToneSfx {
    fn notify(&mut self, event: GameEvent) {
        if self.volume <= 0.0 {
            return;
        }
        for tone in tones_for(event) {
            self.play(tone);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beep_length_matches_duration() {
        let beep = Beep::new(Tone::new(330.0, 30));
        assert_eq!(beep.clone().count(), (SAMPLE_RATE as usize) * 30 / 1000);
        assert_eq!(beep.total_duration(), Some(Duration::from_millis(30)));
    }

    #[test]
    fn beep_stays_within_gain() {
        let tone = Tone::new(660.0, 80);
        assert!(Beep::new(tone).all(|s| s.abs() <= tone.gain));
    }
}
