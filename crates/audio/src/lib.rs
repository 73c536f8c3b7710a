//! Audio feedback for game events.
//!
//! The engine never calls into this crate. It queues [`types::GameEvent`]s,
//! and the runner drains them into a [`Feedback`] sink. Sinks return nothing
//! and must not fail the game: output problems are logged and dropped.
//!
//! - [`tones`]: the beep schedule for each event (pure, always built)
//! - `player` (feature `sound`): [`ToneSfx`] plays the schedule through rodio

pub mod tones;

#[cfg(feature = "sound")]
pub mod player;

pub use tui_bricks_types as types;

pub use tones::{tones_for, Tone, DEFAULT_GAIN, MAX_TONES};

#[cfg(feature = "sound")]
pub use player::ToneSfx;

use types::GameEvent;

/// Fire-and-forget receiver of game events.
pub trait Feedback {
    fn notify(&mut self, event: GameEvent);
}

impl<F: Feedback + ?Sized> Feedback for Box<F> {
    fn notify(&mut self, event: GameEvent) {
        (**self).notify(event);
    }
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Feedback for Silent {
    fn notify(&mut self, _event: GameEvent) {}
}

/// Keeps every event it receives, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub events: Vec<GameEvent>,
}

impl Feedback for Recorder {
    fn notify(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Forward a batch of events to `sink` in order.
pub fn dispatch<F, I>(sink: &mut F, events: I)
where
    F: Feedback + ?Sized,
    I: IntoIterator<Item = GameEvent>,
{
    for event in events {
        sink.notify(event);
    }
}

/// The sink the runner should use: rodio output when built with `sound`,
/// not muted and a device is available; otherwise [`Silent`].
pub fn open_feedback(volume: f32, muted: bool) -> Box<dyn Feedback> {
    if muted {
        log::info!("audio muted");
        return Box::new(Silent);
    }

    #[cfg(feature = "sound")]
    {
        match ToneSfx::new(volume) {
            Ok(sfx) => {
                log::info!("audio output opened, volume {:.2}", sfx.volume());
                return Box::new(sfx);
            }
            Err(err) => log::warn!("audio unavailable, continuing silently: {err}"),
        }
    }

    #[cfg(not(feature = "sound"))]
    {
        let _ = volume;
        log::debug!("built without the `sound` feature, audio disabled");
    }

    Box::new(Silent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_preserves_order() {
        let mut rec = Recorder::default();
        dispatch(
            &mut rec,
            [GameEvent::Moved, GameEvent::Locked, GameEvent::LinesCleared(2)],
        );
        assert_eq!(
            rec.events,
            vec![GameEvent::Moved, GameEvent::Locked, GameEvent::LinesCleared(2)]
        );
    }

    #[test]
    fn boxed_sinks_forward() {
        let mut sink: Box<dyn Feedback> = Box::new(Silent);
        dispatch(&mut sink, [GameEvent::Started]);

        let mut boxed = Box::new(Recorder::default());
        boxed.notify(GameEvent::GameOver);
        assert_eq!(boxed.events, vec![GameEvent::GameOver]);
    }

    #[test]
    fn muted_feedback_is_silent() {
        // Only checks that no device is needed when muted.
        let mut sink = open_feedback(1.0, true);
        sink.notify(GameEvent::Started);
    }
}
