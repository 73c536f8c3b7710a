//! Terminal runner (default binary).
//!
//! Parses flags, loads settings, then runs the game loop: render, poll input
//! until the next frame, apply actions, advance the drop timer, and hand the
//! resulting events to the audio sink.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};

use tui_bricks::audio::{dispatch, open_feedback, Feedback};
use tui_bricks::config::Settings;
use tui_bricks::core::{GameState, PieceRng};
use tui_bricks::input::{handle_key_event, should_quit};
use tui_bricks::logging;
use tui_bricks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_bricks::types::TICK_MS;

#[derive(Parser, Debug)]
#[command(name = "tui-bricks", version, about = "Falling bricks in your terminal")]
struct Cli {
    /// JSON settings file (missing file means defaults)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the piece generator, for reproducible games
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable sound effects
    #[arg(short, long)]
    mute: bool,

    /// Where to write the log (default: tui-bricks.log in the temp dir)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if cli.mute {
        settings.audio.muted = true;
    }
    let settings = settings.sanitized();
    log::info!("starting with {:?}", settings);

    let rng = match settings.seed {
        Some(seed) => PieceRng::new(seed),
        None => PieceRng::from_entropy(),
    };
    let mut game = GameState::with_rng(rng);
    let mut feedback = open_feedback(settings.audio.volume, settings.audio.muted);
    let view = GameView::new(settings.view.cell_width, settings.view.cell_height);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, view, feedback.as_mut());

    // Always try to restore terminal state.
    let restored = term.exit();
    log::info!(
        "exiting: score={} lines={} level={}",
        game.score(),
        game.lines(),
        game.level()
    );
    result.and(restored)
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    view: GameView,
    feedback: &mut dyn Feedback,
) -> Result<()> {
    game.start();

    let frame = Duration::from_millis(TICK_MS as u64);
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        dispatch(feedback, game.take_events());

        let (w, h) = crossterm::terminal::size()?;
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            game.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
