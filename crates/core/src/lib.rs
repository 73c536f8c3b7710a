//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules, session state and drop timing. It has
//! no dependencies on rendering, audio or terminal I/O.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of visual tags with collision, merging and row clearing
//! - [`game_state`]: The session: active/next piece, lifecycle, drop timer, events
//! - [`pieces`]: Shape matrices, clockwise rotation and horizontal wall kicks
//! - [`rng`]: Uniform piece selection (seeded or scripted)
//! - [`scoring`]: Line-clear points, levels and drop speed
//! - [`snapshot`]: Copyable per-frame view of the session for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each piece is drawn independently, no bag
//! - **Simple kicks**: a rotation tries horizontal offsets 0, -1, +1, -2, +2
//! - **Instant lock**: a piece locks as soon as it cannot fall, no lock delay
//! - **Classic scoring**: 100/300/500/800 per 1-4 lines, times the level
//!
//! # Example
//!
//! ```
//! use tui_bricks_core::GameState;
//! use tui_bricks_types::{GameAction, GameEvent};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! let events = game.take_events();
//! assert_eq!(events[0], GameEvent::Started);
//! assert!(events.contains(&GameEvent::Locked));
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. Once the accumulated time exceeds the drop interval
//! (800ms at level 1, 60ms less per level, never below 120ms) the active
//! piece steps down one row.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_bricks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{EventQueue, GameState, MAX_PENDING_EVENTS};
pub use pieces::{get_shape, rotate_cw, try_rotate, Piece, Shape};
pub use rng::PieceRng;
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score, ClearResult, Progress};
pub use snapshot::{ActiveSnapshot, GameSnapshot, PreviewSnapshot};
