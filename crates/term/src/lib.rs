//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the pure [`GameView`] draws a
//! [`core::GameSnapshot`] into a [`FrameBuffer`], and [`TerminalRenderer`]
//! flushes only the changed cells to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render frames without I/O so layouts can be asserted in tests
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_bricks_core as core;
pub use tui_bricks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{block_glyph, AnchorY, FrameRect, GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
