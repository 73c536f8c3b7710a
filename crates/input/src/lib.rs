//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Each key
//! press produces at most one action; the terminal's own key repeat supplies
//! auto-repeat.

pub mod map;

pub use tui_bricks_types as types;

pub use map::{handle_key_event, should_quit};
