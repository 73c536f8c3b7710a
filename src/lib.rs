//! TUI Bricks (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_bricks::{types,core,input,term,audio}`
//! and hosts the runner's settings and logging setup.

pub mod config;
pub mod logging;

pub use tui_bricks_audio as audio;
pub use tui_bricks_core as core;
pub use tui_bricks_input as input;
pub use tui_bricks_term as term;
pub use tui_bricks_types as types;
