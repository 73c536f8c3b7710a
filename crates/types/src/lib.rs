//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the terminal renderer, and the sound collaborator alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn row**: -1 (one row above the visible board)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the terminal runner (~60 FPS) |
//! | `BASE_DROP_MS` | 800 | Drop interval at level 1 |
//! | `DROP_STEP_MS` | 60 | Interval reduction per level |
//! | `DROP_INTERVAL_FLOOR_MS` | 120 | Fastest drop interval |
//!
//! # Drop Intervals by Level
//!
//! `max(120, 800 - (level - 1) * 60)`:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 800ms |
//! | 2 | 740ms |
//! | 5 | 560ms |
//! | 10 | 260ms |
//! | 13+ | 120ms |
//!
//! # Examples
//!
//! ```
//! use tui_bricks_types::{GameAction, Material, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.material(), Material::Steel);
//! assert_ne!(GameAction::HardDrop, GameAction::SoftDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame interval used by the terminal runner (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Drop interval at level 1
pub const BASE_DROP_MS: u32 = 800;

/// Drop interval reduction per level gained
pub const DROP_STEP_MS: u32 = 60;

/// Fastest drop interval
pub const DROP_INTERVAL_FLOOR_MS: u32 = 120;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per level for clearing N lines in one lock (index = N).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Horizontal offsets tried, in order, when a rotation is blocked.
pub const KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// Row at which new pieces enter (one row above the visible board).
pub const SPAWN_Y: i8 = -1;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Surface style of a placed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    /// Grooved brick tile
    Brick,
    /// Riveted steel plate
    Steel,
}

/// What a renderer needs to draw a block: its color and material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualTag {
    pub color: Rgb,
    pub material: Material,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(VisualTag)`: Cell holding a locked block
pub type Cell = Option<VisualTag>;

/// The seven tetromino piece kinds
///
/// Colors and materials:
/// - **I**: light blue, steel
/// - **J**: blue, brick
/// - **L**: orange, brick
/// - **O**: yellow, steel
/// - **S**: green, brick
/// - **T**: purple, steel
/// - **Z**: red, brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0x9b, 0xda, 0xf1),
            PieceKind::J => Rgb::new(0x7d, 0xa0, 0xff),
            PieceKind::L => Rgb::new(0xff, 0xb3, 0x47),
            PieceKind::O => Rgb::new(0xff, 0xd9, 0x66),
            PieceKind::S => Rgb::new(0x6b, 0xd6, 0x7a),
            PieceKind::T => Rgb::new(0xc9, 0x8c, 0xff),
            PieceKind::Z => Rgb::new(0xff, 0x6b, 0x6b),
        }
    }

    pub fn material(&self) -> Material {
        match self {
            PieceKind::I | PieceKind::O | PieceKind::T => Material::Steel,
            PieceKind::J | PieceKind::L | PieceKind::S | PieceKind::Z => Material::Brick,
        }
    }

    pub fn visual_tag(&self) -> VisualTag {
        VisualTag {
            color: self.color(),
            material: self.material(),
        }
    }
}

/// Discrete commands accepted by the engine.
///
/// Each maps 1:1 to an engine operation and is produced by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if blocked
    SoftDrop,
    /// Drop piece to the lowest legal row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Start a fresh game (accepted only after game over)
    Restart,
}

/// Notification emitted by the engine for feedback collaborators (sound).
///
/// Events carry no return channel: consumers cannot influence the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A session started (first spawn or restart)
    Started,
    /// The active piece moved horizontally
    Moved,
    /// The active piece rotated
    Rotated,
    /// The active piece fell by one row
    SoftDropStep,
    /// The active piece was merged into the board
    Locked,
    /// One lock cleared this many rows
    LinesCleared(u8),
    /// The newly spawned piece collided; the session stopped
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_constants() {
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
        assert_eq!(KICK_OFFSETS, [0, -1, 1, -2, 2]);
        assert_eq!(BASE_DROP_MS, 800);
        assert_eq!(DROP_STEP_MS, 60);
        assert_eq!(DROP_INTERVAL_FLOOR_MS, 120);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(SPAWN_Y, -1);
    }

    #[test]
    fn materials_follow_piece_kind() {
        let steel: Vec<_> = PieceKind::ALL
            .iter()
            .filter(|k| k.material() == Material::Steel)
            .copied()
            .collect();
        assert_eq!(steel, vec![PieceKind::I, PieceKind::O, PieceKind::T]);
    }

    #[test]
    fn visual_tag_matches_kind() {
        let tag = PieceKind::Z.visual_tag();
        assert_eq!(tag.color, Rgb::new(0xff, 0x6b, 0x6b));
        assert_eq!(tag.material, Material::Brick);
    }
}
