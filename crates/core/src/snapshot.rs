use crate::pieces::{Piece, Shape};
use crate::types::{Cell, PieceKind, VisualTag, BOARD_HEIGHT, BOARD_WIDTH};

pub const BOARD_COLS: usize = BOARD_WIDTH as usize;
pub const BOARD_ROWS: usize = BOARD_HEIGHT as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub tag: VisualTag,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute board coordinates of every filled block.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .blocks()
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            tag: value.tag,
            x: value.x,
            y: value.y,
        }
    }
}

/// The upcoming piece as shown in the preview panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub tag: VisualTag,
}

impl From<Piece> for PreviewSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            tag: value.tag,
        }
    }
}

impl Default for PreviewSnapshot {
    fn default() -> Self {
        Self::from(Piece::new(PieceKind::I))
    }
}

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_COLS]; BOARD_ROWS],
    pub active: Option<ActiveSnapshot>,
    pub next: PreviewSnapshot,
    pub running: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.running && !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_COLS]; BOARD_ROWS],
            active: None,
            next: PreviewSnapshot::default(),
            running: false,
            game_over: false,
            episode_id: 0,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: crate::types::BASE_DROP_MS,
        }
    }
}
