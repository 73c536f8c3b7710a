//! Pieces module - tetromino shape matrices, rotation and wall kicks
//!
//! Shapes are small square boolean matrices (2×2 for O, 3×3 for J/L/S/T/Z,
//! 4×4 for I). Rotation builds a new matrix; nothing is ever rotated in place.
//! Kicks are a fixed horizontal list, not the SRS table.

use crate::types::{PieceKind, VisualTag, BOARD_WIDTH, KICK_OFFSETS};

/// Largest matrix edge of any shape.
pub const MAX_SHAPE_SIZE: usize = 4;

/// Offset of a single block relative to the piece origin, as (column, row).
pub type BlockOffset = (i8, i8);

/// Immutable shape matrix of up to 4×4 cells.
///
/// `Shape` is `Copy`: the active and preview pieces each own their matrix, so
/// they cannot alias one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    const fn square(size: u8, bits: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < MAX_SHAPE_SIZE {
            let mut c = 0;
            while c < MAX_SHAPE_SIZE {
                cells[r][c] = bits[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: size,
            cols: size,
            cells,
        }
    }

    /// Build a shape from rows of booleans.
    ///
    /// Returns `None` for an empty matrix, ragged rows, or anything larger
    /// than 4×4.
    pub fn from_rows(rows: &[&[bool]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height == 0 || width == 0 || height > MAX_SHAPE_SIZE || width > MAX_SHAPE_SIZE {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            cells[r][..width].copy_from_slice(row);
        }
        Some(Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        })
    }

    /// Number of columns in the matrix (including empty ones).
    pub fn width(&self) -> u8 {
        self.cols
    }

    /// Number of rows in the matrix (including empty ones).
    pub fn height(&self) -> u8 {
        self.rows
    }

    /// Whether the cell at (row, col) is filled. Out-of-matrix reads are empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Filled cells as (column, row) offsets, row-major order.
    pub fn blocks(&self) -> impl Iterator<Item = BlockOffset> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Rows of the matrix, for display and tests.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows as usize)
            .map(|r| self.cells[r][..self.cols as usize].to_vec())
            .collect()
    }

    /// Clockwise rotation. See [`rotate_cw`].
    pub fn rotated_cw(&self) -> Self {
        rotate_cw(self)
    }
}

const I_SHAPE: Shape = Shape::square(
    4,
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const J_SHAPE: Shape = Shape::square(
    3,
    [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const L_SHAPE: Shape = Shape::square(
    3,
    [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const O_SHAPE: Shape = Shape::square(
    2,
    [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const S_SHAPE: Shape = Shape::square(
    3,
    [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const T_SHAPE: Shape = Shape::square(
    3,
    [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const Z_SHAPE: Shape = Shape::square(
    3,
    [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

/// Canonical (spawn orientation) shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Rotate a matrix 90° clockwise: `out[c][rows - 1 - r] = in[r][c]`.
///
/// An R×C matrix becomes C×R. Board legality is not checked here.
pub fn rotate_cw(shape: &Shape) -> Shape {
    let rows = shape.rows as usize;
    let cols = shape.cols as usize;
    let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
    for r in 0..rows {
        for c in 0..cols {
            cells[c][rows - 1 - r] = shape.cells[r][c];
        }
    }
    Shape {
        rows: shape.cols,
        cols: shape.rows,
        cells,
    }
}

/// Leftmost and rightmost legal origin column for a shape of this width.
pub fn column_range(width: u8) -> (i8, i8) {
    (0, BOARD_WIDTH as i8 - width as i8)
}

/// Clamp an origin column so the whole matrix stays on the board.
pub fn clamp_x(x: i8, width: u8) -> i8 {
    let (min_x, max_x) = column_range(width);
    x.max(min_x).min(max_x)
}

/// Try to rotate a shape clockwise with horizontal wall kicks
///
/// Offsets from [`KICK_OFFSETS`] are tried in order. Each target column is
/// clamped onto the board first, then tested at the unchanged `y`.
/// Returns `Some((rotated_shape, new_x))` for the first candidate that does not
/// collide, `None` if every candidate is blocked.
pub fn try_rotate(
    shape: &Shape,
    x: i8,
    y: i8,
    mut collides: impl FnMut(&Shape, i8, i8) -> bool,
) -> Option<(Shape, i8)> {
    let rotated = rotate_cw(shape);

    for &dx in KICK_OFFSETS.iter() {
        let target_x = clamp_x(x.saturating_add(dx), rotated.width());
        if !collides(&rotated, target_x, y) {
            return Some((rotated, target_x));
        }
    }

    None
}

/// A piece: kind, current orientation, visual tag and board position.
///
/// `(x, y)` is the board position of the matrix's top-left cell. `y` may be
/// negative while the piece is entering from above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub tag: VisualTag,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A piece in canonical orientation at the origin.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            tag: kind.visual_tag(),
            x: 0,
            y: 0,
        }
    }

    /// Column that centers this piece's matrix on the board.
    pub fn centered_x(&self) -> i8 {
        (BOARD_WIDTH as i8 - self.shape.width() as i8) / 2
    }

    /// Absolute board coordinates of every filled block.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .blocks()
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}
