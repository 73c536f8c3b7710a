//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Shape};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Material, VisualTag, BOARD_HEIGHT, BOARD_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(24, 24, 32);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Minimum width the side panel needs before it is drawn at all.
const MIN_PANEL_WIDTH: u16 = 12;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the playfield frame landed in the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// Renders the playfield, HUD and overlays.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    /// Zero sizes are raised to 1.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn cell_size(&self) -> (u16, u16) {
        (self.cell_w, self.cell_h)
    }

    /// Position of the bordered playfield inside `viewport`.
    pub fn frame_rect(&self, viewport: Viewport) -> FrameRect {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        // Leave room for the side panel to the right of the frame.
        let total_w = w + 2 + MIN_PANEL_WIDTH;
        let x = viewport.width.saturating_sub(total_w) / 2;
        FrameRect { x, y, w, h }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::new(SCREEN_BG, SCREEN_BG)));

        let frame = self.frame_rect(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        self.draw_border(fb, frame, border);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match cell {
                    Some(tag) => self.draw_block(fb, frame, x, y, *tag),
                    None => self.draw_empty(fb, frame, x, y),
                }
            }
        }

        // Blocks still above the board are not drawn.
        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    self.draw_block(fb, frame, x as u16, y as u16, active.tag);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_overlay(fb, frame, &["GAME OVER", "Enter: restart"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: FrameRect, style: CellStyle) {
        let FrameRect { x, y, w, h } = frame;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, frame: FrameRect, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(70, 70, 84), PLAYFIELD_BG).dim();
        let (px, py) = self.cell_origin(frame, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: FrameRect, x: u16, y: u16, tag: VisualTag) {
        let (px, py) = self.cell_origin(frame, x, y);
        let (ch, style) = block_glyph(tag);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn cell_origin(&self, frame: FrameRect, x: u16, y: u16) -> (u16, u16) {
        (
            frame.x + 1 + x * self.cell_w,
            frame.y + 1 + y * self.cell_h,
        )
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: FrameRect,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_WIDTH {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("LEVEL", snap.level),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "SPEED", label);
        let end = fb.put_u32(panel_x, y + 1, snap.drop_interval_ms, value);
        fb.put_str(end, y + 1, "ms", value.dim());
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, &snap.next.shape, snap.next.tag);
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape, tag: VisualTag) {
        let (ch, style) = block_glyph(tag);
        for (dx, dy) in shape.blocks() {
            let px = x + dx as u16 * self.cell_w;
            fb.fill_rect(px, y + dy as u16, self.cell_w, 1, ch, style);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: FrameRect, lines: &[&str]) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let mid_y = frame.y + frame.h / 2;
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = frame.x + frame.w.saturating_sub(text_w) / 2;
            let line_style = if i == 0 { style } else { CellStyle { bold: false, ..style } };
            fb.put_str(x, mid_y + i as u16, text, line_style);
        }
    }
}

/// Glyph and style for a filled cell: bricks are shaded, steel is solid and bold.
pub fn block_glyph(tag: VisualTag) -> (char, CellStyle) {
    let style = CellStyle::new(tag.color, PLAYFIELD_BG);
    match tag.material {
        Material::Brick => ('▓', style),
        Material::Steel => ('█', style.bold()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn materials_use_distinct_glyphs() {
        let (brick, brick_style) = block_glyph(PieceKind::Z.visual_tag());
        let (steel, steel_style) = block_glyph(PieceKind::I.visual_tag());
        assert_eq!(brick, '▓');
        assert!(!brick_style.bold);
        assert_eq!(steel, '█');
        assert!(steel_style.bold);
        assert_eq!(steel_style.fg, PieceKind::I.color());
    }

    #[test]
    fn zero_cell_size_is_raised() {
        assert_eq!(GameView::new(0, 0).cell_size(), (1, 1));
    }

    #[test]
    fn frame_fits_board() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let rect = view.frame_rect(Viewport::new(80, 24));
        assert_eq!((rect.w, rect.h), (22, 22));
        assert_eq!(rect.y, 0);
    }
}
