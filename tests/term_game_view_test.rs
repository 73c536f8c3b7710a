use tui_bricks::core::{Board, GameSnapshot, GameState, PieceRng};
use tui_bricks::term::{AnchorY, FrameBuffer, GameView, Viewport};
use tui_bricks::types::{PieceKind, VisualTag};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn started(kinds: &[PieceKind]) -> GameState {
    let mut gs = GameState::with_rng(PieceRng::scripted(kinds));
    gs.start();
    gs
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 10*2 by 20*1 board pixels plus border => 22x22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_materials_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[19][0] = Some(PieceKind::I.visual_tag());
    snap.board[19][1] = Some(PieceKind::S.visual_tag());

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside the border the origin is (1,1).
    let y = 1 + 19;
    let steel = fb.get(1, y).unwrap();
    assert_eq!(steel.ch, '█');
    assert_eq!(fb.get(2, y).unwrap().ch, '█');
    assert!(steel.style.bold);
    assert_eq!(steel.style.fg, PieceKind::I.color());

    let brick = fb.get(3, y).unwrap();
    assert_eq!(brick.ch, '▓');
    assert_eq!(fb.get(4, y).unwrap().ch, '▓');
    assert!(!brick.style.bold);
}

#[test]
fn term_view_draws_empty_cells_as_dim_dots() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let cell = fb.get(1, 1).unwrap();
    assert_eq!(cell.ch, '·');
    assert!(cell.style.dim);
    assert_eq!(fb.get(2, 1).unwrap().ch, ' ');
}

#[test]
fn term_view_skips_active_blocks_above_board() {
    let gs = started(&[PieceKind::O]);
    let snap = gs.snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // O at (4,-1): its top row is hidden, its bottom row is board row 0.
    let tag: VisualTag = PieceKind::O.visual_tag();
    for px in 9..13 {
        assert_eq!(fb.get(px, 0).unwrap().ch, '─');
        let cell = fb.get(px, 1).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, tag.color);
    }
    assert_eq!(fb.get(9, 2).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let gs = started(&[PieceKind::T, PieceKind::I]);
    let mut snap = gs.snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;
    snap.drop_interval_ms = 740;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = screen_text(&fb);

    for label in ["SCORE", "LINES", "LEVEL", "SPEED", "NEXT"] {
        assert!(all.contains(label), "missing {}", label);
    }
    assert!(all.contains("1234"));
    assert!(all.contains("740ms"));
    // NEXT preview shows the I bar as four steel blocks (two columns each).
    assert!(all.contains("████████"));
}

#[test]
fn term_view_hides_panel_on_narrow_viewports() {
    let snap = started(&[PieceKind::T]).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_game_over_overlay_with_restart_hint() {
    let mut board = Board::new();
    board.set(4, 0, Some(PieceKind::J.visual_tag()));
    let mut gs = GameState::with_board(board, PieceRng::scripted(&[PieceKind::O]));
    gs.start();
    assert!(gs.is_game_over());

    let fb = GameView::default().render(&gs.snapshot(), Viewport::new(60, 24));
    let all = screen_text(&fb);
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("restart"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(22, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_render_into_reuses_framebuffer() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::new(1, 1);
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(12, 22), &mut fb);
    assert_eq!((fb.width(), fb.height()), (12, 22));
    assert_eq!(fb.get(11, 21).unwrap().ch, '┘');
}
