use summax::core::{Board, GameConfig, GameState};
use summax::term::{AnchorY, FrameBuffer, GameView, GlyphMode, Palette, Viewport};
use summax::types::{Count, Direction};

fn state() -> GameState {
    GameState::from_board(Board::from_rows(&[[1u8, 2, 3], [4, 0, 6]]).unwrap())
}

fn top_view() -> GameView {
    GameView::default().with_anchor_y(AnchorY::Top)
}

fn vp() -> Viewport {
    Viewport::new(40, 30)
}

fn any_row_contains(fb: &FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
}

#[test]
fn term_view_renders_rounded_border() {
    let view = top_view();
    let layout = view.layout(2, 3, vp());
    let fb = view.render(&state(), vp());

    // 3 columns, two chars each, plus padding and border
    assert_eq!(layout.frame_w, 9);
    assert_eq!(layout.frame_h, 4);

    let (x0, y0) = (layout.frame_x, layout.frame_y);
    let (x1, y1) = (x0 + layout.frame_w - 1, y0 + layout.frame_h - 1);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '╭');
    assert_eq!(fb.get(x1, y0).unwrap().ch, '╮');
    assert_eq!(fb.get(x0, y1).unwrap().ch, '╰');
    assert_eq!(fb.get(x1, y1).unwrap().ch, '╯');
}

#[test]
fn term_view_draws_digits_and_blank_cleared_cells() {
    let view = top_view();
    let layout = view.layout(2, 3, vp());
    let fb = view.render(&state(), vp());

    let (x, y) = layout.cell_xy(0, 2);
    assert_eq!(fb.get(x, y).unwrap().ch, '3');
    assert_eq!(fb.get(x, y).unwrap().style, Palette::default().digit(3));

    let (x, y) = layout.cell_xy(1, 1);
    assert_eq!(fb.get(x, y).unwrap().ch, ' ');
}

#[test]
fn term_view_marks_cursor_and_selection() {
    let palette = Palette::default();
    let view = top_view();
    let layout = view.layout(2, 3, vp());

    let mut game = state();
    game.begin_selection();
    game.move_cursor(Direction::Right, Count::ONE);
    let fb = view.render(&game, vp());

    let (ax, ay) = layout.cell_xy(0, 0);
    assert_eq!(fb.get(ax, ay).unwrap().style, palette.selected);

    let (cx, cy) = layout.cell_xy(0, 1);
    assert_eq!(fb.get(cx, cy).unwrap().style, palette.cursor);
    // The gap between two selected cells is highlighted too
    assert_eq!(fb.get(cx - 1, cy).unwrap().style, palette.selected);

    // Live sum of the selection
    assert!(any_row_contains(&fb, "sum: 3"));
}

#[test]
fn term_view_rulers_show_distance_from_cursor() {
    let view = top_view();
    let layout = view.layout(2, 3, vp());
    let fb = view.render(&state(), vp());

    let (x1, _) = layout.cell_xy(0, 1);
    let (x2, _) = layout.cell_xy(0, 2);
    assert_eq!(fb.get(x1, layout.ruler_y).unwrap().ch, '1');
    assert_eq!(fb.get(x2, layout.ruler_y).unwrap().ch, '2');

    let (_, y1) = layout.cell_xy(1, 0);
    assert_eq!(fb.get(layout.ruler_x, y1).unwrap().ch, '1');
}

#[test]
fn term_view_panel_shows_score_and_motion() {
    let view = top_view();
    let mut game = state();
    game.apply_action(summax::types::GameAction::SetCount(Count::from_digit(2).unwrap()));
    game.apply_action(summax::types::GameAction::Move(Direction::Right));
    let fb = view.render(&game, vp());

    assert!(any_row_contains(&fb, "SummaX"));
    assert!(any_row_contains(&fb, "score: 0"));
    assert!(any_row_contains(&fb, "motion: 2l"));
    assert!(any_row_contains(&fb, "count: 1"));
}

#[test]
fn term_view_braille_glyphs() {
    let view = GameView::new(GlyphMode::Braille).with_anchor_y(AnchorY::Top);
    let layout = view.layout(2, 3, vp());
    let fb = view.render(&state(), vp());

    let (x, y) = layout.cell_xy(1, 2);
    assert_eq!(fb.get(x, y).unwrap().ch, '⠆');
}

#[test]
fn term_view_debug_panel_shows_mask() {
    let view = top_view().with_debug_panel(true);
    let mut game = state();
    game.begin_selection();
    let fb = view.render(&game, vp());

    assert!(any_row_contains(&fb, "cursor: (0, 0)"));
    assert!(any_row_contains(&fb, "1 0 0"));
    assert!(any_row_contains(&fb, "0 0 0"));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let fb = GameView::default().render(&state(), Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}

#[test]
fn term_view_clips_boards_wider_than_the_layout() {
    let game = GameState::new(&GameConfig::new(1, 40000).with_seed(1)).unwrap();
    let view = top_view();
    let layout = view.layout(game.rows(), game.cols(), Viewport::new(80, 24));
    assert_eq!(layout.frame_w, u16::MAX);

    let fb = view.render(&game, Viewport::new(80, 24));
    assert_eq!(fb.get(layout.frame_x, layout.frame_y).unwrap().ch, '╭');
    assert_eq!(fb.get(79, layout.frame_y).unwrap().ch, '─');
}

#[test]
fn term_view_clips_boards_taller_than_the_layout() {
    let game = GameState::new(&GameConfig::new(40000, 1).with_seed(1)).unwrap();
    let fb = GameView::default()
        .with_debug_panel(true)
        .render(&game, Viewport::new(80, 24));
    assert_eq!((fb.width(), fb.height()), (80, 24));
}
