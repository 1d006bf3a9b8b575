use criterion::{black_box, criterion_group, criterion_main, Criterion};
use summax::core::motion::word_right;
use summax::core::{evaluate, Board, BoardRng, GameConfig, GameState, Selection};
use summax::term::{FrameBuffer, GameView, Viewport};
use summax::types::{Count, Direction, GameAction, Position};

fn bench_mask_recompute(c: &mut Criterion) {
    let mut sel = Selection::new(9, 16);
    sel.begin(Position::new(4, 8));
    let corners = [Position::new(0, 0), Position::new(8, 15)];

    c.bench_function("mask_recompute_9x16", |b| {
        let mut i = 0;
        b.iter(|| {
            i ^= 1;
            sel.recompute(black_box(corners[i]));
        })
    });
}

fn bench_motion(c: &mut Criterion) {
    let mut state = GameState::new(&GameConfig::default().with_seed(12345)).unwrap();
    let nine = Count::from_digit(9).unwrap();
    state.begin_selection();

    c.bench_function("move_cursor_with_selection", |b| {
        b.iter(|| {
            state.move_cursor(black_box(Direction::Right), nine);
            state.move_cursor(black_box(Direction::Left), nine);
        })
    });

    let mut rng = BoardRng::new(7);
    let board = Board::generate(9, 16, &mut rng).unwrap();
    c.bench_function("word_right_x9", |b| {
        b.iter(|| word_right(&board, black_box(Position::new(0, 0)), nine))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let mut rng = BoardRng::new(99);
    let board = Board::generate(9, 16, &mut rng).unwrap();
    let mut sel = Selection::new(9, 16);
    sel.begin(Position::new(0, 0));
    sel.recompute(Position::new(8, 15));

    c.bench_function("evaluate_full_board", |b| {
        b.iter(|| {
            let mut board = board.clone();
            evaluate(&mut board, black_box(sel.mask()))
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(&GameConfig::default().with_seed(1)).unwrap();
    state.apply_action(GameAction::ToggleSelection);
    state.apply_action(GameAction::Move(Direction::Down));
    let view = GameView::default();
    let vp = Viewport::new(80, 40);
    let mut fb = FrameBuffer::new(80, 40);

    c.bench_function("render_into_80x40", |b| {
        b.iter(|| view.render_into(black_box(&state), vp, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_mask_recompute,
    bench_motion,
    bench_evaluate,
    bench_render
);
criterion_main!(benches);
