//! Terminal view tests - what reaches the framebuffer

use tui_2048::core::{Game, GridEngine, SimpleRng};
use tui_2048::term::{
    encode_diff_into, encode_full_into, level_color, FrameBuffer, GridView, Viewport,
};

fn rows_text(fb: &FrameBuffer) -> Vec<String> {
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

#[test]
fn test_view_shows_labels_and_score() {
    let grid = GridEngine::from_levels(
        &[[1u8, 2, 0, 0], [0; 4], [0; 4], [0, 0, 0, 10]],
        SimpleRng::new(1),
    )
    .unwrap();
    let game = Game::from_grid(grid);
    let fb = GridView::default().render(&game.snapshot(), Viewport::new(60, 24));
    let text = rows_text(&fb).join("\n");

    assert!(text.contains("Score: 1030"));
    assert!(text.contains("1024"));
    assert!(text.contains(" 4 "));
    assert!(!text.contains("You "));
}

#[test]
fn test_lost_game_draws_overlay() {
    let grid = GridEngine::from_levels(
        &[[1u8, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 1]],
        SimpleRng::new(1),
    )
    .unwrap();
    let game = Game::from_grid(grid);
    let fb = GridView::default().render(&game.snapshot(), Viewport::new(60, 24));
    assert!(rows_text(&fb)
        .iter()
        .any(|row| row.contains("You Lose! Your score: 48")));
}

#[test]
fn test_tiles_use_level_colours() {
    let grid = GridEngine::from_levels(&[[0u8, 5], [0, 0]], SimpleRng::new(1)).unwrap();
    let view = GridView::new(3, 1);
    let fb = view.render(&Game::from_grid(grid).snapshot(), Viewport::new(9, 7));

    // 2x2 board of 3x1 tiles is 9x5, so the score line sits at row 0.
    let (w, h) = view.board_extent(2);
    assert_eq!((w, h), (9, 5));
    assert_eq!(fb.get(1, 3).unwrap().style.bg, level_color(0));
    assert_eq!(fb.get(5, 3).unwrap().style.bg, level_color(5));
    assert_eq!(fb.row_text(3), "     32  ");
}

#[test]
fn test_unchanged_frame_encodes_nothing() {
    let game = Game::new(Default::default(), 9).unwrap();
    let view = GridView::default();
    let a = view.render(&game.snapshot(), Viewport::new(40, 20));
    let b = a.clone();

    let mut full = Vec::new();
    encode_full_into(&a, &mut full).unwrap();
    assert!(!full.is_empty());

    let mut diff = Vec::new();
    encode_diff_into(&a, &b, &mut diff).unwrap();
    assert!(diff.is_empty());
}
