//! Game session tests - status transitions and lockout

use tui_2048::core::{Game, GridConfig, GridEngine, SimpleRng};
use tui_2048::types::{Direction, GameAction, GameStatus};

fn game(rows: &[[u8; 4]]) -> Game {
    Game::from_grid(GridEngine::from_levels(rows, SimpleRng::new(77)).unwrap())
}

#[test]
fn test_reaching_2048_wins_and_reports() {
    let mut game = game(&[[0, 0, 10, 10], [0; 4], [0; 4], [0; 4]]);
    game.apply(Direction::Right).unwrap();

    assert_eq!(game.status(), GameStatus::Won);
    let message = game.status().message(game.score()).unwrap();
    assert_eq!(message, format!("You Win! Your score: {}", game.score()));
    assert!(game.score() >= 2048 + 2);
}

#[test]
fn test_terminal_session_ignores_moves_until_restart() {
    let mut game = game(&[[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 1]]);
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(
        game.status().message(game.score()).as_deref(),
        Some("You Lose! Your score: 48")
    );

    assert_eq!(game.apply_action(GameAction::Move(Direction::Down)).unwrap(), None);
    assert_eq!(game.moves(), 0);

    game.apply_action(GameAction::Restart).unwrap();
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.status().message(game.score()), None);
}

#[test]
fn test_move_that_fills_last_gap_can_lose() {
    // Left: [1,1,..] merges to 2, the spawn fills the only gap at (3, 0).
    // Either spawn level leaves no adjacent pair.
    let mut game = game(&[[1, 1, 3, 4], [5, 6, 7, 8], [3, 4, 5, 6], [7, 8, 9, 10]]);
    let outcome = game.apply(Direction::Left).unwrap().unwrap();

    assert_eq!(outcome.merges, 1);
    let spawn = outcome.spawned.unwrap();
    assert_eq!((spawn.x, spawn.y), (3, 0));
    assert_eq!(game.grid().empty_count(), 0);
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn test_snapshot_tracks_session() {
    let mut game = Game::new(GridConfig::default(), 4242).unwrap();
    let mut snap = game.snapshot();
    assert_eq!(snap.size, 4);
    assert_eq!(snap.levels.iter().filter(|&&l| l != 0).count(), 2);

    for dir in Direction::ALL {
        game.apply(dir).unwrap();
    }
    game.snapshot_into(&mut snap);
    assert_eq!(snap.score, game.score());
    assert_eq!(snap.status, game.status());
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(snap.level(x, y), game.grid().level(x, y));
        }
    }
}
