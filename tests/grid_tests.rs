//! Grid engine tests - rules, scenarios and invariants

use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_2048::core::{
    Cell, CellChange, CellEvent, GridConfig, GridEngine, GridError, MoveOutcome, SimpleRng,
};
use tui_2048::types::{Direction, MAX_LEVEL};

fn grid(rows: &[[u8; 4]]) -> GridEngine {
    GridEngine::from_levels(rows, SimpleRng::new(2048)).unwrap()
}

fn levels(grid: &GridEngine) -> Vec<u8> {
    grid.cells().iter().map(Cell::level).collect()
}

/// Every cell matches `expected` except the spawned one, which must have been
/// empty in `expected` and now hold level 1 or 2.
fn assert_after_move(grid: &GridEngine, outcome: &MoveOutcome, expected: &[[u8; 4]; 4]) {
    let spawn = outcome.spawned.expect("a successful move spawns a cell");
    assert_eq!(expected[spawn.y][spawn.x], 0, "spawned into an occupied cell");
    assert!(spawn.level == 1 || spawn.level == 2);

    for (y, row) in expected.iter().enumerate() {
        for (x, &want) in row.iter().enumerate() {
            let got = grid.level(x, y).unwrap();
            if (x, y) == (spawn.x, spawn.y) {
                assert_eq!(got, spawn.level);
            } else {
                assert_eq!(got, want, "cell ({}, {})", x, y);
            }
        }
    }
}

fn score_of<R: rand::Rng>(grid: &GridEngine<R>) -> u64 {
    grid.cells().iter().map(Cell::points).sum()
}

#[test]
fn test_pair_merges_toward_far_edge() {
    let mut g = grid(&[[1, 1, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let outcome = g.move_cells(Direction::Right).unwrap();

    assert!(outcome.moved);
    assert_eq!(outcome.merges, 1);
    assert_after_move(&g, &outcome, &[[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
}

#[test]
fn test_slide_then_merge() {
    let mut g = grid(&[[1, 0, 1, 0], [0; 4], [0; 4], [0; 4]]);
    let outcome = g.move_cells(Direction::Left).unwrap();
    assert_after_move(&g, &outcome, &[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
}

#[test]
fn test_three_in_a_row_merges_one_pair() {
    let mut g = grid(&[[1, 1, 1, 0], [0; 4], [0; 4], [0; 4]]);
    let outcome = g.move_cells(Direction::Left).unwrap();

    assert_eq!(outcome.merges, 1);
    assert_after_move(&g, &outcome, &[[2, 1, 0, 0], [0; 4], [0; 4], [0; 4]]);
}

#[test]
fn test_four_equal_merge_into_two_pairs() {
    let mut g = grid(&[[3, 3, 3, 3], [0; 4], [0; 4], [0; 4]]);
    let outcome = g.move_cells(Direction::Right).unwrap();

    assert_eq!(outcome.merges, 2);
    assert_after_move(&g, &outcome, &[[0, 0, 4, 4], [0; 4], [0; 4], [0; 4]]);
}

#[test]
fn test_vertical_moves_follow_rows() {
    // Up moves toward row 0.
    let mut g = grid(&[[0; 4], [2, 0, 0, 0], [0; 4], [2, 0, 0, 1]]);
    let outcome = g.move_cells(Direction::Up).unwrap();
    assert_after_move(&g, &outcome, &[[3, 0, 0, 1], [0; 4], [0; 4], [0; 4]]);

    let mut g = grid(&[[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let outcome = g.move_cells(Direction::Down).unwrap();
    assert_after_move(&g, &outcome, &[[0; 4], [0; 4], [0; 4], [1, 0, 0, 0]]);
}

#[test]
fn test_merged_tile_can_merge_on_next_move() {
    let mut g = grid(&[[1, 1, 2, 0], [0; 4], [0; 4], [0; 4]]);
    let first = g.move_cells(Direction::Left).unwrap();
    assert_eq!(first.merges, 1);
    assert_eq!((g.level(0, 0), g.level(1, 0)), (Some(2), Some(2)));

    // The spawn may land in row 0, but never at x=0 or x=1.
    let second = g.move_cells(Direction::Left).unwrap();
    assert!(second.merges >= 1);
    assert_eq!(g.level(0, 0), Some(3));
}

#[test]
fn test_slide_reports_both_slots() {
    let mut g = grid(&[[0, 0, 4, 0], [0; 4], [0; 4], [0; 4]]);
    let outcome = g.move_cells(Direction::Left).unwrap();
    let spawn = outcome.spawned.unwrap();

    let changes = g.changes();
    assert_eq!(
        changes[..2],
        [
            CellChange {
                x: 0,
                y: 0,
                event: CellEvent::ValueChanged { level: 4 }
            },
            CellChange {
                x: 2,
                y: 0,
                event: CellEvent::ValueChanged { level: 0 }
            },
        ]
    );
    assert_eq!(
        changes[2..],
        [CellChange {
            x: spawn.x,
            y: spawn.y,
            event: CellEvent::ValueChanged { level: spawn.level }
        }]
    );
    // Cells stay in their slots; only levels move.
    assert!(g
        .cells()
        .iter()
        .enumerate()
        .all(|(i, c)| (c.x(), c.y()) == (i % 4, i / 4)));
}

#[test]
fn test_noop_move_leaves_grid_identical() {
    let rows = [[1, 2, 3, 4], [2, 0, 0, 0], [3, 0, 0, 0], [4, 0, 0, 0]];
    for dir in [Direction::Left, Direction::Up] {
        let mut g = grid(&rows);
        let before = levels(&g);
        let score = g.score();

        let outcome = g.move_cells(dir).unwrap();

        assert!(!outcome.moved);
        assert_eq!(outcome.spawned, None);
        assert_eq!(levels(&g), before);
        assert_eq!(g.score(), score);
    }
}

#[test]
fn test_score_matches_points_during_play() {
    let mut g = GridEngine::new(GridConfig::default(), StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(g.score(), score_of(&g));

    for i in 0..400 {
        let dir = Direction::ALL[i % 4];
        g.move_cells(dir).unwrap();
        assert_eq!(g.score(), score_of(&g));
        if g.check_lose() {
            break;
        }
    }
}

#[test]
fn test_spawn_only_into_empty_cells() {
    let mut g = GridEngine::with_seed(GridConfig::new(4, 0), 99).unwrap();
    for _ in 0..16 {
        let before = levels(&g);
        let spawn = g.spawn_random_cell().unwrap();
        assert_eq!(before[spawn.y * 4 + spawn.x], 0);
        assert!(spawn.level == 1 || spawn.level == 2);
    }
    assert_eq!(g.empty_count(), 0);
    assert_eq!(g.spawn_random_cell(), Err(GridError::OutOfSpace));
}

#[test]
fn test_spawn_distribution() {
    let mut g = GridEngine::from_levels(&[[0u8; 4]; 4], StdRng::seed_from_u64(42)).unwrap();
    let trials = 4000;
    let mut high = 0;
    let mut hits = [0u32; 16];

    for _ in 0..trials {
        let spawn = g.spawn_random_cell().unwrap();
        if spawn.level == 2 {
            high += 1;
        }
        hits[spawn.y * 4 + spawn.x] += 1;
        g.set_level(spawn.x, spawn.y, 0);
    }

    let ratio = high as f64 / trials as f64;
    assert!((0.06..0.14).contains(&ratio), "level-2 ratio {}", ratio);
    assert!(hits.iter().all(|&n| n > 0));
}

#[test]
fn test_check_win_is_idempotent() {
    let g = grid(&[[0, 0, 0, 0], [0, MAX_LEVEL, 0, 0], [1, 2, 3, 4], [0; 4]]);
    let before = levels(&g);
    assert!(g.check_win());
    assert!(g.check_win());
    assert_eq!(levels(&g), before);

    let g = grid(&[[10, 10, 10, 10], [0; 4], [0; 4], [0; 4]]);
    assert!(!g.check_win());
}

#[test]
fn test_check_lose_requires_full_grid_without_pairs() {
    let lost = [[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 1]];
    assert!(grid(&lost).check_lose());

    let mut open = lost;
    open[3][3] = 0;
    assert!(!grid(&open).check_lose());

    // Horizontal pair in the last row.
    let mut pair = lost;
    pair[3][3] = 2;
    assert!(!grid(&pair).check_lose());

    // Vertical pair in the last column.
    let mut pair = lost;
    pair[2][3] = 1;
    assert!(!grid(&pair).check_lose());
}

#[test]
fn test_lost_grid_accepts_no_move() {
    let lost = [[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 1]];
    let mut g = grid(&lost);
    for dir in Direction::ALL {
        assert!(!g.move_cells(dir).unwrap().moved);
    }
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut g = GridEngine::with_seed(GridConfig::default(), seed).unwrap();
        for i in 0..50 {
            g.move_cells(Direction::ALL[(i * 3) % 4]).unwrap();
        }
        levels(&g)
    };
    assert_eq!(play(31337), play(31337));
}

#[test]
fn test_non_default_sizes() {
    let g = GridEngine::with_seed(GridConfig::new(1, 1), 3).unwrap();
    assert_eq!(g.empty_count(), 0);
    assert!(g.check_lose());

    let mut g = GridEngine::with_seed(GridConfig::new(6, 5), 3).unwrap();
    assert_eq!(g.empty_count(), 31);
    g.move_cells(Direction::Down).unwrap();
    assert_eq!(g.score(), score_of(&g));
}

#[test]
fn test_invalid_configs() {
    assert_eq!(
        GridEngine::with_seed(GridConfig::new(3, 10), 1).unwrap_err(),
        GridError::TooManyInitialCells {
            requested: 10,
            capacity: 9
        }
    );
    assert_eq!(
        GridEngine::with_seed(GridConfig::new(0, 2), 1).unwrap_err(),
        GridError::ZeroSize
    );
}
