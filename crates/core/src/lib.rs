//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 grid rules and session state. It has
//! **zero dependencies** on rendering or input, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is covered without a terminal
//! - **Portable**: Can run behind any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`cell`]: A grid slot with its level and change notifications
//! - [`grid`]: The N×N engine: spawn, slide/merge, score, win/lose
//! - [`traversal`]: Scan order for a move pass
//! - [`game`]: Session wrapper that stops accepting moves once won or lost
//! - [`rng`]: Seedable generator used for spawning
//! - [`snapshot`]: Read-only grid copy for renderers
//!
//! # Game Rules
//!
//! - **Spawn**: a uniformly chosen empty cell gets level 1 (90%) or level 2 (10%)
//! - **Move**: tiles slide as far as possible; equal neighbours merge once per pass
//! - **Score**: sum of `2^level` over all non-empty cells, recomputed after each move
//! - **Win**: any cell reaches level 11 (2048)
//! - **Lose**: grid full and no adjacent equal pair
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Game, GridConfig};
//! use tui_2048_types::{Direction, GameStatus};
//!
//! let mut game = Game::new(GridConfig::default(), 12345).unwrap();
//! assert_eq!(game.grid().empty_count(), 14);
//!
//! for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     game.apply(dir).unwrap();
//! }
//!
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert!(game.score() > 0);
//! ```

pub mod cell;
pub mod error;
pub mod game;
pub mod grid;
pub mod rng;
pub mod snapshot;
pub mod traversal;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use cell::{Cell, CellEvent, CellEvents};
pub use error::GridError;
pub use game::Game;
pub use grid::{CellChange, GridConfig, GridEngine, MoveOutcome, Spawn};
pub use rng::SimpleRng;
pub use snapshot::GridSnapshot;
pub use traversal::Traversal;
