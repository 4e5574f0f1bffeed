//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! The grid is square with side `N`. Cells are addressed as `(x, y)` where
//! `x` grows left to right and `y` grows top to bottom, both in `0..N`.
//! [`Direction::Up`] therefore moves tiles toward row `0`.
//!
//! # Levels
//!
//! A cell stores a *level* rather than a face value:
//!
//! | Level | Displayed value |
//! |-------|-----------------|
//! | 0 | empty |
//! | 1 | 2 |
//! | 2 | 4 |
//! | 11 | 2048 (win) |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, MAX_LEVEL};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir.delta(), (-1, 0));
//!
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(MAX_LEVEL, 11);
//! ```

/// Level at which the game is won (2^11 = 2048).
pub const MAX_LEVEL: u8 = 11;

/// Highest level a cell can hold (2^32). Higher inputs are clamped, and two
/// tiles at this level merge into one tile at this level.
pub const LEVEL_CAP: u8 = 32;

/// Default grid side length.
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Default number of cells filled when a grid is (re)initialised.
pub const DEFAULT_INITIAL_CELLS: usize = 2;

/// Level assigned to most spawned cells (value 2).
pub const SPAWN_LOW_LEVEL: u8 = 1;

/// Level assigned to the rare spawned cell (value 4).
pub const SPAWN_HIGH_LEVEL: u8 = 2;

/// Odds of a spawn using [`SPAWN_HIGH_LEVEL`]: 1 in 10.
pub const SPAWN_HIGH_LEVEL_ODDS: (u32, u32) = (1, 10);

/// Minimum drag length, in terminal cells, for a mouse swipe to count as a move.
pub const SWIPE_THRESHOLD: f32 = 3.0;

/// Displayed value of a level: 0 when empty, otherwise 2^level.
///
/// ```
/// use tui_2048_types::level_points;
///
/// assert_eq!(level_points(0), 0);
/// assert_eq!(level_points(1), 2);
/// assert_eq!(level_points(11), 2048);
/// assert_eq!(level_points(200), u64::MAX);
/// ```
#[inline]
pub fn level_points(level: u8) -> u64 {
    match level {
        0 => 0,
        1..=63 => 1u64 << level,
        _ => u64::MAX,
    }
}

/// The four move directions.
///
/// Each direction is a unit vector with exactly one non-zero axis component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0
    Up,
    /// Toward row N-1
    Down,
    /// Toward column 0
    Left,
    /// Toward column N-1
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)` for this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Actions a driver can apply to a game session.
///
/// Keyboard, swipe and scripted drivers all produce these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide and merge every tile in a direction
    Move(Direction),
    /// Clear the grid and start over
    Restart,
}

impl GameAction {
    /// Parse action from camelCase string
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Restart => "restart",
        }
    }
}

/// Session state derived from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    /// Some cell reached [`MAX_LEVEL`]
    Won,
    /// Grid is full and no adjacent pair can merge
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    /// Status line for a status display; `None` while playing.
    ///
    /// ```
    /// use tui_2048_types::GameStatus;
    ///
    /// assert_eq!(GameStatus::Playing.message(10), None);
    /// assert_eq!(GameStatus::Won.message(2060).as_deref(), Some("You Win! Your score: 2060"));
    /// assert_eq!(GameStatus::Lost.message(8).as_deref(), Some("You Lose! Your score: 8"));
    /// ```
    pub fn message(&self, score: u64) -> Option<String> {
        match self {
            GameStatus::Playing => None,
            GameStatus::Won => Some(format!("You Win! Your score: {}", score)),
            GameStatus::Lost => Some(format!("You Lose! Your score: {}", score)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}
