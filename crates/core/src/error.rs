use thiserror::Error;

/// Failures surfaced by the grid engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cannot fill {requested} cells on a grid of {capacity}")]
    TooManyInitialCells { requested: usize, capacity: usize },
    #[error("grid size must be at least 1")]
    ZeroSize,
    #[error("level rows are not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// Spawn was requested on a full grid. The engine only spawns after a
    /// move that moved something, so reaching this is a contract violation.
    #[error("no empty cells left")]
    OutOfSpace,
}

impl GridError {
    /// True for errors raised while constructing or configuring a grid.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, GridError::OutOfSpace)
    }
}
