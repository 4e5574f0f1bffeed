use crate::types::{level_points, GameStatus};

/// Read-only copy of a grid for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GridSnapshot {
    pub size: usize,
    /// Row-major levels (`y * size + x`)
    pub levels: Vec<u8>,
    pub score: u64,
    pub status: GameStatus,
}

impl GridSnapshot {
    pub fn level(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.levels.get(y * self.size + x).copied()
    }

    /// Label for a cell: its points, or `None` when empty.
    pub fn label(&self, x: usize, y: usize) -> Option<u64> {
        self.level(x, y)
            .filter(|&level| level != 0)
            .map(level_points)
    }

    pub fn highest_level(&self) -> u8 {
        self.levels.iter().copied().max().unwrap_or(0)
    }
}
