//! Scan order for a move pass.
//!
//! Cells closest to the destination edge must be resolved first so they are
//! never overtaken by cells behind them. Both axes start at the edge farthest in
//! the direction of travel and walk backwards; an axis with no motion is walked
//! from 0 upward.

use crate::types::Direction;

/// Visit order and step vector for one move direction on an `size`×`size` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traversal {
    size: usize,
    dx: i32,
    dy: i32,
}

impl Traversal {
    pub fn new(direction: Direction, size: usize) -> Self {
        let (dx, dy) = direction.delta();
        Self { size, dx, dy }
    }

    /// Step vector `(dx, dy)`.
    pub fn delta(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }

    /// Coordinates in scan order, x-major.
    pub fn order(&self) -> impl Iterator<Item = (usize, usize)> {
        let size = self.size;
        let dy = self.dy;
        axis(self.dx, size).flat_map(move |x| axis(dy, size).map(move |y| (x, y)))
    }

    /// The neighbour one step along the direction, or `None` past the edge.
    pub fn step_from(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        let nx = x as i64 + self.dx as i64;
        let ny = y as i64 + self.dy as i64;
        let n = self.size as i64;
        if nx < 0 || nx >= n || ny < 0 || ny >= n {
            return None;
        }
        Some((nx as usize, ny as usize))
    }
}

/// One axis: descending when travel is positive, ascending otherwise.
fn axis(delta: i32, size: usize) -> impl Iterator<Item = usize> {
    (0..size).map(move |i| if delta > 0 { size - 1 - i } else { i })
}
