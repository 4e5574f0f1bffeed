//! Cell module - a single grid slot
//!
//! A cell stores its coordinates and an exponent-encoded level. Assigning new
//! values reports what actually changed as a small stack-only list of
//! [`CellEvent`]s, which the grid forwards to whoever renders it.

use arrayvec::ArrayVec;

use crate::types::level_points;

/// Notification raised by [`Cell::set_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellEvent {
    /// Coordinates differ from the previous assignment
    PositionChanged { x: usize, y: usize },
    /// Level differs from the previous assignment
    ValueChanged { level: u8 },
}

/// Events from one assignment: at most one of each kind, position first.
pub type CellEvents = ArrayVec<CellEvent, 2>;

/// One grid slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    x: usize,
    y: usize,
    level: u8,
}

impl Cell {
    /// Create an empty cell at `(x, y)`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y, level: 0 }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_empty(&self) -> bool {
        self.level == 0
    }

    /// 0 if empty, else 2^level.
    pub fn points(&self) -> u64 {
        level_points(self.level)
    }

    /// Assign coordinates and level, returning the notifications for whatever changed.
    ///
    /// A no-op assignment returns no events.
    ///
    /// ```
    /// use tui_2048_core::{Cell, CellEvent};
    ///
    /// let mut cell = Cell::new(1, 2);
    /// let events = cell.set_value(1, 2, 3);
    /// assert_eq!(events.as_slice(), &[CellEvent::ValueChanged { level: 3 }]);
    /// assert!(cell.set_value(1, 2, 3).is_empty());
    /// ```
    pub fn set_value(&mut self, x: usize, y: usize, level: u8) -> CellEvents {
        let mut events = CellEvents::new();

        if self.x != x || self.y != y {
            events.push(CellEvent::PositionChanged { x, y });
        }
        if self.level != level {
            events.push(CellEvent::ValueChanged { level });
        }

        self.x = x;
        self.y = y;
        self.level = level;
        events
    }
}
