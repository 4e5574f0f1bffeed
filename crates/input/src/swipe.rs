//! Mouse swipe detection.
//!
//! A press followed by a release farther than the threshold becomes a move
//! along the dominant axis. Terminal rows grow downward, so a downward drag
//! moves tiles toward the last row.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, SWIPE_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    threshold: f32,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn press(&mut self, column: u16, row: u16) {
        self.start = Some((column, row));
    }

    /// Finish a drag. Returns a direction if the drag was long enough.
    pub fn release(&mut self, column: u16, row: u16) -> Option<Direction> {
        let (sx, sy) = self.start.take()?;
        let dx = column as f32 - sx as f32;
        let dy = row as f32 - sy as f32;

        if (dx * dx + dy * dy).sqrt() <= self.threshold {
            return None;
        }

        if dx.abs() > dy.abs() {
            Some(if dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            })
        } else {
            Some(if dy > 0.0 {
                Direction::Down
            } else {
                Direction::Up
            })
        }
    }

    /// Feed a crossterm mouse event; only the left button is tracked.
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press(event.column, event.row);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => self.release(event.column, event.row),
            _ => None,
        }
    }
}
