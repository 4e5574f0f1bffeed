//! GridView: maps a `core::GridSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GridSnapshot;
use crate::fb::{FrameBuffer, Rect, Rgb, Style};
use crate::types::{level_points, GameStatus};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const FRAME: Rgb = Rgb::new(60, 60, 70);

/// Tile colour for a level: grey when empty, white past the palette.
pub fn level_color(level: u8) -> Rgb {
    match level {
        0 => Rgb::new(128, 128, 128),
        1 => Rgb::new(230, 230, 230),
        2 => Rgb::new(204, 230, 255),
        3 => Rgb::new(153, 204, 255),
        4 => Rgb::new(102, 179, 255),
        5 => Rgb::new(51, 153, 255),
        6 => Rgb::new(153, 255, 51),
        7 => Rgb::new(255, 153, 51),
        8 => Rgb::new(153, 51, 255),
        9 => Rgb::new(255, 51, 153),
        10 => Rgb::new(179, 255, 102),
        11 => Rgb::new(153, 77, 230),
        _ => Rgb::new(255, 255, 255),
    }
}

/// Tile text: the points, or blank when empty.
pub fn level_label(level: u8) -> String {
    if level == 0 {
        String::new()
    } else {
        level_points(level).to_string()
    }
}

/// A lightweight terminal renderer for the grid.
pub struct GridView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
}

impl Default for GridView {
    fn default() -> Self {
        // 7x3 keeps "2048" centered with room to spare at typical glyph aspect.
        Self { tile_w: 7, tile_h: 3 }
    }
}

impl GridView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
        }
    }

    /// Size of the bordered board in terminal cells, saturating at `u16::MAX`.
    pub fn board_extent(&self, grid_size: usize) -> (u16, u16) {
        let n = u16::try_from(grid_size).unwrap_or(u16::MAX);
        // One column/row of spacing between tiles and around the edge.
        let span = |tile: u16| n.saturating_mul(tile.saturating_add(1)).saturating_add(1);
        (span(self.tile_w), span(self.tile_h))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GridSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (board_w, board_h) = self.board_extent(snap.size);
        // Board plus the score line above it.
        let x = viewport.width.saturating_sub(board_w) / 2;
        let y = viewport.height.saturating_sub(board_h.saturating_add(2)) / 2 + 2;
        let board = Rect::new(x, y, board_w, board_h);

        // Centred over the visible part of the board.
        let visible_w = board.right().min(viewport.width) - board.x;
        let score = Rect::new(board.x, board.y - 2, visible_w, 1);
        fb.label(score, &format!("Score: {}", snap.score), Style::default().bold());

        fb.paint(board, Style::on(FRAME));
        self.draw_tiles(fb, snap, board);

        if let Some(message) = snap.status.message(snap.score) {
            draw_banner(fb, snap.status, &message, board);
        }

        let help_y = board.bottom().saturating_add(1);
        if help_y < viewport.height {
            let help = Rect::new(0, help_y, viewport.width, 1);
            fb.label(help, HELP, Style::plain(Rgb::new(120, 120, 120)));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GridSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Tile area for grid slot `(gx, gy)`; `None` if its origin is past `u16::MAX`.
    fn tile_rect(&self, board: Rect, gx: usize, gy: usize) -> Option<Rect> {
        let offset = |g: usize, tile: u16| {
            u16::try_from(g)
                .ok()?
                .checked_mul(tile.checked_add(1)?)?
                .checked_add(1)
        };
        let x = board.x.checked_add(offset(gx, self.tile_w)?)?;
        let y = board.y.checked_add(offset(gy, self.tile_h)?)?;
        Some(Rect::new(x, y, self.tile_w, self.tile_h))
    }

    fn draw_tiles(&self, fb: &mut FrameBuffer, snap: &GridSnapshot, board: Rect) {
        for gy in 0..snap.size {
            match self.tile_rect(board, 0, gy) {
                Some(row) if row.y < fb.height() => {}
                _ => break,
            }
            for gx in 0..snap.size {
                let tile = match self.tile_rect(board, gx, gy) {
                    Some(tile) if tile.x < fb.width() => tile,
                    _ => break,
                };
                let level = snap.level(gx, gy).unwrap_or(0);
                let style = Style::on(level_color(level)).bold();
                fb.paint(tile, style);
                fb.label(tile, &level_label(level), style);
            }
        }
    }
}

const HELP: &str = "arrows/wasd move  r restart  q quit";

/// Win/lose message across the middle of the board.
fn draw_banner(fb: &mut FrameBuffer, status: GameStatus, message: &str, board: Rect) {
    let bg = match status {
        GameStatus::Won => Rgb::new(40, 120, 40),
        _ => Rgb::new(140, 30, 30),
    };
    let style = Style::on(bg).bold();
    let text = format!(" {} ", message);
    let w = u16::try_from(text.chars().count())
        .unwrap_or(u16::MAX)
        .min(board.w);
    let banner = Rect::new(
        board.x.saturating_add(board.w.saturating_sub(w) / 2),
        board.middle_row(),
        w,
        1,
    );
    fb.paint(banner, style);
    fb.label(banner, &text, style);
}
