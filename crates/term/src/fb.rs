//! Styled character grid that the grid view paints and the renderer flushes.
//!
//! Drawing is area based: the view paints solid rectangles (frame, tiles,
//! banners) and writes short labels into them. Everything clips at the edges,
//! so callers never bounds-check.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness, 0..=255.
    pub fn luma(&self) -> u8 {
        ((self.r as u32 * 299 + self.g as u32 * 587 + self.b as u32 * 114) / 1000) as u8
    }
}

const INK_DARK: Rgb = Rgb::new(30, 30, 30);
const INK_LIGHT: Rgb = Rgb::new(250, 250, 250);
const SCREEN: Rgb = Rgb::new(0, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Style {
    /// Text of colour `fg` on the screen background.
    pub const fn plain(fg: Rgb) -> Self {
        Self {
            fg,
            bg: SCREEN,
            bold: false,
        }
    }

    /// Solid `bg` with whichever ink reads better on it.
    pub fn on(bg: Rgb) -> Self {
        let fg = if bg.luma() > 140 { INK_DARK } else { INK_LIGHT };
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::plain(Rgb::new(220, 220, 220))
    }
}

/// One terminal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// Area in terminal positions. Edges saturate instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    /// The row labels are written on.
    pub fn middle_row(&self) -> u16 {
        self.y.saturating_add(self.h / 2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            glyphs: Vec::new(),
        };
        fb.reset(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Blank the whole buffer at a (possibly new) size, reusing the allocation.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs
            .resize(width as usize * height as usize, Glyph::default());
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.glyphs
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Fill `area` with blanks in `style`.
    pub fn paint(&mut self, area: Rect, style: Style) {
        let right = area.right().min(self.width);
        let bottom = area.bottom().min(self.height);
        let blank = Glyph { ch: ' ', style };
        for y in area.y..bottom {
            let row = y as usize * self.width as usize;
            for x in area.x..right {
                self.glyphs[row + x as usize] = blank;
            }
        }
    }

    /// Write `text` starting at `(x, y)`; returns how many characters landed.
    pub fn text(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        if y >= self.height {
            return 0;
        }
        let row = y as usize * self.width as usize;
        let mut written = 0;
        for (cx, ch) in (x..self.width).zip(text.chars()) {
            self.glyphs[row + cx as usize] = Glyph { ch, style };
            written += 1;
        }
        written
    }

    /// Write `text` centred on the middle row of `area`.
    pub fn label(&mut self, area: Rect, text: &str, style: Style) {
        let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(area.w.saturating_sub(len) / 2);
        self.text(x, area.middle_row(), text, style);
    }

    /// Row `y` without styles.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|g| g.ch)
            .collect()
    }
}
