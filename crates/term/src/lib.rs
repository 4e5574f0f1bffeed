//! Terminal rendering for the 2048 grid.
//!
//! Renders a [`core::GridSnapshot`] into a simple framebuffer that is then
//! flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and free of display concerns
//! - Keep the view pure so layout is unit-testable
//! - Only write the cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{FrameBuffer, Glyph, Rect, Rgb, Style};
pub use game_view::{level_color, level_label, GridView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
