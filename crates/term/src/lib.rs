//! Terminal render adapter.
//!
//! Turns a [`core::GameSnapshot`] into a framebuffer and flushes it to the
//! terminal. The engine never pushes updates; the host pulls a snapshot after
//! each transition and hands it to [`GameView`].
//!
//! - [`fb`]: framebuffer and style types
//! - [`game_view`]: pure snapshot → framebuffer mapping
//! - [`renderer`]: crossterm backend with row-level diffing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport, MAX_CELL_WIDTH};
pub use renderer::{encode_rows_into, TerminalRenderer};
