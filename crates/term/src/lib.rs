//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer (the off-screen buffer) that is blitted to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Rasterize pixel-space shapes onto character cells
//! - Redraw only the cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
