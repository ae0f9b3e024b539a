//! Interactive terminal UI
//!
//! Draws the board and keyboard with ratatui and feeds key presses into the
//! game engine.

mod app;
mod rendering;

pub use app::{App, NOTICE_TTL, Notice, NoticeStyle, run_tui};
pub use rendering::{key_style, tile_style, ui};
