//! Terminal rendering for the game.
//!
//! Renders into a plain framebuffer (two columns per board cell) and flushes
//! it to the terminal with crossterm. `game_view` is pure and testable;
//! `renderer` owns the terminal I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tilefall_core as core;
pub use tilefall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{tile_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
