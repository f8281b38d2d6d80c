//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`]. The rules
//! engine takes at most one discrete command per tick, so there is no
//! auto-repeat or buffering here: one key press, one command.

pub mod map;

pub use tilefall_types as types;

pub use map::{handle_key_event, is_restart, should_quit};
