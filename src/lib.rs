//! Tilefall (workspace facade crate).
//!
//! Re-exports the workspace crates under one path:
//! `tilefall::{core, input, term, types}`.

pub use tilefall_core as core;
pub use tilefall_input as input;
pub use tilefall_term as term;
pub use tilefall_types as types;
