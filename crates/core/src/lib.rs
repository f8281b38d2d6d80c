//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and nothing else. It has no
//! dependencies on terminals, input devices or clocks:
//!
//! - **Deterministic**: a seed and a command sequence replay the same game
//! - **Exact**: rotation uses integer arithmetic, so undoing a turn is bit-exact
//! - **Surface-agnostic**: occupancy lives on a [`TileSurface`]
//!
//! # Module Structure
//!
//! - [`surface`]: tile surface trait, in-memory [`Tilemap`], centered [`Bounds`]
//! - [`board`]: collision queries, stamping and line clears
//! - [`pieces`]: tetromino catalog, SRS kick tables, rotation transform
//! - [`piece`]: the active piece and its per-tick state machine
//! - [`ghost`]: landing preview on its own layer
//! - [`game_state`]: one play session (spawn, tick, game over, restart)
//! - [`rng`]: seeded next-piece selection
//! - [`config`]: static configuration and its validation
//!
//! # Example
//!
//! ```
//! use tilefall_core::{GameConfig, GameState, TickOutcome};
//! use tilefall_types::GameAction;
//!
//! let mut game = GameState::new(GameConfig::default()).unwrap();
//! game.start();
//!
//! game.tick(Some(GameAction::MoveRight), 16);
//! game.tick(Some(GameAction::RotateCw), 16);
//! let outcome = game.tick(Some(GameAction::HardDrop), 16);
//!
//! assert!(matches!(outcome, TickOutcome::Locked { .. }));
//! assert_eq!(game.pieces_locked(), 1);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`] at any cadence with the elapsed milliseconds
//! since the previous call. The piece drops one row every step delay
//! (1000ms by default); a step taken 500ms or more after the last
//! successful move locks it.

pub mod board;
pub mod config;
pub mod game_state;
pub mod ghost;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod surface;

pub use tilefall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig, PieceTiming, Randomizer};
pub use game_state::GameState;
pub use ghost::GhostPiece;
pub use piece::{ActivePiece, TickOutcome};
pub use pieces::{get_shape, TetrominoCatalog, TetrominoData};
pub use rng::{PieceQueue, SimpleRng};
pub use surface::{Bounds, TileSurface, Tilemap};
