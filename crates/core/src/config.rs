//! Static game configuration
//!
//! Everything here is read once when a [`GameState`](crate::GameState) is
//! built. Malformed values are rejected up front by [`GameConfig::validate`];
//! the rules themselves never fail at runtime.

use std::env;

use thiserror::Error;

use crate::surface::Bounds;
use crate::types::{
    Offset, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, LOCK_DELAY_MS, MAX_BOARD_DIMENSION,
    SPAWN_POSITION, STEP_DELAY_MS,
};

/// How the next kind is picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Randomizer {
    /// Any configured kind, with equal odds, on every spawn
    #[default]
    Uniform,
    /// Deal each configured kind once per shuffled bag
    Bag,
}

impl Randomizer {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" | "random" => Some(Randomizer::Uniform),
            "bag" | "7bag" | "7-bag" => Some(Randomizer::Bag),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be non-zero (got {width}x{height})")]
    ZeroBoardDimension { width: u16, height: u16 },
    #[error("board {width}x{height} exceeds the {max}-cell limit per side")]
    BoardTooLarge { width: u16, height: u16, max: u16 },
    #[error("piece set is empty")]
    EmptyPieceSet,
    #[error("piece {0:?} listed more than once")]
    DuplicatePiece(PieceKind),
    #[error("spawn position ({x}, {y}) is outside the board")]
    SpawnOutOfBounds { x: i32, y: i32 },
    #[error("step delay must be greater than zero")]
    ZeroStepDelay,
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Timing shared by every spawned piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceTiming {
    pub step_delay_ms: u32,
    pub lock_delay_ms: u32,
}

impl Default for PieceTiming {
    fn default() -> Self {
        Self {
            step_delay_ms: STEP_DELAY_MS,
            lock_delay_ms: LOCK_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_width: u16,
    pub board_height: u16,
    /// Piece origin for every spawn
    pub spawn_position: Offset,
    pub timing: PieceTiming,
    /// Kinds in play, in catalog order
    pub pieces: Vec<PieceKind>,
    pub randomizer: Randomizer,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            spawn_position: SPAWN_POSITION,
            timing: PieceTiming::default(),
            pieces: PieceKind::ALL.to_vec(),
            randomizer: Randomizer::Uniform,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Spawn origin for a board of the given height: one column left of
    /// center, two rows below the top.
    pub fn default_spawn(board_height: u16) -> Offset {
        (-1, board_height as i32 - board_height as i32 / 2 - 2)
    }

    /// Defaults overridden by `TETRIS_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let get = |var: &'static str| {
            lookup(var)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some((var, s)) })
        };

        let mut resized = false;
        if let Some((var, v)) = get("TETRIS_BOARD_WIDTH") {
            config.board_width = parse_num(var, &v)?;
            resized = true;
        }
        if let Some((var, v)) = get("TETRIS_BOARD_HEIGHT") {
            config.board_height = parse_num(var, &v)?;
            resized = true;
        }
        if resized {
            config.spawn_position = Self::default_spawn(config.board_height);
        }

        if let Some((var, v)) = get("TETRIS_STEP_DELAY_MS") {
            config.timing.step_delay_ms = parse_num(var, &v)?;
        }
        if let Some((var, v)) = get("TETRIS_LOCK_DELAY_MS") {
            config.timing.lock_delay_ms = parse_num(var, &v)?;
        }
        if let Some((var, v)) = get("TETRIS_SEED") {
            config.seed = parse_num(var, &v)?;
        }
        if let Some((var, v)) = get("TETRIS_RANDOMIZER") {
            config.randomizer = Randomizer::from_str(&v).ok_or(ConfigError::InvalidEnv {
                var,
                value: v.clone(),
            })?;
        }
        if let Some((var, v)) = get("TETRIS_PIECES") {
            config.pieces = v
                .chars()
                .map(|c| PieceKind::from_str(&c.to_string()))
                .collect::<Option<Vec<_>>>()
                .ok_or(ConfigError::InvalidEnv {
                    var,
                    value: v.clone(),
                })?;
        }

        Ok(config)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::centered(self.board_width, self.board_height)
    }

    /// Check everything the rules rely on. Call before building a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width == 0 || self.board_height == 0 {
            return Err(ConfigError::ZeroBoardDimension {
                width: self.board_width,
                height: self.board_height,
            });
        }
        if self.board_width > MAX_BOARD_DIMENSION || self.board_height > MAX_BOARD_DIMENSION {
            return Err(ConfigError::BoardTooLarge {
                width: self.board_width,
                height: self.board_height,
                max: MAX_BOARD_DIMENSION,
            });
        }
        if self.timing.step_delay_ms == 0 {
            return Err(ConfigError::ZeroStepDelay);
        }
        if self.pieces.is_empty() {
            return Err(ConfigError::EmptyPieceSet);
        }
        for (i, kind) in self.pieces.iter().enumerate() {
            if self.pieces[..i].contains(kind) {
                return Err(ConfigError::DuplicatePiece(*kind));
            }
        }
        let (x, y) = self.spawn_position;
        if !self.bounds().contains((x, y)) {
            return Err(ConfigError::SpawnOutOfBounds { x, y });
        }
        Ok(())
    }
}

fn parse_num<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidEnv {
        var,
        value: value.to_string(),
    })
}
