//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! from the rules engine, the terminal view and the input mapping alike.
//!
//! # Coordinates
//!
//! The playfield uses a y-up frame centered on the origin, the same frame the
//! piece offsets are written in:
//!
//! - **Columns**: `-BOARD_WIDTH / 2 .. BOARD_WIDTH - BOARD_WIDTH / 2` (-5..5)
//! - **Rows**: `-BOARD_HEIGHT / 2 .. BOARD_HEIGHT - BOARD_HEIGHT / 2` (-10..10)
//! - **Down** is `(0, -1)`
//! - **Spawn position**: `(-1, 8)`, so every kind spawns within the top two rows
//!
//! Boards may be at most `MAX_BOARD_DIMENSION` (256) cells per side.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `STEP_DELAY_MS` | 1000 | Time between forced one-row drops |
//! | `LOCK_DELAY_MS` | 500 | Time without a successful move before a step locks |
//!
//! # Examples
//!
//! ```
//! use tilefall_types::{PieceKind, Rotation, RotationDirection};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let rotated = Rotation::North.rotate(RotationDirection::Clockwise);
//! assert_eq!(rotated, Rotation::East);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Largest accepted board width or height
pub const MAX_BOARD_DIMENSION: u16 = 256;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Time between forced one-row drops (1 second per row)
pub const STEP_DELAY_MS: u32 = 1000;

/// Time since the last successful move after which a forced step locks the piece
pub const LOCK_DELAY_MS: u32 = 500;

/// Default piece origin on a 10x20 board
pub const SPAWN_POSITION: Offset = (-1, 8);

/// Number of rows in a wall-kick table (one per rotation transition)
pub const KICK_ROWS: usize = 8;

/// Number of kick attempts per transition, the first being `(0, 0)`
pub const KICK_ATTEMPTS: usize = 5;

/// Number of cells in every tetromino
pub const PIECE_CELLS: usize = 4;

/// A 2D grid coordinate or translation `(x, y)`, y pointing up.
pub type Offset = (i32, i32);

/// The seven tetromino piece kinds
///
/// Each kind has a distinct shape and display tile:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue
/// - **L**: Orange (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green
/// - **T**: Purple
/// - **Z**: Red (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tilefall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Display tile drawn for this kind
    pub fn tile(&self) -> Tile {
        match self {
            PieceKind::I => Tile::Cyan,
            PieceKind::J => Tile::Blue,
            PieceKind::L => Tile::Orange,
            PieceKind::O => Tile::Yellow,
            PieceKind::S => Tile::Green,
            PieceKind::T => Tile::Purple,
            PieceKind::Z => Tile::Red,
        }
    }
}

/// Display tile identifier stored in a surface cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
    /// Outline of the landing position, drawn on the ghost layer only
    Ghost,
}

/// A cell on a tile surface
///
/// - `None`: Empty cell
/// - `Some(Tile)`: Cell filled with the given tile
pub type Cell = Option<Tile>;

/// Rotation states
///
/// - **North**: Spawn orientation (index 0)
/// - **East**: Rotated 90° clockwise (index 1)
/// - **South**: Rotated 180° (index 2)
/// - **West**: Rotated 90° counter-clockwise (index 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation index in `[0, 4)`
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build a rotation from any integer, wrapping it into `[0, 4)`
    ///
    /// # Examples
    ///
    /// ```
    /// use tilefall_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_index(5), Rotation::East);
    /// assert_eq!(Rotation::from_index(-1), Rotation::West);
    /// ```
    pub fn from_index(index: i32) -> Self {
        match index.rem_euclid(4) {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Advance one quarter turn in the given direction
    pub fn rotate(&self, direction: RotationDirection) -> Self {
        Self::from_index(self.index() as i32 + direction.sign())
    }
}

/// Direction of a quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// `+1` for clockwise, `-1` for counter-clockwise
    pub fn sign(&self) -> i32 {
        match self {
            RotationDirection::Clockwise => 1,
            RotationDirection::CounterClockwise => -1,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// Discrete commands the rules engine accepts, at most one per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Drop piece to the lowest valid row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
}
