//! Pieces module - tetromino catalog, wall-kick tables and rotation math
//!
//! Shapes are written as four cell offsets around the piece origin in a y-up
//! frame. Rotation is applied to the offsets directly rather than looked up
//! per orientation:
//!
//! - J, L, S, T, Z rotate about the origin cell
//! - I rotates about the half-cell point `(0.5, 0.5)`
//! - O never changes
//!
//! The half-cell pivot is handled in doubled integer coordinates, so a turn
//! followed by the opposite turn always gives back the exact same offsets.
//!
//! Kick offsets follow SRS (https://tetris.wiki/SRS), y-up.

use crate::config::ConfigError;
use crate::types::{
    Offset, PieceKind, Rotation, RotationDirection, Tile, KICK_ATTEMPTS, KICK_ROWS, PIECE_CELLS,
};

/// Shape of a piece - 4 cell offsets from piece origin
pub type PieceShape = [Offset; PIECE_CELLS];

/// Wall-kick offsets, `[row][attempt]`. Row selection: see [`kick_row`].
pub type KickTable = [[Offset; KICK_ATTEMPTS]; KICK_ROWS];

/// Kicks shared by J, L, O, S, T and Z.
///
/// Row `2r` holds the clockwise turn into rotation `r`, row `2r - 1` the
/// counter-clockwise one (wrapped).
pub const JLOSTZ_KICKS: KickTable = [
    // W->N (cw into 0)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // S->E (ccw into 1)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // N->E (cw into 1)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // W->S (ccw into 2)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // E->S (cw into 2)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // N->W (ccw into 3)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // S->W (cw into 3)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // E->N (ccw into 0)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
];

/// I piece kick table (different from the others), same row layout
pub const I_KICKS: KickTable = [
    // W->N
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // S->E
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // N->E
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // W->S
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // E->S
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // N->W
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // S->W
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // E->N
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
];

/// Static description of one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TetrominoData {
    pub kind: PieceKind,
    pub tile: Tile,
    /// Spawn-orientation offsets
    pub cells: PieceShape,
    pub wall_kicks: &'static KickTable,
}

impl TetrominoData {
    /// Build the data for a kind. Pure and deterministic.
    pub fn initialize(kind: PieceKind) -> Self {
        Self {
            kind,
            tile: kind.tile(),
            cells: base_cells(kind),
            wall_kicks: kick_table(kind),
        }
    }
}

/// Spawn-orientation offsets for a kind
pub fn base_cells(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(-1, 1), (0, 1), (1, 1), (2, 1)],
        PieceKind::J => [(-1, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::L => [(1, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::O => [(0, 1), (1, 1), (0, 0), (1, 0)],
        PieceKind::S => [(0, 1), (1, 1), (-1, 0), (0, 0)],
        PieceKind::T => [(0, 1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::Z => [(-1, 1), (0, 1), (0, 0), (1, 0)],
    }
}

/// Get kick table for a piece kind
pub fn kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::I => &I_KICKS,
        _ => &JLOSTZ_KICKS,
    }
}

/// Kick row for a turn that has just reached `rotation`
///
/// `2 * index`, one less for counter-clockwise turns, wrapped into the table.
pub fn kick_row(rotation: Rotation, direction: RotationDirection) -> usize {
    let mut row = rotation.index() as i32 * 2;
    if direction == RotationDirection::CounterClockwise {
        row -= 1;
    }
    row.rem_euclid(KICK_ROWS as i32) as usize
}

/// Rotate one offset a quarter turn; `+1` is clockwise in the y-up frame
pub fn rotate_offset(kind: PieceKind, (x, y): Offset, direction: RotationDirection) -> Offset {
    let dir = direction.sign();
    match kind {
        PieceKind::O => (x, y),
        PieceKind::I => {
            // Doubled frame, shifted by (-0.5, -0.5): both coordinates odd.
            let (dx, dy) = (2 * x - 1, 2 * y - 1);
            let (rx, ry) = (dy * dir, -dx * dir);
            ((rx + 1) / 2, (ry + 1) / 2)
        }
        _ => (y * dir, -x * dir),
    }
}

/// Rotate every offset of a shape in place
pub fn rotate_shape(kind: PieceKind, cells: &mut PieceShape, direction: RotationDirection) {
    if kind == PieceKind::O {
        return;
    }
    for cell in cells.iter_mut() {
        *cell = rotate_offset(kind, *cell, direction);
    }
}

/// Shape of `kind` after turning clockwise from spawn to `rotation`
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let mut cells = base_cells(kind);
    for _ in 0..rotation.index() {
        rotate_shape(kind, &mut cells, RotationDirection::Clockwise);
    }
    cells
}

/// Per-kind data for the configured piece set, built once
#[derive(Debug, Clone)]
pub struct TetrominoCatalog {
    entries: Vec<TetrominoData>,
    by_kind: [Option<usize>; 7],
}

impl TetrominoCatalog {
    /// Build the catalog for `kinds`, in order. Rejects empty or duplicate lists.
    pub fn new(kinds: &[PieceKind]) -> Result<Self, ConfigError> {
        if kinds.is_empty() {
            return Err(ConfigError::EmptyPieceSet);
        }

        let mut entries = Vec::with_capacity(kinds.len());
        let mut by_kind = [None; 7];
        for &kind in kinds {
            if by_kind[kind.index()].is_some() {
                return Err(ConfigError::DuplicatePiece(kind));
            }
            by_kind[kind.index()] = Some(entries.len());
            entries.push(TetrominoData::initialize(kind));
        }

        Ok(Self { entries, by_kind })
    }

    /// Cached data for a kind, if it is part of this catalog
    pub fn get(&self, kind: PieceKind) -> Option<&TetrominoData> {
        self.by_kind[kind.index()].map(|i| &self.entries[i])
    }

    pub fn kinds(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.entries.iter().map(|d| d.kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TetrominoCatalog {
    fn default() -> Self {
        Self {
            entries: PieceKind::ALL.iter().map(|&k| TetrominoData::initialize(k)).collect(),
            by_kind: [Some(0), Some(1), Some(2), Some(3), Some(4), Some(5), Some(6)],
        }
    }
}
