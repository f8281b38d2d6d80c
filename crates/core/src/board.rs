//! Board module - owns the playfield occupancy
//!
//! The board is a centered `width × height` rectangle stored on a
//! [`TileSurface`]. It is the only source of truth for collisions: the active
//! piece keeps its footprint stamped here between ticks, and locked pieces are
//! simply footprints that are never unstamped.
//!
//! Coordinates are y-up. Row `y_min` is the bottom of the well.

use crate::surface::{Bounds, TileSurface, Tilemap};
use crate::types::{Cell, Offset, Tile, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board<S = Tilemap> {
    surface: S,
    bounds: Bounds,
}

impl Board<Tilemap> {
    /// Create a new empty board backed by an in-memory tilemap
    pub fn new(width: u16, height: u16) -> Self {
        let bounds = Bounds::centered(width, height);
        Self {
            surface: Tilemap::new(bounds),
            bounds,
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.surface.occupied_count()
    }
}

impl<S: TileSurface> Board<S> {
    /// Wrap an existing surface. Only cells inside `bounds` take part in the rules.
    pub fn with_surface(surface: S, bounds: Bounds) -> Self {
        Self { surface, bounds }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> u16 {
        self.bounds.width
    }

    pub fn height(&self) -> u16 {
        self.bounds.height
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Tile at `(x, y)`; `None` when empty or out of bounds
    pub fn get(&self, coord: Offset) -> Cell {
        if !self.bounds.contains(coord) {
            return None;
        }
        self.surface.get_cell(coord)
    }

    /// Write a single cell. Returns false if out of bounds.
    pub fn set(&mut self, coord: Offset, cell: Cell) -> bool {
        if !self.bounds.contains(coord) {
            return false;
        }
        self.surface.set_cell(coord, cell)
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, coord: Offset) -> bool {
        self.bounds.contains(coord) && self.surface.has_cell(coord)
    }

    /// True if every cell of `cells` placed at `position` is in bounds and empty
    pub fn is_valid_position(&self, cells: &[Offset], position: Offset) -> bool {
        cells.iter().all(|&(dx, dy)| {
            let coord = (position.0 + dx, position.1 + dy);
            self.bounds.contains(coord) && !self.surface.has_cell(coord)
        })
    }

    /// Write `tile` into every cell of the piece. Unconditional.
    pub fn stamp(&mut self, cells: &[Offset], position: Offset, tile: Tile) {
        for &(dx, dy) in cells {
            self.set((position.0 + dx, position.1 + dy), Some(tile));
        }
    }

    /// Clear every cell of the piece. Unconditional.
    pub fn unstamp(&mut self, cells: &[Offset], position: Offset) {
        for &(dx, dy) in cells {
            self.set((position.0 + dx, position.1 + dy), None);
        }
    }

    /// Check if a row is completely filled
    pub fn is_line_full(&self, row: i32) -> bool {
        if row < self.bounds.y_min || row >= self.bounds.y_max() {
            return false;
        }
        (self.bounds.x_min..self.bounds.x_max()).all(|col| self.surface.has_cell((col, row)))
    }

    /// Clear all full rows, bottom to top, and return how many were removed
    ///
    /// After a clear the scan stays on the same row, so the row that slid into
    /// it is tested again before moving up.
    pub fn clear_full_lines(&mut self) -> u32 {
        let mut row = self.bounds.y_min;
        let mut cleared = 0;

        while row < self.bounds.y_max() {
            if self.is_line_full(row) {
                self.clear_line(row);
                cleared += 1;
            } else {
                row += 1;
            }
        }

        cleared
    }

    /// Empty `row` and shift every row above it down by one.
    /// The top row reads from above the bounds and therefore ends up empty.
    fn clear_line(&mut self, row: i32) {
        let (x_min, x_max) = (self.bounds.x_min, self.bounds.x_max());

        for col in x_min..x_max {
            self.surface.set_cell((col, row), None);
        }

        for r in row..self.bounds.y_max() {
            for col in x_min..x_max {
                let above = self.get((col, r + 1));
                self.surface.set_cell((col, r), above);
            }
        }
    }

    /// Wipe the whole board (spawn blocked)
    pub fn game_over(&mut self) {
        self.surface.clear_all();
    }
}

impl Default for Board<Tilemap> {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
