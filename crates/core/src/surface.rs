//! Tile surfaces - where board and ghost occupancy actually lives
//!
//! The rules engine never keeps a second copy of the grid. Everything it
//! stamps, clears or queries goes through [`TileSurface`]. [`Tilemap`] is the
//! in-memory implementation: a flat, row-major array over a fixed [`Bounds`].

use crate::types::{Cell, Offset};

/// Axis-aligned integer rectangle `[x_min, x_max) × [y_min, y_max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x_min: i32,
    pub y_min: i32,
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    /// Rectangle of `width × height` centered on the origin
    ///
    /// # Examples
    ///
    /// ```
    /// use tilefall_core::surface::Bounds;
    ///
    /// let b = Bounds::centered(10, 20);
    /// assert_eq!((b.x_min, b.x_max()), (-5, 5));
    /// assert_eq!((b.y_min, b.y_max()), (-10, 10));
    /// ```
    pub fn centered(width: u16, height: u16) -> Self {
        Self {
            x_min: -(width as i32 / 2),
            y_min: -(height as i32 / 2),
            width,
            height,
        }
    }

    pub fn x_max(&self) -> i32 {
        self.x_min + self.width as i32
    }

    pub fn y_max(&self) -> i32 {
        self.y_min + self.height as i32
    }

    pub fn contains(&self, (x, y): Offset) -> bool {
        x >= self.x_min && x < self.x_max() && y >= self.y_min && y < self.y_max()
    }

    /// Number of cells covered
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A grid the engine can draw tiles onto and read them back from
pub trait TileSurface {
    /// Write a tile (or clear it with `None`).
    /// Returns false if the coordinate is not addressable.
    fn set_cell(&mut self, coord: Offset, cell: Cell) -> bool;

    /// Tile at `coord`; `None` for empty or unaddressable cells
    fn get_cell(&self, coord: Offset) -> Cell;

    fn has_cell(&self, coord: Offset) -> bool {
        self.get_cell(coord).is_some()
    }

    /// Clear every addressable cell
    fn clear_all(&mut self);
}

/// In-memory tile surface with fixed bounds
///
/// Writes outside the bounds are refused, reads outside the bounds are empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Tilemap {
    bounds: Bounds,
    /// Row-major from `y_min` upward: `(y - y_min) * width + (x - x_min)`
    cells: Vec<Cell>,
}

impl Tilemap {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: vec![None; bounds.area()],
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline(always)]
    fn index(&self, (x, y): Offset) -> Option<usize> {
        if !self.bounds.contains((x, y)) {
            return None;
        }
        let col = (x - self.bounds.x_min) as usize;
        let row = (y - self.bounds.y_min) as usize;
        Some(row * self.bounds.width as usize + col)
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl TileSurface for Tilemap {
    fn set_cell(&mut self, coord: Offset, cell: Cell) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    fn get_cell(&self, coord: Offset) -> Cell {
        self.index(coord).and_then(|idx| self.cells[idx])
    }

    fn clear_all(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}
