//! Ghost piece - landing preview for the active piece
//!
//! The ghost draws on its own [`Tilemap`] layer so it never takes part in
//! collisions. To find the landing row it briefly lifts the active piece off
//! the board (so the piece does not block itself), scans downward, and puts
//! the piece back before returning.

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::pieces::PieceShape;
use crate::surface::{Bounds, TileSurface, Tilemap};
use crate::types::{Offset, Tile};

#[derive(Debug, Clone, PartialEq)]
pub struct GhostPiece {
    layer: Tilemap,
    cells: PieceShape,
    position: Offset,
}

impl GhostPiece {
    /// Empty ghost layer covering `bounds`
    pub fn new(bounds: Bounds) -> Self {
        Self {
            layer: Tilemap::new(bounds),
            cells: [(0, 0); 4],
            position: (0, 0),
        }
    }

    pub fn layer(&self) -> &Tilemap {
        &self.layer
    }

    /// Landing position computed by the last [`update`](Self::update)
    pub fn position(&self) -> Offset {
        self.position
    }

    pub fn cells(&self) -> &PieceShape {
        &self.cells
    }

    /// Re-project `piece` and redraw the ghost layer
    ///
    /// `board` must currently hold the piece's footprint; it holds it again,
    /// unchanged, when this returns.
    pub fn update<S: TileSurface>(&mut self, board: &mut Board<S>, piece: &ActivePiece) {
        self.erase();
        self.cells = *piece.cells();
        self.drop_to_floor(board, piece);
        self.draw();
    }

    /// Remove the ghost tiles (game over)
    pub fn clear(&mut self) {
        self.layer.clear_all();
    }

    fn erase(&mut self) {
        let (px, py) = self.position;
        for &(x, y) in &self.cells {
            self.layer.set_cell((px + x, py + y), None);
        }
    }

    fn drop_to_floor<S: TileSurface>(&mut self, board: &mut Board<S>, piece: &ActivePiece) {
        let (x, current_row) = piece.position();
        let bottom = board.bounds().y_min - 1;

        board.unstamp(piece.cells(), piece.position());

        self.position = piece.position();
        for row in (bottom..=current_row).rev() {
            if board.is_valid_position(&self.cells, (x, row)) {
                self.position = (x, row);
            } else {
                break;
            }
        }

        board.stamp(piece.cells(), piece.position(), piece.tile());
    }

    fn draw(&mut self) {
        let (px, py) = self.position;
        for &(x, y) in &self.cells {
            self.layer.set_cell((px + x, py + y), Some(Tile::Ghost));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PieceTiming;
    use crate::pieces::TetrominoData;
    use crate::types::PieceKind;

    #[test]
    fn test_ghost_lands_on_floor_and_restores_board() {
        let mut board = Board::default();
        let piece = ActivePiece::spawn(
            &mut board,
            (-1, 8),
            TetrominoData::initialize(PieceKind::O),
            PieceTiming::default(),
        )
        .unwrap();
        let before = board.clone();

        let mut ghost = GhostPiece::new(board.bounds());
        ghost.update(&mut board, &piece);

        assert_eq!(ghost.position(), (-1, -10));
        assert_eq!(board, before);
        assert_eq!(ghost.layer().occupied_count(), 4);
        assert_eq!(ghost.layer().get_cell((0, -9)), Some(Tile::Ghost));
    }

    #[test]
    fn test_ghost_erases_previous_outline() {
        let mut board = Board::default();
        let mut piece = ActivePiece::spawn(
            &mut board,
            (-1, 8),
            TetrominoData::initialize(PieceKind::O),
            PieceTiming::default(),
        )
        .unwrap();
        let mut ghost = GhostPiece::new(board.bounds());
        ghost.update(&mut board, &piece);

        piece.tick(&mut board, Some(crate::types::GameAction::MoveLeft), 16);
        ghost.update(&mut board, &piece);

        assert_eq!(ghost.position(), (-2, -10));
        assert_eq!(ghost.layer().occupied_count(), 4);
        assert!(!ghost.layer().has_cell((0, -10)));
    }
}
