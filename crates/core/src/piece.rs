//! Active piece - the one falling tetromino
//!
//! The piece keeps its footprint stamped on the [`Board`] between ticks. Each
//! tick lifts the footprint off, runs timers and at most one command against
//! the empty cells it leaves behind, then puts it back down at the new spot.
//!
//! Tick order:
//!
//! 1. unstamp footprint
//! 2. add elapsed time to the lock and step timers
//! 3. apply the command, if any
//! 4. forced step once the step timer reaches the step delay; a step taken
//!    with the lock timer at or past the lock delay locks the piece
//! 5. re-stamp footprint
//!
//! A hard drop locks straight away and ends the tick.

use crate::board::Board;
use crate::config::PieceTiming;
use crate::pieces::{kick_row, rotate_shape, PieceShape, TetrominoData};
use crate::surface::TileSurface;
use crate::types::{GameAction, Offset, PieceKind, Rotation, RotationDirection, Tile};

const DOWN: Offset = (0, -1);
const LEFT: Offset = (-1, 0);
const RIGHT: Offset = (1, 0);

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Piece is still in play
    Falling,
    /// Piece fused to the board; the next one must be spawned
    Locked { lines_cleared: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivePiece {
    data: TetrominoData,
    position: Offset,
    cells: PieceShape,
    rotation: Rotation,
    timing: PieceTiming,
    /// Time since the last forced step
    step_timer_ms: u32,
    /// Time since the last successful move
    lock_timer_ms: u32,
}

impl ActivePiece {
    /// Place a fresh piece at `position` in spawn orientation
    ///
    /// If the spawn cells are blocked the board is wiped (game over) and no
    /// piece is returned.
    pub fn spawn<S: TileSurface>(
        board: &mut Board<S>,
        position: Offset,
        data: TetrominoData,
        timing: PieceTiming,
    ) -> Option<Self> {
        let piece = Self {
            data,
            position,
            cells: data.cells,
            rotation: Rotation::North,
            timing,
            step_timer_ms: 0,
            lock_timer_ms: 0,
        };

        if !board.is_valid_position(&piece.cells, position) {
            board.game_over();
            return None;
        }

        board.stamp(&piece.cells, position, data.tile);
        Some(piece)
    }

    pub fn kind(&self) -> PieceKind {
        self.data.kind
    }

    pub fn tile(&self) -> Tile {
        self.data.tile
    }

    pub fn position(&self) -> Offset {
        self.position
    }

    /// Current cell offsets (already rotated)
    pub fn cells(&self) -> &PieceShape {
        &self.cells
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn lock_timer_ms(&self) -> u32 {
        self.lock_timer_ms
    }

    pub fn step_timer_ms(&self) -> u32 {
        self.step_timer_ms
    }

    /// Absolute board coordinates of the footprint
    pub fn absolute_cells(&self) -> [Offset; 4] {
        let (px, py) = self.position;
        self.cells.map(|(x, y)| (px + x, py + y))
    }

    /// Advance the piece by one tick
    pub fn tick<S: TileSurface>(
        &mut self,
        board: &mut Board<S>,
        command: Option<GameAction>,
        elapsed_ms: u32,
    ) -> TickOutcome {
        board.unstamp(&self.cells, self.position);

        self.lock_timer_ms = self.lock_timer_ms.saturating_add(elapsed_ms);
        self.step_timer_ms = self.step_timer_ms.saturating_add(elapsed_ms);

        match command {
            Some(GameAction::MoveLeft) => {
                self.move_by(board, LEFT);
            }
            Some(GameAction::MoveRight) => {
                self.move_by(board, RIGHT);
            }
            Some(GameAction::SoftDrop) => {
                self.move_by(board, DOWN);
            }
            Some(GameAction::HardDrop) => {
                let lines_cleared = self.hard_drop(board);
                return TickOutcome::Locked { lines_cleared };
            }
            Some(GameAction::RotateCw) => {
                self.rotate(board, RotationDirection::Clockwise);
            }
            Some(GameAction::RotateCcw) => {
                self.rotate(board, RotationDirection::CounterClockwise);
            }
            None => {}
        }

        if self.step_timer_ms >= self.timing.step_delay_ms {
            if let Some(lines_cleared) = self.step(board) {
                return TickOutcome::Locked { lines_cleared };
            }
        }

        board.stamp(&self.cells, self.position, self.data.tile);
        TickOutcome::Falling
    }

    /// Forced one-row drop; locks if the lock delay has run out
    fn step<S: TileSurface>(&mut self, board: &mut Board<S>) -> Option<u32> {
        self.step_timer_ms = 0;
        self.move_by(board, DOWN);

        if self.lock_timer_ms >= self.timing.lock_delay_ms {
            return Some(self.lock(board));
        }
        None
    }

    /// Translate the piece if the target is free. Only a successful move
    /// resets the lock timer.
    ///
    /// Expects the piece's own footprint to be off the board.
    pub fn move_by<S: TileSurface>(&mut self, board: &Board<S>, translation: Offset) -> bool {
        let candidate = (
            self.position.0 + translation.0,
            self.position.1 + translation.1,
        );

        let valid = board.is_valid_position(&self.cells, candidate);
        if valid {
            self.position = candidate;
            self.lock_timer_ms = 0;
        }
        valid
    }

    /// Drop as far as possible and lock. Returns lines cleared.
    pub fn hard_drop<S: TileSurface>(&mut self, board: &mut Board<S>) -> u32 {
        while self.move_by(board, DOWN) {}
        self.lock(board)
    }

    /// Fuse the footprint into the board and clear full rows
    pub fn lock<S: TileSurface>(&mut self, board: &mut Board<S>) -> u32 {
        board.stamp(&self.cells, self.position, self.data.tile);
        board.clear_full_lines()
    }

    /// Quarter turn with wall kicks. On failure the piece is left exactly
    /// as it was.
    pub fn rotate<S: TileSurface>(
        &mut self,
        board: &Board<S>,
        direction: RotationDirection,
    ) -> bool {
        let original = self.rotation;
        self.rotation = self.rotation.rotate(direction);
        rotate_shape(self.data.kind, &mut self.cells, direction);

        if self.test_wall_kicks(board, direction) {
            return true;
        }

        self.rotation = original;
        rotate_shape(self.data.kind, &mut self.cells, direction.opposite());
        false
    }

    fn test_wall_kicks<S: TileSurface>(
        &mut self,
        board: &Board<S>,
        direction: RotationDirection,
    ) -> bool {
        let kicks = self.data.wall_kicks;
        kicks[kick_row(self.rotation, direction)]
            .iter()
            .any(|&translation| self.move_by(board, translation))
    }
}
