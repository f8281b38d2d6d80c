//! Game state module - one play session
//!
//! Ties the board, the active piece, the ghost and the randomizer together.
//! It is the driver the piece hands control back to after a lock: the piece
//! fuses and clears rows, then [`GameState::tick`] spawns the next one.

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::ghost::GhostPiece;
use crate::piece::{ActivePiece, TickOutcome};
use crate::pieces::TetrominoCatalog;
use crate::rng::PieceQueue;
use crate::types::GameAction;

#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    catalog: TetrominoCatalog,
    board: Board,
    active: Option<ActivePiece>,
    ghost: GhostPiece,
    piece_queue: PieceQueue,
    started: bool,
    game_over: bool,
    lines_cleared: u32,
    pieces_locked: u32,
}

impl GameState {
    /// Build a session. Fails fast on a malformed config.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let catalog = TetrominoCatalog::new(&config.pieces)?;
        let board = Board::new(config.board_width, config.board_height);
        let ghost = GhostPiece::new(board.bounds());
        let piece_queue = PieceQueue::new(&config.pieces, config.randomizer, config.seed);

        Ok(Self {
            config,
            catalog,
            board,
            active: None,
            ghost,
            piece_queue,
            started: false,
            game_over: false,
            lines_cleared: 0,
            pieces_locked: 0,
        })
    }

    /// Spawn the first piece. Does nothing if already started.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        if self.spawn_piece() {
            self.refresh_ghost();
        }
    }

    /// Wipe the session and start over with the configured seed
    pub fn restart(&mut self) {
        self.board.game_over();
        self.ghost.clear();
        self.active = None;
        self.piece_queue = PieceQueue::new(
            &self.config.pieces,
            self.config.randomizer,
            self.config.seed,
        );
        self.game_over = false;
        self.lines_cleared = 0;
        self.pieces_locked = 0;
        self.started = false;
        self.start();
    }

    /// Spawn the next kind at the configured position
    ///
    /// On a blocked spawn the board wipes itself and the session is over.
    /// A kind with no catalog entry ends the session the same way.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.piece_queue.draw();
        self.active = match self.catalog.get(kind) {
            Some(&data) => ActivePiece::spawn(
                &mut self.board,
                self.config.spawn_position,
                data,
                self.config.timing,
            ),
            None => {
                self.board.game_over();
                None
            }
        };

        if self.active.is_none() {
            self.game_over = true;
            self.ghost.clear();
            return false;
        }
        true
    }

    /// Advance one tick with at most one command
    ///
    /// Does nothing before [`start`](Self::start) or after game over.
    pub fn tick(&mut self, command: Option<GameAction>, elapsed_ms: u32) -> TickOutcome {
        if !self.started || self.game_over {
            return TickOutcome::Falling;
        }
        let Some(active) = self.active.as_mut() else {
            return TickOutcome::Falling;
        };

        let outcome = active.tick(&mut self.board, command, elapsed_ms);

        if let TickOutcome::Locked { lines_cleared } = outcome {
            self.lines_cleared += lines_cleared;
            self.pieces_locked += 1;
            self.active = None;
            self.spawn_piece();
        }

        self.refresh_ghost();
        outcome
    }

    fn refresh_ghost(&mut self) {
        match self.active.as_ref() {
            Some(active) => self.ghost.update(&mut self.board, active),
            None => self.ghost.clear(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &TetrominoCatalog {
        &self.catalog
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions in tests and tools
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn ghost(&self) -> &GhostPiece {
        &self.ghost
    }

    pub fn next_kind(&self) -> crate::types::PieceKind {
        self.piece_queue.peek()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default()).expect("default config is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Tile};

    fn o_only() -> GameState {
        GameState::new(GameConfig {
            pieces: vec![PieceKind::O],
            ..GameConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::default();
        assert!(!state.started());
        assert!(!state.game_over());
        assert!(state.active().is_none());
        assert_eq!(state.board().occupied_count(), 0);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let err = GameState::new(GameConfig {
            pieces: Vec::new(),
            ..GameConfig::default()
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::EmptyPieceSet);
    }

    #[test]
    fn test_start_spawns_and_projects_ghost() {
        let mut state = o_only();
        state.start();
        assert!(state.started());
        assert_eq!(state.active().unwrap().position(), (-1, 8));
        assert_eq!(state.board().occupied_count(), 4);
        assert_eq!(state.ghost().position(), (-1, -10));

        // Second start is a no-op.
        state.start();
        assert_eq!(state.board().occupied_count(), 4);
    }

    #[test]
    fn test_tick_before_start_is_noop() {
        let mut state = o_only();
        assert_eq!(state.tick(Some(GameAction::HardDrop), 16), TickOutcome::Falling);
        assert_eq!(state.board().occupied_count(), 0);
    }

    #[test]
    fn test_hard_drop_spawns_next() {
        let mut state = o_only();
        state.start();

        let outcome = state.tick(Some(GameAction::HardDrop), 16);
        assert_eq!(outcome, TickOutcome::Locked { lines_cleared: 0 });
        assert_eq!(state.pieces_locked(), 1);
        assert_eq!(state.active().unwrap().position(), (-1, 8));
        assert_eq!(state.board().occupied_count(), 8);
        assert_eq!(state.ghost().position(), (-1, -8));
    }

    #[test]
    fn test_blocked_spawn_ends_game() {
        let mut state = o_only();
        state.start();
        // Prop the piece up right under the spawn rows.
        state.board_mut().set((-1, 7), Some(Tile::Red));
        state.board_mut().set((0, 7), Some(Tile::Red));

        // The step cannot move it, so it locks in the spawn cells and the next spawn collides.
        let outcome = state.tick(None, 1000);
        assert!(matches!(outcome, TickOutcome::Locked { .. }));
        assert!(state.game_over());
        assert!(state.active().is_none());
        assert_eq!(state.board().occupied_count(), 0);
        assert_eq!(state.ghost().layer().occupied_count(), 0);

        // Nothing moves after game over.
        assert_eq!(state.tick(Some(GameAction::HardDrop), 16), TickOutcome::Falling);
        assert_eq!(state.board().occupied_count(), 0);
    }

    #[test]
    fn test_uncatalogued_kind_ends_game() {
        let mut state = o_only();
        state.start();
        // Queue still deals O, but the catalog no longer knows it.
        state.catalog = TetrominoCatalog::new(&[PieceKind::I]).unwrap();

        assert!(!state.spawn_piece());
        assert!(state.game_over());
        assert!(state.active().is_none());
        assert_eq!(state.board().occupied_count(), 0);
        assert_eq!(state.tick(Some(GameAction::HardDrop), 16), TickOutcome::Falling);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = o_only();
        state.start();
        for _ in 0..20 {
            state.tick(Some(GameAction::HardDrop), 16);
        }
        assert!(state.game_over());

        state.restart();
        assert!(!state.game_over());
        assert_eq!(state.pieces_locked(), 0);
        assert_eq!(state.board().occupied_count(), 4);
    }
}
