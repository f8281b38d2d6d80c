//! Integration tests for the game session

use std::collections::HashMap;

use tilefall::core::{ConfigError, GameConfig, GameState, Randomizer, TickOutcome};
use tilefall::types::{GameAction, PieceKind, Tile, TICK_MS};

fn config_with(pieces: &[PieceKind]) -> GameConfig {
    GameConfig {
        pieces: pieces.to_vec(),
        ..GameConfig::default()
    }
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::default();
    assert!(!state.started());
    assert!(state.active().is_none());

    state.start();
    assert!(state.started());
    assert!(state.active().is_some());
    assert!(!state.game_over());
    assert_eq!(state.board().occupied_count(), 4);
}

#[test]
fn test_o_piece_end_to_end() {
    let mut state = GameState::new(config_with(&[PieceKind::O])).unwrap();
    state.start();

    for _ in 0..18 {
        assert_eq!(state.tick(None, 1000), TickOutcome::Falling);
    }
    assert_eq!(state.active().unwrap().position(), (-1, -10));

    assert_eq!(
        state.tick(None, 1000),
        TickOutcome::Locked { lines_cleared: 0 }
    );
    for cell in [(-1, -10), (0, -10), (-1, -9), (0, -9)] {
        assert_eq!(state.board().get(cell), Some(Tile::Yellow));
    }
    // Next piece already in play at the spawn point.
    assert_eq!(state.active().unwrap().position(), (-1, 8));
    assert_eq!(state.board().occupied_count(), 8);
}

#[test]
fn test_real_tick_cadence() {
    let mut state = GameState::new(config_with(&[PieceKind::T])).unwrap();
    state.start();

    // 62 ticks of 16ms stay under one step.
    for _ in 0..62 {
        state.tick(None, TICK_MS);
    }
    assert_eq!(state.active().unwrap().position(), (-1, 8));
    state.tick(None, TICK_MS);
    assert_eq!(state.active().unwrap().position(), (-1, 7));
}

#[test]
fn test_five_o_pieces_clear_two_rows() {
    let mut state = GameState::new(config_with(&[PieceKind::O])).unwrap();
    state.start();

    // Fill the bottom two rows with five O pieces, columns -5..5.
    for target_x in [-5, -3, -1, 1, 3] {
        let x = state.active().unwrap().position().0;
        let action = if target_x < x {
            GameAction::MoveLeft
        } else {
            GameAction::MoveRight
        };
        for _ in 0..(target_x - x).abs() {
            state.tick(Some(action), TICK_MS);
        }
        state.tick(Some(GameAction::HardDrop), TICK_MS);
    }

    assert_eq!(state.lines_cleared(), 2);
    assert_eq!(state.pieces_locked(), 5);
    // Only the freshly spawned piece remains.
    assert_eq!(state.board().occupied_count(), 4);
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    let mut state = GameState::new(config_with(&[PieceKind::O])).unwrap();
    state.start();

    let mut drops = 0;
    while !state.game_over() {
        state.tick(Some(GameAction::HardDrop), TICK_MS);
        drops += 1;
        assert!(drops <= 10, "game should end once the column is full");
    }

    assert_eq!(drops, 10);
    assert_eq!(state.board().occupied_count(), 0);
    assert!(state.active().is_none());

    // Inert until restarted.
    assert_eq!(state.tick(Some(GameAction::MoveLeft), TICK_MS), TickOutcome::Falling);

    state.restart();
    assert!(!state.game_over());
    assert_eq!(state.lines_cleared(), 0);
    assert_eq!(state.board().occupied_count(), 4);
}

#[test]
fn test_same_seed_replays_same_game() {
    let config = GameConfig {
        seed: 4242,
        randomizer: Randomizer::Bag,
        ..GameConfig::default()
    };
    let script = [
        Some(GameAction::MoveLeft),
        Some(GameAction::RotateCw),
        None,
        Some(GameAction::HardDrop),
        Some(GameAction::MoveRight),
        Some(GameAction::RotateCcw),
        Some(GameAction::HardDrop),
    ];

    let mut a = GameState::new(config.clone()).unwrap();
    let mut b = GameState::new(config).unwrap();
    a.start();
    b.start();
    for _ in 0..5 {
        for command in script {
            assert_eq!(a.tick(command, 100), b.tick(command, 100));
        }
    }
    assert_eq!(a.board(), b.board());
    assert_eq!(a.next_kind(), b.next_kind());
}

#[test]
fn test_custom_board_size() {
    let config = GameConfig {
        board_width: 6,
        board_height: 8,
        spawn_position: GameConfig::default_spawn(8),
        pieces: vec![PieceKind::I],
        ..GameConfig::default()
    };
    let mut state = GameState::new(config).unwrap();
    state.start();
    assert_eq!(state.active().unwrap().position(), (-1, 2));

    state.tick(Some(GameAction::HardDrop), TICK_MS);
    // Cells sit one row above the origin, so the origin ends below the floor row.
    for x in -2..2 {
        assert_eq!(state.board().get((x, -4)), Some(Tile::Cyan));
    }
    assert!(!state.board().is_line_full(-4));
    assert_eq!(state.pieces_locked(), 1);
}

#[test]
fn test_config_from_lookup() {
    let vars: HashMap<&str, &str> = [
        ("TETRIS_BOARD_WIDTH", "8"),
        ("TETRIS_BOARD_HEIGHT", "16"),
        ("TETRIS_SEED", "7"),
        ("TETRIS_RANDOMIZER", "bag"),
        ("TETRIS_PIECES", "IOT"),
    ]
    .into_iter()
    .collect();

    let config = GameConfig::from_lookup(|k: &str| vars.get(k).map(|v| v.to_string())).unwrap();
    assert_eq!((config.board_width, config.board_height), (8, 16));
    assert_eq!(config.spawn_position, (-1, 6));
    assert_eq!(config.seed, 7);
    assert_eq!(config.randomizer, Randomizer::Bag);
    assert_eq!(config.pieces, vec![PieceKind::I, PieceKind::O, PieceKind::T]);
    assert!(GameState::new(config).is_ok());
}

#[test]
fn test_bad_env_value_is_reported() {
    let err = GameConfig::from_lookup(|k: &str| {
        (k == "TETRIS_STEP_DELAY_MS").then(|| "soon".to_string())
    })
    .unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidEnv {
            var: "TETRIS_STEP_DELAY_MS",
            value: "soon".to_string()
        }
    );
}

#[test]
fn test_oversized_board_is_rejected_at_construction() {
    let err = GameState::new(GameConfig {
        board_width: 40000,
        board_height: 4,
        spawn_position: (-1, 0),
        ..GameConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::BoardTooLarge { width: 40000, .. }));

    let err = GameConfig::from_lookup(|k: &str| {
        (k == "TETRIS_BOARD_WIDTH").then(|| "40000".to_string())
    })
    .and_then(|config| config.validate())
    .unwrap_err();
    assert!(matches!(err, ConfigError::BoardTooLarge { .. }));
}
