use tilefall::core::{GameConfig, GameState};
use tilefall::term::{tile_color, GameView, Viewport};
use tilefall::types::{GameAction, PieceKind, Tile};

fn o_game() -> GameState {
    let mut state = GameState::new(GameConfig {
        pieces: vec![PieceKind::O],
        ..GameConfig::default()
    })
    .unwrap();
    state.start();
    state
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::default();
    let view = GameView::default();

    // 10 cells * 2 columns + border = 22 wide, 20 rows + border = 22 tall.
    let fb = view.render(&state, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_top_row_first() {
    let state = o_game();
    let fb = GameView::default().render(&state, Viewport::new(22, 22));

    // O at (-1, 8) covers board rows 8..=9 -> screen rows 1..=2, columns x=-1,0 -> 9..=12.
    for sy in 1..=2 {
        for sx in 9..=12 {
            let g = fb.get(sx, sy).unwrap();
            assert_eq!(g.ch, '█');
            assert_eq!(g.style.fg, tile_color(Tile::Yellow));
        }
    }
    assert_eq!(fb.get(9, 3).unwrap().ch, ' ');
}

#[test]
fn term_view_draws_ghost_outline_on_floor() {
    let state = o_game();
    let fb = GameView::default().render(&state, Viewport::new(22, 22));

    // Ghost at y=-10..=-9 -> screen rows 19..=20.
    for sy in 19..=20 {
        assert_eq!(fb.get(9, sy).unwrap().ch, '[');
        assert_eq!(fb.get(10, sy).unwrap().ch, ']');
        assert!(fb.get(9, sy).unwrap().style.dim);
    }
}

#[test]
fn term_view_ghost_hidden_under_locked_tiles() {
    let mut state = o_game();
    state.tick(Some(GameAction::HardDrop), 16);
    let fb = GameView::default().render(&state, Viewport::new(22, 22));

    // Locked O occupies the floor; the new ghost sits on top of it.
    assert_eq!(fb.get(9, 20).unwrap().ch, '█');
    assert_eq!(fb.get(9, 18).unwrap().ch, '[');
}

#[test]
fn term_view_shows_game_over_message() {
    let mut state = o_game();
    while !state.game_over() {
        state.tick(Some(GameAction::HardDrop), 16);
    }
    let fb = GameView::default().render(&state, Viewport::new(40, 30));

    let text: String = (0..fb.height())
        .flat_map(|y| fb.row(y).iter().map(|g| g.ch).collect::<Vec<_>>())
        .collect();
    assert!(text.contains("GAME OVER"));
}
