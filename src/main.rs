//! Terminal runner (default binary).
//!
//! Drives `GameState` on a fixed 16ms tick. Key presses are queued and at
//! most one command is applied per tick. Configuration comes from
//! `TETRIS_*` environment variables.
//!
//! Nothing is written while the alternate screen is up; a startup line and a
//! session summary go to stderr once the terminal is restored.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tilefall::core::{GameConfig, GameState};
use tilefall::input::{handle_key_event, is_restart, should_quit};
use tilefall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tilefall::types::{GameAction, TICK_MS};

/// Commands buffered beyond this are dropped.
const MAX_PENDING: usize = 8;

/// Running totals across every game of one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct SessionTotals {
    games: u32,
    games_over: u32,
    pieces_locked: u32,
    lines_cleared: u32,
}

impl SessionTotals {
    /// Fold a finished (or abandoned) game into the totals
    fn record(&mut self, game: &GameState) {
        self.games += 1;
        if game.game_over() {
            self.games_over += 1;
        }
        self.pieces_locked += game.pieces_locked();
        self.lines_cleared += game.lines_cleared();
    }

    fn summary(&self) -> String {
        format!(
            "[Game] Exit: {} game(s), {} over, {} pieces locked, {} lines cleared",
            self.games, self.games_over, self.pieces_locked, self.lines_cleared
        )
    }
}

fn startup_line(config: &GameConfig) -> String {
    let pieces: String = config.pieces.iter().map(|k| k.as_str()).collect();
    format!(
        "[Game] Board {}x{}, seed {}, randomizer {:?}, pieces {}",
        config.board_width, config.board_height, config.seed, config.randomizer, pieces
    )
}

fn main() -> Result<()> {
    let config = GameConfig::from_env()?;
    let mut game_state = GameState::new(config)?;
    let mut totals = SessionTotals::default();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game_state, &mut totals);

    // Always try to restore terminal state.
    let _ = term.exit();

    totals.record(&game_state);
    eprintln!("{}", startup_line(game_state.config()));
    eprintln!("{}", totals.summary());
    result
}

fn run(term: &mut TerminalRenderer, game_state: &mut GameState, totals: &mut SessionTotals) -> Result<()> {
    game_state.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut pending: VecDeque<GameAction> = VecDeque::with_capacity(MAX_PENDING);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(game_state, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_restart(key) && game_state.game_over() {
                        totals.record(game_state);
                        game_state.restart();
                        pending.clear();
                    } else if let Some(action) = handle_key_event(key) {
                        if pending.len() < MAX_PENDING {
                            pending.push_back(action);
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            let command = pending.pop_front();
            game_state.tick(command, TICK_MS);
            if game_state.game_over() {
                pending.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilefall::types::PieceKind;

    fn o_game() -> GameState {
        let mut game = GameState::new(GameConfig {
            pieces: vec![PieceKind::O],
            ..GameConfig::default()
        })
        .unwrap();
        game.start();
        game
    }

    #[test]
    fn totals_accumulate_across_restarts() {
        let mut totals = SessionTotals::default();
        let mut game = o_game();
        while !game.game_over() {
            game.tick(Some(GameAction::HardDrop), TICK_MS);
        }
        totals.record(&game);
        game.restart();
        game.tick(Some(GameAction::HardDrop), TICK_MS);
        totals.record(&game);

        assert_eq!(
            totals,
            SessionTotals {
                games: 2,
                games_over: 1,
                pieces_locked: 11,
                lines_cleared: 0,
            }
        );
        assert_eq!(
            totals.summary(),
            "[Game] Exit: 2 game(s), 1 over, 11 pieces locked, 0 lines cleared"
        );
    }

    #[test]
    fn startup_line_lists_piece_letters() {
        let config = GameConfig {
            pieces: vec![PieceKind::I, PieceKind::T],
            ..GameConfig::default()
        };
        assert_eq!(
            startup_line(&config),
            "[Game] Board 10x20, seed 1, randomizer Uniform, pieces it"
        );
    }
}
