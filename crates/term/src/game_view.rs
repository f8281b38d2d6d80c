//! GameView: maps a `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameState, TileSurface};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::Tile;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

/// Draws the well, locked and falling tiles, and the ghost outline.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps squares roughly square in most fonts.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, game: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let board = game.board();
        let bounds = board.bounds();
        // Saturate: cells past the u16 screen range are clipped by the framebuffer.
        let well_w = bounds.width.saturating_mul(self.cell_w);
        let frame_w = well_w.saturating_add(2);
        let frame_h = bounds.height.saturating_add(2);

        let left = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_frame(fb, left, top, frame_w, frame_h);

        let ghost = game.ghost().layer();
        // Screen rows run top-down, board rows bottom-up.
        for (screen_row, y) in (bounds.y_min..bounds.y_max()).rev().enumerate() {
            let Some(sy) = screen_offset(top, screen_row, 1) else {
                break;
            };
            if sy >= viewport.height {
                break;
            }
            for (col, x) in (bounds.x_min..bounds.x_max()).enumerate() {
                let Some(sx) = screen_offset(left, col, self.cell_w) else {
                    break;
                };
                if sx >= viewport.width {
                    break;
                }
                let glyph = match board.get((x, y)) {
                    Some(tile) => block(tile_color(tile)),
                    None if ghost.has_cell((x, y)) => ghost_outline(),
                    None => empty(),
                };
                for dx in 0..self.cell_w {
                    let ch = if glyph.ch == '[' && dx + 1 == self.cell_w && self.cell_w > 1 {
                        ']'
                    } else {
                        glyph.ch
                    };
                    fb.set(sx.saturating_add(dx), sy, Glyph { ch, ..glyph });
                }
            }
        }

        if game.game_over() {
            let msg = "GAME OVER - Enter to restart";
            let x = viewport.width.saturating_sub(msg.len() as u16) / 2;
            let y = top
                .saturating_add(frame_h)
                .min(viewport.height.saturating_sub(1));
            fb.put_str(x, y, msg, Style::default());
        }
    }

    pub fn render(&self, game: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style {
            fg: Rgb::new(200, 200, 200),
            ..Style::default()
        };
        let put = |fb: &mut FrameBuffer, px: u16, py: u16, ch: char| {
            fb.set(px, py, Glyph { ch, style });
        };

        let right = x.saturating_add(w.saturating_sub(1));
        let bottom = y.saturating_add(h.saturating_sub(1));

        for px in x.saturating_add(1)..right.min(fb.width()) {
            put(fb, px, y, '─');
            put(fb, px, bottom, '─');
        }
        for py in y.saturating_add(1)..bottom.min(fb.height()) {
            put(fb, x, py, '│');
            put(fb, right, py, '│');
        }
        put(fb, x, y, '┌');
        put(fb, right, y, '┐');
        put(fb, x, bottom, '└');
        put(fb, right, bottom, '┘');
    }
}

/// Screen coordinate of the `index`-th cell after the border at `origin`.
/// `None` once it no longer fits in a `u16`.
fn screen_offset(origin: u16, index: usize, step: u16) -> Option<u16> {
    let offset = u16::try_from(index).ok()?.checked_mul(step)?;
    origin.checked_add(1)?.checked_add(offset)
}

/// Display color for a tile.
pub fn tile_color(tile: Tile) -> Rgb {
    match tile {
        Tile::Cyan => Rgb::new(0, 230, 254),
        Tile::Blue => Rgb::new(24, 1, 255),
        Tile::Orange => Rgb::new(255, 115, 8),
        Tile::Yellow => Rgb::new(255, 222, 0),
        Tile::Green => Rgb::new(102, 253, 0),
        Tile::Purple => Rgb::new(184, 2, 253),
        Tile::Red => Rgb::new(254, 16, 60),
        Tile::Ghost => Rgb::new(140, 140, 140),
    }
}

fn block(color: Rgb) -> Glyph {
    Glyph {
        ch: '█',
        style: Style {
            fg: color,
            bg: WELL_BG,
            dim: false,
        },
    }
}

fn ghost_outline() -> Glyph {
    Glyph {
        ch: '[',
        style: Style {
            fg: tile_color(Tile::Ghost),
            bg: WELL_BG,
            dim: true,
        },
    }
}

fn empty() -> Glyph {
    Glyph {
        ch: ' ',
        style: Style {
            fg: Rgb::new(80, 80, 90),
            bg: WELL_BG,
            dim: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::types::MAX_BOARD_DIMENSION;

    #[test]
    fn every_tile_has_its_own_color() {
        let tiles = [
            Tile::Cyan,
            Tile::Blue,
            Tile::Orange,
            Tile::Yellow,
            Tile::Green,
            Tile::Purple,
            Tile::Red,
            Tile::Ghost,
        ];
        for a in tiles {
            for b in tiles {
                if a != b {
                    assert_ne!(tile_color(a), tile_color(b));
                }
            }
        }
    }

    #[test]
    fn screen_offset_stops_at_u16_range() {
        assert_eq!(screen_offset(3, 4, 2), Some(12));
        assert_eq!(screen_offset(0, 40000, 2), None);
        assert_eq!(screen_offset(u16::MAX, 0, 2), None);
    }

    #[test]
    fn oversized_board_is_clipped_to_viewport() {
        let mut game = GameState::new(GameConfig {
            board_width: MAX_BOARD_DIMENSION,
            board_height: MAX_BOARD_DIMENSION,
            spawn_position: GameConfig::default_spawn(MAX_BOARD_DIMENSION),
            ..GameConfig::default()
        })
        .unwrap();
        game.start();

        let fb = GameView::default().render(&game, Viewport::new(80, 24));
        assert_eq!((fb.width(), fb.height()), (80, 24));
        // Frame is wider and taller than the screen, so it starts at the corner.
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let mut game = GameState::default();
        game.start();
        let fb = GameView::default().render(&game, Viewport::new(3, 2));
        assert_eq!((fb.width(), fb.height()), (3, 2));
    }
}
