//! GameView: maps engine state into queued terminal draw commands.
//!
//! Layout mirrors the original window: a side panel (next-piece preview,
//! score, level, lines, mine count) on the left, the bordered board on the
//! right. Board cells are two terminal columns wide to compensate for glyph
//! aspect ratio.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};

use crate::core::GameState;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Side panel width in terminal columns
const PANEL_W: u16 = 16;
/// Terminal columns per board cell
const CELL_W: u16 = 2;

fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Rgb { r: 0, g: 240, b: 240 },
        PieceKind::O => Color::Rgb { r: 240, g: 240, b: 0 },
        PieceKind::T => Color::Rgb { r: 160, g: 0, b: 240 },
        PieceKind::S => Color::Rgb { r: 0, g: 240, b: 0 },
        PieceKind::Z => Color::Rgb { r: 240, g: 0, b: 0 },
        PieceKind::J => Color::Rgb { r: 0, g: 0, b: 240 },
        PieceKind::L => Color::Rgb { r: 240, g: 160, b: 0 },
    }
}

#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Queue one full frame for the given state
    pub fn draw<W: Write>(&self, w: &mut W, state: &GameState) -> Result<()> {
        self.draw_panel(w, state)?;
        self.draw_board(w, state)?;
        Ok(())
    }

    fn draw_board<W: Write>(&self, w: &mut W, state: &GameState) -> Result<()> {
        let origin_x = PANEL_W;
        let board_w = BOARD_WIDTH as u16 * CELL_W;
        let piece_cells = state.current().cells();

        // Border
        w.queue(ResetColor)?;
        w.queue(MoveTo(origin_x, 0))?;
        w.queue(Print(format!("+{}+", "-".repeat(board_w as usize))))?;
        w.queue(MoveTo(origin_x, BOARD_HEIGHT as u16 + 1))?;
        w.queue(Print(format!("+{}+", "-".repeat(board_w as usize))))?;

        for y in 0..BOARD_HEIGHT as i8 {
            w.queue(MoveTo(origin_x, y as u16 + 1))?;
            w.queue(ResetColor)?;
            w.queue(Print("|"))?;
            for x in 0..BOARD_WIDTH as i8 {
                if piece_cells.contains(&(x, y)) {
                    w.queue(SetBackgroundColor(kind_color(state.current().kind)))?;
                    w.queue(Print("  "))?;
                } else if let Some(Some(kind)) = state.board().get(x, y) {
                    w.queue(SetBackgroundColor(kind_color(kind)))?;
                    w.queue(Print("  "))?;
                } else if state.hazards_enabled() && state.mines().contains(x, y) {
                    w.queue(ResetColor)?;
                    w.queue(SetForegroundColor(Color::DarkGrey))?;
                    w.queue(Print("><"))?;
                } else {
                    w.queue(ResetColor)?;
                    w.queue(SetForegroundColor(Color::DarkGrey))?;
                    w.queue(Print(" ."))?;
                }
            }
            w.queue(ResetColor)?;
            w.queue(Print("|"))?;
        }
        Ok(())
    }

    fn draw_panel<W: Write>(&self, w: &mut W, state: &GameState) -> Result<()> {
        w.queue(ResetColor)?;
        w.queue(MoveTo(1, 1))?;
        w.queue(Print("Next"))?;

        // 4x4 preview of the next piece's base mask
        let next = state.next_piece();
        for (r, row) in next.mask().iter().enumerate() {
            w.queue(MoveTo(1, 3 + r as u16))?;
            for &filled in row {
                if filled {
                    w.queue(SetBackgroundColor(kind_color(next.kind)))?;
                    w.queue(Print("  "))?;
                    w.queue(ResetColor)?;
                } else {
                    w.queue(Print("  "))?;
                }
            }
        }

        w.queue(MoveTo(1, 9))?;
        w.queue(Print(format!("Score: {}", state.score())))?;
        w.queue(MoveTo(1, 10))?;
        w.queue(Print(format!("Level: {}", state.level())))?;
        w.queue(MoveTo(1, 11))?;
        w.queue(Print(format!("Lines: {}", state.lines())))?;
        if state.hazards_enabled() {
            w.queue(MoveTo(1, 12))?;
            w.queue(Print(format!("Mines: {}", state.mines().len())))?;
        }

        if state.game_over() {
            w.queue(MoveTo(1, 14))?;
            w.queue(SetForegroundColor(Color::Red))?;
            w.queue(Print("GAME OVER"))?;
            w.queue(ResetColor)?;
        }

        w.queue(MoveTo(1, BOARD_HEIGHT as u16))?;
        w.queue(SetForegroundColor(Color::DarkGrey))?;
        w.queue(Print("arrows/space, q"))?;
        w.queue(ResetColor)?;
        Ok(())
    }
}
