//! Terminal runner for mine-tetris.
//!
//! Fixed-rate loop: render, poll input until the next tick boundary, apply
//! actions, then advance gravity by one tick. `--classic` disables the mine
//! hazard variant.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use mine_tetris::core::GameState;
use mine_tetris::input::map_key;
use mine_tetris::term::{GameView, TerminalRenderer};
use mine_tetris::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let hazards = !std::env::args().any(|arg| arg == "--classic");
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, hazards);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u32, hazards: bool) -> Result<()> {
    let mut state = GameState::new(seed, hazards);
    let view = GameView;

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    while state.running() {
        term.draw(&view, &state)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match map_key(key) {
                        Some(GameAction::MoveLeft) => {
                            state.move_left();
                        }
                        Some(GameAction::MoveRight) => {
                            state.move_right();
                        }
                        Some(GameAction::SoftDrop) => {
                            state.soft_drop_step();
                        }
                        Some(GameAction::RotateCw) => {
                            state.rotate_cw();
                        }
                        Some(GameAction::HardDrop) => {
                            state.hard_drop();
                        }
                        Some(GameAction::Quit) => state.quit(),
                        None => {}
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            state.tick(TICK_MS);
        }
    }

    if state.game_over() {
        // Leave the final frame up until the player acknowledges it.
        term.draw(&view, &state)?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    break;
                }
            }
        }
    }

    Ok(())
}
