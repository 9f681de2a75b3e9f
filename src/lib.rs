//! Terminal Tetris with a minesweeper hazard twist.
//!
//! The `core` module is the game-state engine (board, pieces, mines, bag,
//! scoring, session). `term` and `input` are thin presentation glue around it.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
