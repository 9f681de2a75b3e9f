//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O.

pub mod board;
pub mod game;
pub mod mines;
pub mod rng;
pub mod scoring;
pub mod shapes;

pub use board::Board;
pub use game::{GameState, Piece};
pub use mines::MineField;
pub use rng::{SevenBag, SimpleRng};
pub use shapes::{base_mask, rotate_cw, ShapeMask};
