//! Terminal presentation layer.
//!
//! Thin glue over the engine: `renderer` owns the terminal session, and
//! `game_view` maps engine state to queued draw commands.

pub mod game_view;
pub mod renderer;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
