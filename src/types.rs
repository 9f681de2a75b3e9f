//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const BASE_DROP_MS: u32 = 700;
pub const DROP_STEP_MS: u32 = 50;
pub const DROP_FLOOR_MS: u32 = 100;

/// Mine policy constants
pub const MINES_INITIAL: usize = 6;
pub const MINES_PER_FIVE_LINES: usize = 1;
/// Rows 0..MINE_TOP_MARGIN never receive mines, keeping the spawn area safe.
pub const MINE_TOP_MARGIN: u8 = 2;
pub const MINE_LINE_INTERVAL: u32 = 5;

/// Line clear scoring, indexed by number of rows cleared
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Lines per level step
pub const LINES_PER_LEVEL: u32 = 10;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in canonical order (used to build a fresh bag)
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind).
///
/// Engine logic only inspects occupancy; the kind tag exists for rendering.
pub type Cell = Option<PieceKind>;

/// Game actions driven by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    Quit,
}

impl GameAction {
    /// Convert to string (for logs and debugging)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::Quit => "quit",
        }
    }
}
