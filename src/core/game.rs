//! Game state module - the session engine
//!
//! Ties together board, shapes, mines, bag, and scoring. Handles timed
//! gravity, input-driven transforms, locking, mine detonation, line clears,
//! scoring/leveling, and game-over detection. Single-owner and
//! single-threaded: the loop thread mutates it once per tick.

use std::mem;

use arrayvec::ArrayVec;

use crate::core::mines::MineField;
use crate::core::rng::{SevenBag, SimpleRng};
use crate::core::scoring::{gravity_interval_ms, level_for_lines, line_clear_score};
use crate::core::shapes::{base_mask, rotate_cw, ShapeMask};
use crate::core::Board;
use crate::types::{
    PieceKind, BOARD_WIDTH, MINES_INITIAL, MINES_PER_FIVE_LINES, MINE_LINE_INTERVAL,
};

/// Stream decorrelation constant for the mine RNG (golden-ratio word), so
/// mine placement does not mirror the bag shuffle for the same seed.
const MINE_RNG_SALT: u32 = 0x9E37_79B9;

/// Active falling piece: a kind, an oriented 4x4 mask, and an anchor.
///
/// The anchor is the mask's origin in board space; `y` may sit above the
/// visible board while a piece straddles the skyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    mask: ShapeMask,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn anchor (horizontally centered, y = 0) in
    /// its base orientation
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            mask: base_mask(kind),
            x: BOARD_WIDTH as i8 / 2 - 2,
            y: 0,
        }
    }

    /// Current orientation mask
    pub fn mask(&self) -> &ShapeMask {
        &self.mask
    }

    /// Absolute board coordinates of the four occupied cells
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        let mut out = ArrayVec::new();
        for (r, row) in self.mask.iter().enumerate() {
            for (c, &filled) in row.iter().enumerate() {
                if filled {
                    out.push((self.x + c as i8, self.y + r as i8));
                }
            }
        }
        out
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    mines: MineField,
    hazards: bool,
    bag: SevenBag,
    mine_rng: SimpleRng,
    current: Piece,
    next: Piece,
    score: u32,
    level: u32,
    lines: u32,
    drop_ms: u32,
    fall_timer_ms: u32,
    running: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new session. `hazards` enables the mine mechanic; with it
    /// off the engine plays plain Tetris on the same code path.
    pub fn new(seed: u32, hazards: bool) -> Self {
        let mut bag = SevenBag::new(seed);
        let mut mine_rng = SimpleRng::new(seed ^ MINE_RNG_SALT);
        let board = Board::new();
        let mut mines = MineField::new();
        if hazards {
            mines.spawn(&board, MINES_INITIAL, &mut mine_rng);
        }
        let current = Piece::spawn(bag.draw());
        let next = Piece::spawn(bag.draw());

        Self {
            board,
            mines,
            hazards,
            bag,
            mine_rng,
            current,
            next,
            score: 0,
            level: 1,
            lines: 0,
            drop_ms: gravity_interval_ms(1),
            fall_timer_ms: 0,
            running: true,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mines(&self) -> &MineField {
        &self.mines
    }

    pub fn hazards_enabled(&self) -> bool {
        self.hazards
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    /// Next piece for preview rendering (kind and base mask)
    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current gravity interval (for display/tests)
    pub fn gravity_ms(&self) -> u32 {
        self.drop_ms
    }

    /// Mines participate in collision only in the hazard variant
    fn collision_mines(&self) -> Option<&MineField> {
        self.hazards.then_some(&self.mines)
    }

    /// Speculatively translate the current piece; commit only if the new
    /// position is legal. Returns whether the move happened.
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let moved = Piece {
            x: self.current.x + dx,
            y: self.current.y + dy,
            ..self.current
        };
        if self.board.collides(&moved.cells(), self.collision_mines()) {
            return false;
        }
        self.current = moved;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.running && self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.running && self.try_move(1, 0)
    }

    /// One input-driven downward step (soft drop)
    pub fn soft_drop_step(&mut self) -> bool {
        self.running && self.try_move(0, 1)
    }

    /// Speculatively rotate the current piece clockwise; the mask is
    /// reverted on collision and the anchor is never adjusted (no kicks).
    pub fn rotate_cw(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let rotated = Piece {
            mask: rotate_cw(&self.current.mask),
            ..self.current
        };
        if self.board.collides(&rotated.cells(), self.collision_mines()) {
            return false;
        }
        self.current = rotated;
        true
    }

    /// Maximal legal downward translation in one step. The piece is not
    /// locked here; locking happens on the next gravity expiry.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.running {
            return 0;
        }
        let mut distance = 0;
        while self.try_move(0, 1) {
            distance += 1;
        }
        distance
    }

    /// Request session termination; the loop stops at the end of the tick
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Advance gravity timing. Call once per frame with the elapsed time;
    /// when the accumulator reaches the gravity interval one downward step
    /// is attempted and, on contact, the landing is resolved.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.running {
            return;
        }
        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms < self.drop_ms {
            return;
        }
        self.fall_timer_ms = 0;

        if self.try_move(0, 1) {
            return;
        }
        self.resolve_landing();
    }

    /// The current piece can no longer fall: detonate mines underneath it,
    /// or lock it and run clearing, scoring, and piece succession.
    fn resolve_landing(&mut self) {
        if self.hazards {
            // Mines directly below the piece's cells. Piece cells are
            // distinct, so the candidates are too.
            let mut hit: ArrayVec<(i8, i8), 4> = ArrayVec::new();
            for (x, y) in self.current.cells() {
                if self.mines.contains(x, y + 1) {
                    hit.push((x, y + 1));
                }
            }
            if !hit.is_empty() {
                // The mine is consumed, not the piece: it stays airborne at
                // its pre-move position until the next gravity expiry.
                for (x, y) in hit {
                    self.mines.remove(x, y);
                }
                return;
            }
        }

        self.board.lock(&self.current.cells(), self.current.kind);

        let cleared_rows = self.board.clear_full_rows();
        if self.hazards {
            self.mines.shift_after_clear(&cleared_rows);
        }

        let cleared = cleared_rows.len();
        if cleared > 0 {
            // Score uses the level in effect before this clear.
            self.score += line_clear_score(cleared, self.level);
            self.lines += cleared as u32;
            self.level = level_for_lines(self.lines);
            self.drop_ms = gravity_interval_ms(self.level);
            if self.hazards && self.lines % MINE_LINE_INTERVAL == 0 {
                self.mines
                    .spawn(&self.board, MINES_PER_FIVE_LINES, &mut self.mine_rng);
            }
        }

        self.advance_piece();
    }

    /// Promote the lookahead piece and draw a fresh one; a spawn collision
    /// is the terminal game-over transition.
    fn advance_piece(&mut self) {
        self.current = mem::replace(&mut self.next, Piece::spawn(self.bag.draw()));
        if self
            .board
            .collides(&self.current.cells(), self.collision_mines())
        {
            self.game_over = true;
            self.running = false;
        }
    }
}
