//! Mine field - hazard coordinates hidden under empty cells
//!
//! Mines live in board space but are not board terrain: they only ever sit
//! under currently-empty cells, and a falling piece that would land on one
//! detonates the mine instead of locking. When rows are removed by a line
//! clear the surviving mines are remapped to follow the removed-row indices.

use std::collections::HashSet;

use crate::core::board::Board;
use crate::core::rng::SimpleRng;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MINE_TOP_MARGIN};

/// Set of hazard coordinates. The set itself enforces uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MineField {
    mines: HashSet<(i8, i8)>,
}

impl MineField {
    /// Create an empty mine field
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.mines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mines.is_empty()
    }

    pub fn contains(&self, x: i8, y: i8) -> bool {
        self.mines.contains(&(x, y))
    }

    /// Add a mine at (x, y). Returns false if one was already there.
    pub fn insert(&mut self, x: i8, y: i8) -> bool {
        self.mines.insert((x, y))
    }

    /// Remove (detonate) the mine at (x, y), if any
    pub fn remove(&mut self, x: i8, y: i8) -> bool {
        self.mines.remove(&(x, y))
    }

    /// Iterate over all mine coordinates (unordered)
    pub fn iter(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.mines.iter().copied()
    }

    /// Place up to `count` new mines on currently-empty, mine-free cells.
    ///
    /// The two topmost rows are excluded so the piece spawn area stays safe.
    /// Candidates are shuffled and truncated; fewer than `count` candidates
    /// is not an error.
    pub fn spawn(&mut self, board: &Board, count: usize, rng: &mut SimpleRng) {
        let mut candidates: Vec<(i8, i8)> = Vec::new();
        for y in MINE_TOP_MARGIN as i8..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                if !board.is_occupied(x, y) && !self.contains(x, y) {
                    candidates.push((x, y));
                }
            }
        }
        rng.shuffle(&mut candidates);
        for &(x, y) in candidates.iter().take(count) {
            self.mines.insert((x, y));
        }
    }

    /// Remap mine coordinates after a line clear.
    ///
    /// `cleared_rows` holds the pre-compaction indices of the removed rows.
    /// A mine whose row was removed is discarded; every other mine's row is
    /// shifted by the number of removed rows strictly above it.
    pub fn shift_after_clear(&mut self, cleared_rows: &[usize]) {
        if cleared_rows.is_empty() {
            return;
        }
        self.mines = std::mem::take(&mut self.mines)
            .into_iter()
            .filter(|&(_, y)| !cleared_rows.contains(&(y as usize)))
            .map(|(x, y)| {
                let shift = cleared_rows.iter().filter(|&&r| (r as i8) < y).count();
                (x, y - shift as i8)
            })
            .collect();
    }
}
