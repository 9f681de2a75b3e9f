//! RNG module - seeded randomness and 7-bag piece generation
//!
//! Implements the "7-bag" randomization used by the piece queue: each bag
//! holds one of every kind, shuffled, and is drawn to exhaustion before a
//! fresh shuffle. Within any 7 draws after a refill every kind appears
//! exactly once. The same LCG also drives mine placement, so a seed fully
//! determines a session.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct SevenBag {
    /// Remaining undealt kinds of the current shuffle cycle
    bag: Vec<PieceKind>,
    rng: SimpleRng,
}

impl SevenBag {
    /// Create a bag generator with the given seed, pre-filled
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            bag: Vec::with_capacity(7),
            rng: SimpleRng::new(seed),
        };
        queue.refill();
        queue
    }

    /// Replace the bag with a fresh shuffled permutation of all 7 kinds
    fn refill(&mut self) {
        self.bag.clear();
        self.bag.extend_from_slice(&PieceKind::ALL);
        self.rng.shuffle(&mut self.bag);
    }

    /// Draw the next piece, refilling first when the bag is exhausted
    pub fn draw(&mut self) -> PieceKind {
        if self.bag.is_empty() {
            self.refill();
        }
        // refill always leaves 7 kinds
        self.bag.pop().unwrap()
    }

    /// Number of undealt kinds left in the current cycle
    pub fn remaining(&self) -> usize {
        self.bag.len()
    }
}
