//! RNG module - deterministic piece generation
//!
//! Provides a simple LCG for deterministic shape selection and the
//! `PieceGenerator` that stamps each new piece with the next session id.
//! The id counter is owned by the caller (the game state) and threaded
//! through every generation call; there is no process-wide counter.

use crate::types::{Piece, ALL_KINDS};

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Generates pieces with a uniformly random kind and a caller-supplied id
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
}

impl PieceGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Generate a new piece.
    ///
    /// The id is read from `next_id`, which is then advanced by one.
    /// Ids over a session are therefore strictly increasing by exactly 1
    /// per call, starting from whatever the counter held at construction.
    pub fn generate(&mut self, next_id: &mut u32) -> Piece {
        let kind = ALL_KINDS[self.rng.next_range(ALL_KINDS.len() as u32) as usize];
        let id = *next_id;
        *next_id += 1;
        Piece::new(kind, id)
    }
}
