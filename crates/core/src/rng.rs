//! RNG module - uniform random piece generation
//!
//! Each generated piece gets a kind drawn uniformly from the 7-symbol
//! alphabet and the next id from a monotonic counter.
//!
//! The LCG is deterministic for a given seed, which keeps tests reproducible.

use tracing::debug;

use crate::types::{Piece, PieceKind, FIRST_PIECE_ID, PIECE_ALPHABET};

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
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }
}

/// Piece factory: uniform kind selection plus the process-wide id counter.
///
/// Ids start at [`FIRST_PIECE_ID`] and are never reused, even when the piece
/// they were assigned to is rejected by a full queue.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    next_id: u64,
    seed: u32,
}

impl PieceGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: FIRST_PIECE_ID,
            seed,
        }
    }

    /// Generate the next piece, advancing the id counter
    pub fn generate(&mut self) -> Piece {
        let kind = self.draw_kind();
        let id = self.next_id;
        self.next_id += 1;
        debug!(kind = %kind, id, "generated piece");
        Piece::new(kind, id)
    }

    fn draw_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PIECE_ALPHABET.len() as u32) as usize;
        PIECE_ALPHABET[idx]
    }

    /// Id the next generated piece will receive
    pub fn peek_next_id(&self) -> u64 {
        self.next_id
    }

    /// Number of pieces generated so far
    pub fn generated(&self) -> u64 {
        self.next_id - FIRST_PIECE_ID
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
