//! Game state - owns the upcoming-piece queue and the piece generator
//!
//! `StackGame` is created once by the entry point and handed by reference to
//! whatever drives it (the interactive session, tests, benches).

use tracing::{debug, info};

use crate::error::QueueError;
use crate::queue::PieceQueue;
use crate::rng::PieceGenerator;
use crate::types::Piece;

#[derive(Debug, Clone)]
pub struct StackGame {
    queue: PieceQueue,
    generator: PieceGenerator,
}

impl StackGame {
    /// Create a game with an empty queue
    pub fn new(seed: u32) -> Self {
        Self {
            queue: PieceQueue::new(),
            generator: PieceGenerator::new(seed),
        }
    }

    /// Generate and enqueue pieces until the queue is at capacity.
    ///
    /// Performs exactly `capacity` generate+enqueue steps on a fresh queue and
    /// reports each inserted piece to `on_insert`. Returns how many were inserted.
    pub fn fill_with(&mut self, mut on_insert: impl FnMut(Piece)) -> usize {
        let mut inserted = 0;
        for _ in 0..self.queue.capacity() {
            match self.insert() {
                Ok(piece) => {
                    on_insert(piece);
                    inserted += 1;
                }
                Err(err) => {
                    debug!(%err, "fill stopped early");
                    break;
                }
            }
        }
        info!(inserted, seed = self.generator.seed(), "queue initialized");
        inserted
    }

    /// [`fill_with`](Self::fill_with) without a per-piece callback.
    pub fn fill(&mut self) -> usize {
        self.fill_with(|_| {})
    }

    /// Play the front piece.
    pub fn play(&mut self) -> Result<Piece, QueueError> {
        self.queue.dequeue()
    }

    /// Generate a new piece and append it.
    ///
    /// The piece is generated before the capacity check, so a rejected insert
    /// still consumes an id.
    pub fn insert(&mut self) -> Result<Piece, QueueError> {
        let piece = self.generator.generate();
        self.queue.enqueue(piece)?;
        Ok(piece)
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn generator(&self) -> &PieceGenerator {
        &self.generator
    }
}

impl Default for StackGame {
    fn default() -> Self {
        Self::new(1)
    }
}
