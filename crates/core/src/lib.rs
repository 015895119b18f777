//! Core queue logic module - pure, deterministic, and testable
//!
//! This module contains the upcoming-piece queue, piece generation, and the
//! game owner that ties them together. It has **zero dependencies** on
//! terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Unit tests for every queue boundary
//! - **Allocation-free**: The queue lives in a fixed-size array
//!
//! # Module Structure
//!
//! - [`queue`]: 5-slot circular buffer with empty/full predicates
//! - [`rng`]: LCG and uniform piece generator with the id counter
//! - [`game`]: `StackGame`, the single owner of queue and generator
//! - [`error`]: recoverable queue errors
//!
//! # Rules
//!
//! - The queue holds exactly 5 pieces; the 6th insert is rejected.
//! - Ids start at 1 and are never reused, including ids of rejected pieces.
//! - Playing from an empty queue is an error, not a panic.
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{QueueError, StackGame};
//!
//! let mut game = StackGame::new(12345);
//! game.fill();
//! assert!(game.queue().is_full());
//!
//! let played = game.play().unwrap();
//! assert_eq!(played.id, 1);
//!
//! let inserted = game.insert().unwrap();
//! assert_eq!(inserted.id, 6);
//! assert!(matches!(game.insert(), Err(QueueError::Full { .. })));
//! ```

pub mod error;
pub mod game;
pub mod queue;
pub mod rng;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use error::QueueError;
pub use game::StackGame;
pub use queue::PieceQueue;
pub use rng::{PieceGenerator, SimpleRng};
