//! Queue errors.
//!
//! Both variants are recoverable: the operation is a no-op and the `Display`
//! text is what the operator sees.

use thiserror::Error;

use crate::types::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Enqueue attempted with every slot occupied.
    #[error("ERROR: The piece queue is full. Cannot insert more.")]
    Full { rejected: Piece },

    /// Dequeue attempted with no pieces stored.
    #[error("ERROR: The piece queue is empty! No pieces to play.")]
    Empty,
}
