//! Queue module - bounded circular buffer of upcoming pieces
//!
//! The buffer holds at most [`QUEUE_CAPACITY`] pieces in a fixed array and
//! tracks the oldest element with a `front` cursor plus a live count. The
//! newest element sits at `(front + len - 1) % capacity`.
//!
//! When the last element is removed the cursors reset, so the next insert
//! lands at index 0 again.

use arrayvec::ArrayVec;
use tracing::{debug, warn};

use crate::error::QueueError;
use crate::types::{Piece, QUEUE_CAPACITY};

/// Fixed-capacity FIFO of pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    front: usize,
    len: usize,
}

impl PieceQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            front: 0,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when the slot after `back` wraps onto `front`.
    pub fn is_full(&self) -> bool {
        match self.back_index() {
            Some(back) => (back + 1) % QUEUE_CAPACITY == self.front,
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }

    /// Index of the oldest piece, `None` when empty
    pub fn front_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.front)
    }

    /// Index of the newest piece, `None` when empty
    pub fn back_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| (self.front + self.len - 1) % QUEUE_CAPACITY)
    }

    /// Append a piece at the back.
    ///
    /// On a full queue the piece is handed back in the error and nothing changes.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), QueueError> {
        if self.is_full() {
            warn!(id = piece.id, "enqueue rejected: queue full");
            return Err(QueueError::Full { rejected: piece });
        }

        let back = (self.front + self.len) % QUEUE_CAPACITY;
        self.slots[back] = Some(piece);
        self.len += 1;
        debug!(kind = %piece.kind, id = piece.id, back, len = self.len, "enqueued");
        Ok(())
    }

    /// Remove and return the front piece.
    pub fn dequeue(&mut self) -> Result<Piece, QueueError> {
        let Some(piece) = self.peek() else {
            warn!("dequeue rejected: queue empty");
            return Err(QueueError::Empty);
        };

        self.slots[self.front] = None;
        self.len -= 1;
        if self.len == 0 {
            self.front = 0;
        } else {
            self.front = (self.front + 1) % QUEUE_CAPACITY;
        }
        debug!(kind = %piece.kind, id = piece.id, len = self.len, "dequeued");
        Ok(piece)
    }

    /// Front piece without removing it
    pub fn peek(&self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front]
    }

    /// Walk pieces front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    /// Copy of the live pieces, front to back.
    ///
    /// This is stack-only and does not allocate.
    pub fn snapshot(&self) -> ArrayVec<Piece, QUEUE_CAPACITY> {
        self.iter().collect()
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back iterator over a [`PieceQueue`].
pub struct Iter<'a> {
    queue: &'a PieceQueue,
    offset: usize,
}

impl Iterator for Iter<'_> {
    type Item = Piece;

    fn next(&mut self) -> Option<Piece> {
        while self.offset < self.queue.len {
            let idx = (self.queue.front + self.offset) % QUEUE_CAPACITY;
            self.offset += 1;
            if let Some(piece) = self.queue.slots[idx] {
                return Some(piece);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl<'a> IntoIterator for &'a PieceQueue {
    type Item = Piece;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
