//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the simulator.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (queue logic, menu parsing, console rendering).
//!
//! # Queue Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Number of upcoming pieces the queue can hold |
//! | `FIRST_PIECE_ID` | 1 | Id assigned to the first generated piece |
//!
//! The capacity is fixed at compile time. The queue holds exactly
//! `QUEUE_CAPACITY` pieces; the next insert attempt is rejected.
//!
//! # Piece Alphabet
//!
//! Pieces are drawn uniformly from [`PIECE_ALPHABET`]: `T O I L S Z J`.
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{MenuChoice, Piece, PieceKind, PIECE_ALPHABET, QUEUE_CAPACITY};
//!
//! // Pieces are plain value records
//! let kind = PIECE_ALPHABET[0];
//! assert_eq!(kind, PieceKind::T);
//! let piece = Piece::new(kind, 1);
//! assert_eq!(piece.to_string(), "T ID 1");
//!
//! // Menu option codes
//! assert_eq!(MenuChoice::from_code(2), Some(MenuChoice::Insert));
//! assert_eq!(MenuChoice::Exit.code(), 0);
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Number of pieces held by the upcoming-piece queue (5)
pub const QUEUE_CAPACITY: usize = 5;

/// Id of the first piece ever generated in a process
pub const FIRST_PIECE_ID: u64 = 1;

/// The seven piece kinds, in the order the generator indexes them.
pub const PIECE_ALPHABET: [PieceKind; 7] = [
    PieceKind::T,
    PieceKind::O,
    PieceKind::I,
    PieceKind::L,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_defaults() {
        assert_eq!(QUEUE_CAPACITY, 5);
        assert_eq!(FIRST_PIECE_ID, 1);
    }

    #[test]
    fn alphabet_has_each_kind_once() {
        for (i, a) in PIECE_ALPHABET.iter().enumerate() {
            for b in &PIECE_ALPHABET[i + 1..] {
                assert_ne!(a, b);
            }
        }
        let tags: String = PIECE_ALPHABET.iter().map(|k| k.as_char()).collect();
        assert_eq!(tags, "TOILSZJ");
    }

    #[test]
    fn piece_display_matches_queue_dump_format() {
        assert_eq!(Piece::new(PieceKind::Z, 42).to_string(), "Z ID 42");
    }

    #[test]
    fn menu_codes() {
        assert_eq!(MenuChoice::from_code(0), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_code(1), Some(MenuChoice::Play));
        assert_eq!(MenuChoice::from_code(2), Some(MenuChoice::Insert));
        assert_eq!(MenuChoice::from_code(3), None);
        assert_eq!(MenuChoice::from_code(-1), None);
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::from_code(choice.code()), Some(choice));
        }
    }
}

/// The seven tetromino piece kinds
///
/// - **I**: horizontal bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
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
    /// Uppercase one-letter tag
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::L.as_char(), 'L');
    /// ```
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An upcoming piece: a kind plus the process-unique id it was generated with.
///
/// Pieces are immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ID {}", self.kind, self.id)
    }
}

/// Menu options offered by the interactive loop
///
/// Each option has a fixed numeric code typed by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Remove the front piece (code 1)
    Play,
    /// Generate a new piece and append it (code 2)
    Insert,
    /// Leave the simulator (code 0)
    Exit,
}

impl MenuChoice {
    /// Options in the order the menu lists them.
    pub const ALL: [MenuChoice; 3] = [MenuChoice::Play, MenuChoice::Insert, MenuChoice::Exit];

    /// Map a typed numeric code to an option
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::MenuChoice;
    ///
    /// assert_eq!(MenuChoice::from_code(1), Some(MenuChoice::Play));
    /// assert_eq!(MenuChoice::from_code(9), None);
    /// ```
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(MenuChoice::Play),
            2 => Some(MenuChoice::Insert),
            0 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Numeric code the operator types for this option
    pub fn code(&self) -> i64 {
        match self {
            MenuChoice::Play => 1,
            MenuChoice::Insert => 2,
            MenuChoice::Exit => 0,
        }
    }

    /// Menu line label
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Play => "Play piece (dequeue)",
            MenuChoice::Insert => "Insert new piece (enqueue)",
            MenuChoice::Exit => "Exit",
        }
    }
}
