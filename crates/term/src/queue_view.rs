//! QueueView: maps queue state and session events into styled lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Display;

use crate::core::PieceQueue;
use crate::text::{Line, Rgb, Span};
use crate::types::{MenuChoice, Piece, PieceKind};

const RULE: &str = "====================================";

const SUCCESS_FG: Rgb = Rgb::new(100, 220, 120);
const ERROR_FG: Rgb = Rgb::new(220, 80, 80);
const HEADER_FG: Rgb = Rgb::new(240, 220, 80);

/// Conventional tetromino palette.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

/// Text layout for the simulator screens.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueueView;

impl QueueView {
    pub fn new() -> Self {
        Self
    }

    pub fn init_banner(&self) -> Vec<Line> {
        vec![
            Line::blank(),
            Line::plain("--- Initializing upcoming piece queue ---"),
        ]
    }

    pub fn initialized(&self, count: usize) -> Vec<Line> {
        vec![Line::plain(format!("Queue initialized with {} pieces.", count))]
    }

    /// Full queue dump: header, pieces front to back, cursor summary.
    pub fn queue(&self, queue: &PieceQueue) -> Vec<Line> {
        let mut lines = vec![
            Line::blank(),
            Line::plain(RULE),
            Line::blank().with(Span::colored("        CURRENT QUEUE STATE", HEADER_FG, true)),
            Line::plain(RULE),
        ];

        match (queue.front_index(), queue.back_index()) {
            (Some(front), Some(back)) => {
                let mut pieces = Line::plain("Piece queue: ");
                for (i, piece) in queue.iter().enumerate() {
                    if i > 0 {
                        pieces.push(Span::plain(" "));
                    }
                    pieces.push(Span::plain("[ "));
                    pieces.push(piece_span(piece));
                    pieces.push(Span::plain(format!(" ID {} ]", piece.id)));
                }
                lines.push(pieces);
                lines.push(Line::plain(format!(
                    "Capacity: {} | Front: {} | Back: {}",
                    queue.capacity(),
                    front,
                    back
                )));
            }
            _ => lines.push(Line::plain("Piece queue is empty.")),
        }

        lines.push(Line::plain(RULE));
        lines
    }

    pub fn inserted(&self, piece: Piece) -> Vec<Line> {
        vec![
            Line::blank(),
            success()
                .with(Span::plain(" Piece "))
                .with(piece_span(piece))
                .with(Span::plain(format!(
                    " (ID {}) inserted at the back of the queue.",
                    piece.id
                ))),
        ]
    }

    pub fn played(&self, piece: Piece) -> Vec<Line> {
        vec![
            Line::blank(),
            success()
                .with(Span::plain(" Piece "))
                .with(piece_span(piece))
                .with(Span::plain(format!(
                    " (ID {}) played (removed from the front).",
                    piece.id
                ))),
        ]
    }

    /// Operator-facing error line.
    pub fn error(&self, err: &impl Display) -> Vec<Line> {
        vec![
            Line::blank(),
            Line::blank().with(Span::colored(err.to_string(), ERROR_FG, false)),
        ]
    }

    pub fn menu(&self) -> Vec<Line> {
        let mut lines = vec![Line::blank(), Line::plain("--- Actions ---")];
        for choice in MenuChoice::ALL {
            lines.push(Line::plain(format!("{} - {}", choice.code(), choice.label())));
        }
        lines
    }

    /// Prompt printed without a line terminator.
    pub fn prompt(&self) -> Line {
        Line::plain("Choose an option: ")
    }

    pub fn invalid_option(&self) -> Vec<Line> {
        vec![
            Line::blank(),
            Line::blank().with(Span::colored("Invalid option! Try again.", ERROR_FG, false)),
        ]
    }

    pub fn farewell(&self) -> Vec<Line> {
        vec![
            Line::blank(),
            Line::plain("Leaving the Tetris Stack simulator..."),
        ]
    }
}

fn success() -> Line {
    Line::blank().with(Span::colored("SUCCESS:", SUCCESS_FG, true))
}

fn piece_span(piece: Piece) -> Span {
    Span::colored(piece.kind.as_char().to_string(), piece_color(piece.kind), true)
}
