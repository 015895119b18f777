//! Console rendering module.
//!
//! The simulator talks to the operator through line-oriented text, not a
//! full-screen UI. Screens are built as styled lines by a pure view and
//! flushed by a small renderer that can target any writer.
//!
//! Goals:
//! - Keep `core` free of formatting and I/O
//! - Byte-exact plain output when stdout is not a terminal
//! - Piece tags in their usual colors when it is

pub mod queue_view;
pub mod renderer;
pub mod text;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use queue_view::{piece_color, QueueView};
pub use renderer::{encode_line_into, ConsoleRenderer};
pub use text::{Line, Rgb, Span, SpanStyle};
