//! Console input module.
//!
//! This module is independent of any terminal backend. It maps typed menu
//! lines into [`crate::types::MenuChoice`] and reads those lines from any
//! buffered reader, so the interactive loop can be driven from stdin or from
//! an in-memory transcript.

pub mod map;
pub mod reader;

pub use tetris_stack_types as types;

pub use map::{parse_choice, split_code, InputError};
pub use reader::MenuReader;
