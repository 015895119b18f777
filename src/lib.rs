//! Tetris Stack (workspace facade crate).
//!
//! Re-exports the `tetris_stack::{core,input,term,types}` API from the crates
//! under `crates/` and hosts the interactive [`session`] loop used by the binary.

pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;

pub mod session;

pub use session::{Flow, Session};
