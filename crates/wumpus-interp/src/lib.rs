//! Command interpreter for Hunt the Wumpus.
//!
//! Sits between a line-oriented driver and the game engine: each call to
//! [`Interpreter::input`] takes one line of player text and returns the
//! ordered output lines for that turn. The interpreter owns the engine
//! and all dialogue state; it performs no I/O of its own.

/// The finite-state command interpreter.
pub mod interpreter;
/// The player-facing message catalog.
pub mod msg;

/// Re-export the interpreter and its input sentinel.
pub use interpreter::{Interpreter, RANDOMIZE};
