//! Game engine for Hunt the Wumpus.
//!
//! This crate owns the world model: the fixed 20-room cave graph, the
//! mutable game state (player, wumpus, bats, pits, arrows), and the
//! turn-by-turn state transitions. Every mutating operation returns the
//! [`Event`]s it produced, in causal order, for a frontend to render.
//! The crate performs no I/O; randomness comes in through the
//! [`RandomSource`] capability so games can be replayed deterministically.

/// The fixed dodecahedral cave topology.
pub mod cave;
/// The game engine: world state and its transitions.
pub mod engine;
/// Error types used throughout the crate.
pub mod error;
/// Domain events produced by engine operations.
pub mod event;
/// The injected random-number capability.
pub mod rng;

/// Re-export the engine.
pub use engine::GameEngine;
/// Re-export error types.
pub use error::{GameError, GameResult};
/// Re-export the event type.
pub use event::Event;
/// Re-export random sources.
pub use rng::{GameRandomSource, RandomSource, ScriptedRandomSource};
