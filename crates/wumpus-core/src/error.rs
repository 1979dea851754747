//! Error types for the game engine.

use thiserror::Error;

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors signalled by engine operations.
///
/// Each one means "this specific action is invalid right now"; none is
/// fatal. Operations validate before mutating, so a returned error leaves
/// the game state untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Room number outside the cave (valid rooms are 1-20).
    #[error("no such room: {0}")]
    NoSuchRoom(i32),

    /// The target room exists but is not connected to the source room.
    #[error("rooms {0} and {1} are not connected")]
    RoomsNotConnected(i32, i32),

    /// The player is dead and cannot move.
    #[error("the player is dead")]
    PlayerDead,

    /// An arrow is already in flight.
    #[error("an arrow is already prepared")]
    ArrowAlreadyPrepared,

    /// No arrows left in the quiver.
    #[error("out of arrows")]
    OutOfArrows,

    /// Path length outside 1-5, or an arrow move with no arrow in flight.
    #[error("arrow path length out of range")]
    ArrowPathLength,

    /// The arrow was aimed back at the room it just came from.
    #[error("arrows cannot double back")]
    ArrowDoubleBack,
}
