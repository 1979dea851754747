//! Domain events produced by engine operations.

/// A game-world occurrence produced by one engine operation.
///
/// Operations return events in strict causal order (cause before effect).
/// The set is closed; frontends map each variant to exactly one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The player walked into the wumpus's room.
    BumpedWumpus,
    /// The wumpus ended its move in the player's room; the player is dead.
    EatenByWumpus,
    /// A super bat carried the player to a random room.
    BatSnatch,
    /// The player fell into a bottomless pit; the player is dead.
    FellInPit,
    /// The arrow ran out of moves without hitting anything.
    MissedWumpus,
    /// The arrow hit the wumpus; the hunt is over.
    KilledWumpus,
    /// The arrow circled back into the player's room; the player is dead.
    ShotSelf,
}
