//! The fixed cave topology: 20 rooms on the vertices of a dodecahedron.
//!
//! Every room is adjacent to exactly 3 others and the adjacency relation
//! is symmetric. The table is the classical Hunt the Wumpus layout; it is
//! literal data, nothing derives it at runtime.

use crate::error::{GameError, GameResult};

/// Lowest valid room number. Rooms are one-based; there is no room 0.
pub const MIN_ROOM: i32 = 1;

/// Highest valid room number.
pub const MAX_ROOM: i32 = 20;

/// Adjacency table indexed by room number. Row 0 is unused padding.
const CONNECTIONS: [[i32; 3]; 21] = [
    [0, 0, 0],
    [2, 5, 8],
    [1, 3, 10],
    [2, 4, 12],
    [3, 5, 14],
    [1, 4, 6],
    [5, 7, 15],
    [6, 8, 17],
    [1, 7, 9],
    [8, 10, 18],
    [2, 9, 11],
    [10, 12, 19],
    [3, 11, 13],
    [12, 14, 20],
    [4, 13, 15],
    [6, 14, 16],
    [15, 17, 20],
    [7, 16, 18],
    [9, 17, 19],
    [11, 18, 20],
    [13, 16, 19],
];

/// Check that `room` lies within the cave.
pub fn validate_room(room: i32) -> GameResult<()> {
    if (MIN_ROOM..=MAX_ROOM).contains(&room) {
        Ok(())
    } else {
        Err(GameError::NoSuchRoom(room))
    }
}

/// The three rooms connected to `room`, in table order.
pub fn connected_rooms(room: i32) -> GameResult<[i32; 3]> {
    validate_room(room)?;
    Ok(CONNECTIONS[room as usize])
}

/// Whether `b` is one of `a`'s three neighbors.
///
/// `a` must be a room the table covers (0..=20); the engine only calls
/// this with rooms it has already validated or with the unplaced
/// sentinel 0, whose row connects to nothing.
pub fn are_connected(a: i32, b: i32) -> bool {
    CONNECTIONS[a as usize].contains(&b)
}
