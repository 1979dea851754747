//! Player-facing message catalog.
//!
//! The strings reproduce the classic game's output verbatim, misprints
//! and trailing prompt spaces included. Frontends should emit them
//! unchanged.

/// Warning: a super bat is one room away.
pub const BATS_NEARBY: &str = "BATS NEARBY!";

/// A super bat carried the player off.
pub const BAT_SNATCH: &str = "ZAP--SUPER BAT SNATCH! ELSEWHEREVILLE FOR YOU!";

/// The player walked into the wumpus.
pub const BUMPED_WUMPUS: &str = "--- OOPS, BUMPED A WUMPUS!";

/// Reserved output value: the game is over, stop feeding input.
pub const EXIT: &str = "[Exit]";

/// Warning: a pit is one room away.
pub const FEEL_DRAFT: &str = "I FEEL A DRAFT";

/// The player fell into a bottomless pit.
pub const FELL_IN_PIT: &str = "YYYIIIIEEEE... FELL IN PIT";

/// Victory taunt.
pub const GET_YOU_NEXT_TIME: &str = "HEE HEE HEE - THE WUMPUS'LL GETCHA NEXT TIME!!";

/// Victory message.
pub const GOT_THE_WUMPUS: &str = "AHA! YOU GOT THE WUMPUS!";

/// The arrow circled back into the player.
pub const HIT_YOURSELF: &str = "OUCH! ARROW GOT YOU!";

/// Unrecognized or unparsable input.
pub const HUH: &str = "HUH?";

/// Game banner, shown at every game start.
pub const HUNT_THE_WUMPUS: &str = "HUNT THE WUMPUS";

/// A valid-looking action the game rules forbid right now.
pub const IMPOSSIBLE: &str = "NOT POSSIBLE -";

/// The arrow flew its full path without hitting anything.
pub const MISSED: &str = "MISSED";

/// The arrow was aimed back at the room it just came from.
pub const NOT_THAT_CROOKED: &str = "ARROWS AREN'T THAT CROOKED - TRY ANOTHER ROOM";

/// Prompt for the arrow path length.
pub const NUMBER_OF_ROOMS: &str = "N0. OF ROOMS (l-5)? ";

/// The quiver is empty.
pub const OUT_OF_ARROWS: &str = "THAT WAS YOUR LAST ARROW";

/// Prompt for the arrow's next room.
pub const ROOM_NUMBER: &str = "ROOM #? ";

/// Prompt offering a replay with the same placements.
pub const SAME_SETUP: &str = "SAME SET-UP (Y-N)? ";

/// Prompt for the player's next action.
pub const SHOOT_OR_MOVE: &str = "SHOOT OR MOVE (S-M)? ";

/// Warning: the wumpus is one room away.
pub const SMELL_WUMPUS: &str = "I SMELL A WUMPUS!";

/// Prefix for the tunnel list; room numbers follow.
pub const TUNNELS_LEAD_TO: &str = "TUNNELS LEAD TO ";

/// Prompt for the player's destination room.
pub const WHERE_TO: &str = "WHERE TO? ";

/// The wumpus ate the player.
pub const WUMPUS_GOT_YOU: &str = "TSK TSK TSK - WUMPUS GOT YOU";

/// Prefix for the player's location; the room number follows.
pub const YOU_ARE_IN_ROOM: &str = "YOU ARE IN ROOM ";

/// Loss message.
pub const YOU_LOSE: &str = "HA HA HA - YOU LOSE!";
