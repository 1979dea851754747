//! The game engine: all mutable world state and its transitions.
//!
//! One `GameEngine` instance is a single game. Placement happens either
//! randomly ([`GameEngine::random_placements`]) or through the explicit
//! setters used by deterministic tests. Mutating operations validate
//! their input first and return an ordered list of [`Event`]s; invalid
//! input yields exactly one [`GameError`] with no partial state change.

use crate::cave;
use crate::error::{GameError, GameResult};
use crate::event::Event;
use crate::rng::RandomSource;

/// Arrows in the player's quiver at the start of a game.
pub const MAX_ARROWS: i32 = 5;

/// Longest path an arrow can be sent along.
pub const MAX_ARROW_PATH: i32 = 5;

/// Bat-snatch chains longer than this are cut short. Termination of the
/// snatch cascade is only probabilistic; a pathological random source
/// could bounce the player between bat rooms forever.
const MAX_SNATCH_CHAIN: u32 = 64;

/// Sentinel for hazard slots that have not been placed yet. 0 is outside
/// the cave, so it never matches a player, wumpus, or arrow room.
const UNPLACED: i32 = 0;

/// The mutable world state of one game.
pub struct GameEngine {
    rng: Box<dyn RandomSource>,
    initial_player_room: i32,
    initial_wumpus_room: i32,
    player_alive: bool,
    wumpus_alive: bool,
    player_room: i32,
    wumpus_room: i32,
    bat_rooms: [i32; 2],
    pit_rooms: [i32; 2],
    arrows_remaining: i32,
    arrow_moves_remaining: i32,
    arrow_room: i32,
    prev_arrow_room: i32,
}

impl GameEngine {
    /// A fresh engine with nothing placed yet.
    ///
    /// Call [`random_placements`](Self::random_placements) or the setters
    /// before playing.
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            rng,
            initial_player_room: UNPLACED,
            initial_wumpus_room: UNPLACED,
            player_alive: true,
            wumpus_alive: true,
            player_room: UNPLACED,
            wumpus_room: UNPLACED,
            bat_rooms: [UNPLACED; 2],
            pit_rooms: [UNPLACED; 2],
            arrows_remaining: MAX_ARROWS,
            arrow_moves_remaining: 0,
            arrow_room: UNPLACED,
            prev_arrow_room: UNPLACED,
        }
    }

    fn reset(&mut self) {
        self.player_alive = true;
        self.wumpus_alive = true;
        self.arrows_remaining = MAX_ARROWS;
        self.arrow_moves_remaining = 0;
    }

    fn draw_room(&mut self) -> i32 {
        self.rng.next_int(cave::MIN_ROOM, cave::MAX_ROOM)
    }

    /// Place everything at random and resolve the player's entry.
    ///
    /// Six independent draws in room order: player, wumpus, two bats, two
    /// pits. Draws may coincide — the player can start in the wumpus's
    /// room, a bat can sit over a pit, and so on. The player and wumpus
    /// rooms are recorded for [`replay`](Self::replay). Entry hazards can
    /// fire immediately, so this can kill the player before the first turn.
    pub fn random_placements(&mut self) -> Vec<Event> {
        self.reset();
        self.initial_player_room = self.draw_room();
        self.initial_wumpus_room = self.draw_room();
        self.wumpus_room = self.initial_wumpus_room;
        self.bat_rooms = [self.draw_room(), self.draw_room()];
        self.pit_rooms = [self.draw_room(), self.draw_room()];
        self.place_player(self.initial_player_room, 0)
    }

    /// Put the player in `room` without resolving entry hazards.
    pub fn set_player_room(&mut self, room: i32) -> GameResult<()> {
        cave::validate_room(room)?;
        self.player_room = room;
        Ok(())
    }

    /// Put the wumpus in `room`.
    pub fn set_wumpus_room(&mut self, room: i32) -> GameResult<()> {
        cave::validate_room(room)?;
        self.wumpus_room = room;
        Ok(())
    }

    /// Put the two super bats in `room1` and `room2`.
    pub fn set_bat_rooms(&mut self, room1: i32, room2: i32) -> GameResult<()> {
        cave::validate_room(room1)?;
        cave::validate_room(room2)?;
        self.bat_rooms = [room1, room2];
        Ok(())
    }

    /// Put the two pits in `room1` and `room2`.
    pub fn set_pit_rooms(&mut self, room1: i32, room2: i32) -> GameResult<()> {
        cave::validate_room(room1)?;
        cave::validate_room(room2)?;
        self.pit_rooms = [room1, room2];
        Ok(())
    }

    /// Walk the player into an adjacent room and resolve entry hazards.
    pub fn move_player(&mut self, room: i32) -> GameResult<Vec<Event>> {
        if !self.player_alive {
            return Err(GameError::PlayerDead);
        }
        cave::validate_room(room)?;
        if !cave::are_connected(self.player_room, room) {
            return Err(GameError::RoomsNotConnected(self.player_room, room));
        }
        Ok(self.place_player(room, 0))
    }

    /// Entry-hazard resolution. Invoked whenever the player's room changes
    /// by any means. The room classes are not mutually exclusive; the
    /// precedence is wumpus+bat, wumpus+pit, wumpus, bat, pit, with each
    /// branch short-circuiting once the player is dead.
    fn place_player(&mut self, room: i32, snatch_depth: u32) -> Vec<Event> {
        self.player_room = room;

        let in_wumpus_room = room == self.wumpus_room;
        let in_bat_room = self.bat_rooms.contains(&room);
        let in_pit_room = self.pit_rooms.contains(&room);

        if in_wumpus_room && in_bat_room {
            return self.bumped_wumpus_in_bat_room(snatch_depth);
        }
        if in_wumpus_room && in_pit_room {
            return self.bumped_wumpus_in_pit_room();
        }
        if in_wumpus_room {
            return self.bumped_wumpus();
        }
        if in_bat_room {
            return self.bat_snatch(snatch_depth);
        }
        if in_pit_room {
            return self.fell_in_pit();
        }
        Vec::new()
    }

    fn bumped_wumpus_in_bat_room(&mut self, snatch_depth: u32) -> Vec<Event> {
        let mut events = vec![Event::BumpedWumpus];
        events.extend(self.bat_snatch(snatch_depth));
        if self.player_alive {
            events.extend(self.move_wumpus());
        }
        events
    }

    fn bumped_wumpus_in_pit_room(&mut self) -> Vec<Event> {
        let mut events = self.bumped_wumpus();
        if self.player_alive {
            events.extend(self.fell_in_pit());
        }
        events
    }

    fn bumped_wumpus(&mut self) -> Vec<Event> {
        let mut events = vec![Event::BumpedWumpus];
        events.extend(self.move_wumpus());
        events
    }

    /// One uniform draw over 4 outcomes: indices 0-2 step to that neighbor
    /// of the wumpus's room, index 3 holds still. A wumpus that ends up in
    /// the player's room eats the player.
    fn move_wumpus(&mut self) -> Vec<Event> {
        let index = self.rng.next_int(0, 3);
        if let Ok(neighbors) = cave::connected_rooms(self.wumpus_room) {
            if let Some(&room) = neighbors.get(index as usize) {
                self.wumpus_room = room;
            }
        }

        if self.wumpus_room == self.player_room {
            self.player_alive = false;
            return vec![Event::EatenByWumpus];
        }
        Vec::new()
    }

    fn bat_snatch(&mut self, snatch_depth: u32) -> Vec<Event> {
        let mut events = vec![Event::BatSnatch];
        if snatch_depth >= MAX_SNATCH_CHAIN {
            return events;
        }
        let room = self.draw_room();
        events.extend(self.place_player(room, snatch_depth + 1));
        events
    }

    fn fell_in_pit(&mut self) -> Vec<Event> {
        self.player_alive = false;
        vec![Event::FellInPit]
    }

    /// Nock an arrow for a flight of `path_length` rooms.
    pub fn prepare_arrow(&mut self, path_length: i32) -> GameResult<()> {
        if self.arrow_moves_remaining > 0 {
            return Err(GameError::ArrowAlreadyPrepared);
        }
        if self.arrows_remaining == 0 {
            return Err(GameError::OutOfArrows);
        }
        if !(1..=MAX_ARROW_PATH).contains(&path_length) {
            return Err(GameError::ArrowPathLength);
        }

        self.arrows_remaining -= 1;
        self.arrow_moves_remaining = path_length;
        self.arrow_room = self.player_room;
        self.prev_arrow_room = self.player_room;
        Ok(())
    }

    /// Guide the in-flight arrow one hop.
    ///
    /// An empty event list means the flight continues; otherwise it ended
    /// with a self-hit, a kill, or a miss (a miss triggers a wumpus move,
    /// which can itself kill the player).
    pub fn move_arrow(&mut self, room: i32) -> GameResult<Vec<Event>> {
        if self.arrow_moves_remaining <= 0 {
            return Err(GameError::ArrowPathLength);
        }
        cave::validate_room(room)?;
        if !cave::are_connected(self.arrow_room, room) {
            return Err(GameError::RoomsNotConnected(self.arrow_room, room));
        }
        if room == self.prev_arrow_room {
            return Err(GameError::ArrowDoubleBack);
        }

        self.arrow_moves_remaining -= 1;
        self.prev_arrow_room = self.arrow_room;
        self.arrow_room = room;

        if self.arrow_room == self.player_room {
            return Ok(self.shot_self());
        }
        if self.arrow_room == self.wumpus_room {
            return Ok(self.shot_wumpus());
        }
        if self.arrow_moves_remaining == 0 {
            return Ok(self.missed_wumpus());
        }
        Ok(Vec::new())
    }

    fn shot_self(&mut self) -> Vec<Event> {
        self.player_alive = false;
        self.arrow_moves_remaining = 0;
        vec![Event::ShotSelf]
    }

    fn shot_wumpus(&mut self) -> Vec<Event> {
        self.wumpus_alive = false;
        self.arrow_moves_remaining = 0;
        vec![Event::KilledWumpus]
    }

    fn missed_wumpus(&mut self) -> Vec<Event> {
        let mut events = vec![Event::MissedWumpus];
        events.extend(self.move_wumpus());
        events
    }

    /// Start over with the placements of the most recent
    /// [`random_placements`](Self::random_placements) or
    /// [`restart`](Self::restart).
    ///
    /// Restores the wumpus to its initial room, refills the quiver, and
    /// re-resolves the player's entry into the initial player room.
    pub fn replay(&mut self) -> Vec<Event> {
        self.reset();
        self.wumpus_room = self.initial_wumpus_room;
        self.place_player(self.initial_player_room, 0)
    }

    /// Start over with a fresh random cave setup.
    pub fn restart(&mut self) -> Vec<Event> {
        self.reset();
        self.random_placements()
    }

    /// Whether the player is alive.
    pub fn player_alive(&self) -> bool {
        self.player_alive
    }

    /// The player's current room.
    pub fn player_room(&self) -> i32 {
        self.player_room
    }

    /// The three tunnels out of the player's room.
    pub fn player_connected_rooms(&self) -> GameResult<[i32; 3]> {
        cave::connected_rooms(self.player_room)
    }

    /// Whether the wumpus is one tunnel away from the player.
    pub fn wumpus_adjacent(&self) -> bool {
        cave::are_connected(self.player_room, self.wumpus_room)
    }

    /// Whether a super bat is one tunnel away from the player.
    pub fn bats_adjacent(&self) -> bool {
        self.bat_rooms
            .iter()
            .any(|&bat| cave::are_connected(self.player_room, bat))
    }

    /// Whether a pit is one tunnel away from the player.
    pub fn pit_adjacent(&self) -> bool {
        self.pit_rooms
            .iter()
            .any(|&pit| cave::are_connected(self.player_room, pit))
    }

    /// Whether the wumpus is alive.
    pub fn wumpus_alive(&self) -> bool {
        self.wumpus_alive
    }

    /// The wumpus's current room.
    pub fn wumpus_room(&self) -> i32 {
        self.wumpus_room
    }

    /// The rooms the two super bats occupy.
    pub fn bat_rooms(&self) -> [i32; 2] {
        self.bat_rooms
    }

    /// The rooms the two pits occupy.
    pub fn pit_rooms(&self) -> [i32; 2] {
        self.pit_rooms
    }

    /// Arrows left in the quiver.
    pub fn arrows_remaining(&self) -> i32 {
        self.arrows_remaining
    }

    /// Moves left for the in-flight arrow; 0 means no arrow in flight.
    pub fn arrow_moves_remaining(&self) -> i32 {
        self.arrow_moves_remaining
    }
}
