//! The finite-state command interpreter.
//!
//! One closed set of dialogue states, one transition function per state.
//! Each call to [`Interpreter::input`] dispatches on the current state,
//! runs at most one engine operation, and finishes by appending the
//! resulting state's entry prompt — so an erroneous or empty line always
//! re-shows the prompt the player is stuck at. Errors never change state
//! and never escape: parse failures become [`msg::HUH`], domain errors
//! become [`msg::IMPOSSIBLE`] (except the double-back case, which has its
//! own line).

use wumpus_core::{Event, GameEngine, GameError};

use crate::msg;

/// Reserved first-input sentinel.
///
/// The driver passes this as the very first line to request random
/// placement; it is distinguishable from anything a player can type so a
/// later replay-driven restart is never mistaken for initial setup.
pub const RANDOMIZE: &str = "[Randomize]";

/// The interpreter's position in the command dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Initial,
    AwaitingCommand,
    AwaitingMoveRoom,
    AwaitingArrowPathLength,
    AwaitingArrowRoom,
    AwaitingReplay,
    End,
}

/// Translates lines of player input into engine calls and output lines.
pub struct Interpreter {
    engine: GameEngine,
    state: State,
    output: Vec<String>,
}

impl Interpreter {
    /// An interpreter driving a fresh game on `engine`.
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            state: State::Initial,
            output: Vec::new(),
        }
    }

    /// Read-only access to the engine, for drivers and tests.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Whether the game has ended and further input is ignored.
    pub fn finished(&self) -> bool {
        self.state == State::End
    }

    /// Feed one line of input and collect this turn's output lines.
    ///
    /// The very first call should pass [`RANDOMIZE`]; every later call
    /// passes the player's text, with an empty line meaning "repeat the
    /// current prompt". A batch ending in [`msg::EXIT`] tells the driver
    /// to stop.
    pub fn input(&mut self, line: &str) -> Vec<String> {
        self.state = self.dispatch(line);
        self.entry_message();
        std::mem::take(&mut self.output)
    }

    fn dispatch(&mut self, line: &str) -> State {
        match self.state {
            State::Initial => self.initial(line),
            State::End => State::End,
            _ if line.is_empty() => self.state,
            State::AwaitingCommand => self.awaiting_command(line),
            State::AwaitingMoveRoom => self.awaiting_move_room(line),
            State::AwaitingArrowPathLength => self.awaiting_arrow_path_length(line),
            State::AwaitingArrowRoom => self.awaiting_arrow_room(line),
            State::AwaitingReplay => self.awaiting_replay(line),
        }
    }

    fn entry_message(&mut self) {
        match self.state {
            State::Initial | State::End => {}
            State::AwaitingCommand => self.out(msg::SHOOT_OR_MOVE),
            State::AwaitingMoveRoom => self.out(msg::WHERE_TO),
            State::AwaitingArrowPathLength => self.out(msg::NUMBER_OF_ROOMS),
            State::AwaitingArrowRoom => self.out(msg::ROOM_NUMBER),
            State::AwaitingReplay => self.out(msg::SAME_SETUP),
        }
    }

    fn initial(&mut self, line: &str) -> State {
        self.out(msg::HUNT_THE_WUMPUS);
        let events = if line == RANDOMIZE {
            self.engine.random_placements()
        } else {
            Vec::new()
        };
        self.check_player_state(&events)
    }

    fn awaiting_command(&mut self, line: &str) -> State {
        match line {
            "M" | "m" => State::AwaitingMoveRoom,
            "S" | "s" => State::AwaitingArrowPathLength,
            _ => {
                self.out(msg::HUH);
                State::AwaitingCommand
            }
        }
    }

    fn awaiting_move_room(&mut self, line: &str) -> State {
        let Ok(room) = line.trim().parse::<i32>() else {
            self.out(msg::HUH);
            return State::AwaitingMoveRoom;
        };
        match self.engine.move_player(room) {
            Ok(events) => self.check_player_state(&events),
            Err(_) => {
                self.out(msg::IMPOSSIBLE);
                State::AwaitingMoveRoom
            }
        }
    }

    fn awaiting_arrow_path_length(&mut self, line: &str) -> State {
        let Ok(length) = line.trim().parse::<i32>() else {
            self.out(msg::HUH);
            return State::AwaitingArrowPathLength;
        };
        match self.engine.prepare_arrow(length) {
            Ok(()) => State::AwaitingArrowRoom,
            Err(_) => {
                self.out(msg::IMPOSSIBLE);
                State::AwaitingArrowPathLength
            }
        }
    }

    fn awaiting_arrow_room(&mut self, line: &str) -> State {
        let Ok(room) = line.trim().parse::<i32>() else {
            self.out(msg::HUH);
            return State::AwaitingArrowRoom;
        };
        match self.engine.move_arrow(room) {
            // No events: the flight continues with the next room.
            Ok(events) if events.is_empty() => State::AwaitingArrowRoom,
            Ok(events) => self.check_player_state(&events),
            Err(GameError::ArrowDoubleBack) => {
                self.out(msg::NOT_THAT_CROOKED);
                State::AwaitingArrowRoom
            }
            Err(_) => {
                self.out(msg::IMPOSSIBLE);
                State::AwaitingArrowRoom
            }
        }
    }

    fn awaiting_replay(&mut self, line: &str) -> State {
        let events = match line {
            "Y" | "y" => self.engine.replay(),
            "N" | "n" => self.engine.restart(),
            _ => {
                self.out(msg::HUH);
                return State::AwaitingReplay;
            }
        };
        self.out(msg::HUNT_THE_WUMPUS);
        self.check_player_state(&events)
    }

    /// Shared post-action routine for every engine call that can end the
    /// game: render the events, then decide where the dialogue goes next.
    fn check_player_state(&mut self, events: &[Event]) -> State {
        self.out("");
        self.output_events(events);

        if !self.engine.wumpus_alive() {
            self.wumpus_died()
        } else if !self.engine.player_alive() {
            self.player_died()
        } else if self.engine.arrows_remaining() == 0 {
            self.out_of_arrows()
        } else {
            self.player_still_alive()
        }
    }

    fn wumpus_died(&mut self) -> State {
        self.out(msg::GET_YOU_NEXT_TIME);
        self.out(msg::EXIT);
        State::End
    }

    fn player_died(&mut self) -> State {
        self.out(msg::YOU_LOSE);
        State::AwaitingReplay
    }

    fn out_of_arrows(&mut self) -> State {
        self.out(msg::OUT_OF_ARROWS);
        self.out(msg::YOU_LOSE);
        State::AwaitingReplay
    }

    fn player_still_alive(&mut self) -> State {
        self.output_adjacent_hazards();
        self.output_player_location();
        self.out("");
        State::AwaitingCommand
    }

    fn output_events(&mut self, events: &[Event]) {
        for event in events {
            let text = match event {
                Event::BatSnatch => msg::BAT_SNATCH,
                Event::BumpedWumpus => msg::BUMPED_WUMPUS,
                Event::EatenByWumpus => msg::WUMPUS_GOT_YOU,
                Event::FellInPit => msg::FELL_IN_PIT,
                Event::KilledWumpus => msg::GOT_THE_WUMPUS,
                Event::MissedWumpus => msg::MISSED,
                Event::ShotSelf => msg::HIT_YOURSELF,
            };
            self.out(text);
        }
    }

    fn output_adjacent_hazards(&mut self) {
        if self.engine.wumpus_adjacent() {
            self.out(msg::SMELL_WUMPUS);
        }
        if self.engine.bats_adjacent() {
            self.out(msg::BATS_NEARBY);
        }
        if self.engine.pit_adjacent() {
            self.out(msg::FEEL_DRAFT);
        }
    }

    fn output_player_location(&mut self) {
        self.out(format!(
            "{}{}",
            msg::YOU_ARE_IN_ROOM,
            self.engine.player_room()
        ));
        if let Ok([a, b, c]) = self.engine.player_connected_rooms() {
            self.out(format!("{}{a} {b} {c}", msg::TUNNELS_LEAD_TO));
        }
    }

    fn out(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wumpus_core::ScriptedRandomSource;

    fn scripted(values: Vec<i32>) -> GameEngine {
        GameEngine::new(Box::new(ScriptedRandomSource::new(values)))
    }

    /// Interpreter over a hand-placed cave, past the initial banner.
    fn at_command_prompt(engine: GameEngine) -> Interpreter {
        let mut interp = Interpreter::new(engine);
        interp.input("");
        interp
    }

    fn placed_engine() -> GameEngine {
        let mut engine = scripted(Vec::new());
        engine.set_player_room(2).unwrap();
        engine
    }

    #[test]
    fn initial_input_shows_location_and_prompt() {
        let mut interp = Interpreter::new(placed_engine());
        let output = interp.input("");
        assert_eq!(
            output,
            vec![
                "HUNT THE WUMPUS",
                "",
                "YOU ARE IN ROOM 2",
                "TUNNELS LEAD TO 1 3 10",
                "",
                "SHOOT OR MOVE (S-M)? ",
            ]
        );
    }

    #[test]
    fn randomize_sentinel_triggers_placement() {
        let mut interp = Interpreter::new(scripted(vec![2, 20, 11, 12, 13, 14]));
        let output = interp.input(RANDOMIZE);
        assert_eq!(
            output,
            vec![
                "HUNT THE WUMPUS",
                "",
                "YOU ARE IN ROOM 2",
                "TUNNELS LEAD TO 1 3 10",
                "",
                "SHOOT OR MOVE (S-M)? ",
            ]
        );
    }

    #[test]
    fn unrecognized_command_re_prompts() {
        let mut interp = at_command_prompt(placed_engine());
        let output = interp.input("X");
        assert_eq!(output, vec!["HUH?", "SHOOT OR MOVE (S-M)? "]);
    }

    #[test]
    fn empty_line_repeats_the_prompt() {
        let mut interp = at_command_prompt(placed_engine());
        let output = interp.input("");
        assert_eq!(output, vec!["SHOOT OR MOVE (S-M)? "]);
    }

    #[test]
    fn move_flow() {
        let mut interp = at_command_prompt(placed_engine());
        assert_eq!(interp.input("M"), vec!["WHERE TO? "]);
        assert_eq!(
            interp.input("10"),
            vec![
                "",
                "YOU ARE IN ROOM 10",
                "TUNNELS LEAD TO 2 9 11",
                "",
                "SHOOT OR MOVE (S-M)? ",
            ]
        );
    }

    #[test]
    fn move_accepts_lowercase() {
        let mut interp = at_command_prompt(placed_engine());
        assert_eq!(interp.input("m"), vec!["WHERE TO? "]);
    }

    #[test]
    fn unparsable_room_gets_huh() {
        let mut interp = at_command_prompt(placed_engine());
        interp.input("M");
        assert_eq!(interp.input("ten"), vec!["HUH?", "WHERE TO? "]);
    }

    #[test]
    fn unconnected_room_is_not_possible() {
        let mut interp = at_command_prompt(placed_engine());
        interp.input("M");
        assert_eq!(interp.input("5"), vec!["NOT POSSIBLE -", "WHERE TO? "]);
        // Still awaiting a room; a valid one now works.
        assert_eq!(interp.input("10")[1], "YOU ARE IN ROOM 10");
    }

    #[test]
    fn hazard_warnings_appear_in_fixed_order() {
        let mut engine = placed_engine();
        engine.set_wumpus_room(10).unwrap();
        engine.set_bat_rooms(3, 19).unwrap();
        engine.set_pit_rooms(1, 14).unwrap();
        let mut interp = Interpreter::new(engine);
        assert_eq!(
            interp.input(""),
            vec![
                "HUNT THE WUMPUS",
                "",
                "I SMELL A WUMPUS!",
                "BATS NEARBY!",
                "I FEEL A DRAFT",
                "YOU ARE IN ROOM 2",
                "TUNNELS LEAD TO 1 3 10",
                "",
                "SHOOT OR MOVE (S-M)? ",
            ]
        );
    }

    #[test]
    fn walking_into_a_pit_loses_the_game() {
        let mut engine = placed_engine();
        engine.set_pit_rooms(10, 11).unwrap();
        let mut interp = at_command_prompt(engine);
        interp.input("M");
        assert_eq!(
            interp.input("10"),
            vec![
                "",
                "YYYIIIIEEEE... FELL IN PIT",
                "HA HA HA - YOU LOSE!",
                "SAME SET-UP (Y-N)? ",
            ]
        );
    }

    #[test]
    fn bumping_a_staying_wumpus_gets_the_player_eaten() {
        let mut engine = scripted(vec![3]);
        engine.set_player_room(2).unwrap();
        engine.set_wumpus_room(10).unwrap();
        let mut interp = at_command_prompt(engine);
        interp.input("M");
        assert_eq!(
            interp.input("10"),
            vec![
                "",
                "--- OOPS, BUMPED A WUMPUS!",
                "TSK TSK TSK - WUMPUS GOT YOU",
                "HA HA HA - YOU LOSE!",
                "SAME SET-UP (Y-N)? ",
            ]
        );
    }

    #[test]
    fn shoot_flow_kills_the_wumpus() {
        let mut engine = placed_engine();
        engine.set_wumpus_room(10).unwrap();
        let mut interp = at_command_prompt(engine);
        assert_eq!(interp.input("S"), vec!["N0. OF ROOMS (l-5)? "]);
        assert_eq!(interp.input("1"), vec!["ROOM #? "]);
        assert_eq!(
            interp.input("10"),
            vec![
                "",
                "AHA! YOU GOT THE WUMPUS!",
                "HEE HEE HEE - THE WUMPUS'LL GETCHA NEXT TIME!!",
                "[Exit]",
            ]
        );
        assert!(interp.finished());
    }

    #[test]
    fn end_state_is_inert() {
        let mut engine = placed_engine();
        engine.set_wumpus_room(10).unwrap();
        let mut interp = at_command_prompt(engine);
        interp.input("S");
        interp.input("1");
        interp.input("10");
        assert_eq!(interp.input(""), Vec::<String>::new());
        assert_eq!(interp.input("M"), Vec::<String>::new());
    }

    #[test]
    fn arrow_flight_continues_silently_between_hops() {
        let mut engine = scripted(vec![3]);
        engine.set_player_room(2).unwrap();
        engine.set_wumpus_room(20).unwrap();
        let mut interp = at_command_prompt(engine);
        interp.input("S");
        interp.input("2");
        // First hop hits nothing: stay in the same state, re-prompt only.
        assert_eq!(interp.input("10"), vec!["ROOM #? "]);
        assert_eq!(
            interp.input("9"),
            vec![
                "",
                "MISSED",
                "YOU ARE IN ROOM 2",
                "TUNNELS LEAD TO 1 3 10",
                "",
                "SHOOT OR MOVE (S-M)? ",
            ]
        );
    }

    #[test]
    fn crooked_arrow_has_its_own_message() {
        let mut interp = at_command_prompt(placed_engine());
        interp.input("S");
        interp.input("5");
        interp.input("10");
        assert_eq!(
            interp.input("2"),
            vec![
                "ARROWS AREN'T THAT CROOKED - TRY ANOTHER ROOM",
                "ROOM #? ",
            ]
        );
    }

    #[test]
    fn bad_path_length_is_not_possible() {
        let mut interp = at_command_prompt(placed_engine());
        interp.input("S");
        assert_eq!(
            interp.input("6"),
            vec!["NOT POSSIBLE -", "N0. OF ROOMS (l-5)? "]
        );
        assert_eq!(interp.input("x"), vec!["HUH?", "N0. OF ROOMS (l-5)? "]);
    }

    #[test]
    fn shooting_yourself_loses_the_game() {
        let mut interp = at_command_prompt(placed_engine());
        interp.input("S");
        interp.input("5");
        for room in ["10", "9", "8", "1"] {
            assert_eq!(interp.input(room), vec!["ROOM #? "]);
        }
        assert_eq!(
            interp.input("2"),
            vec![
                "",
                "OUCH! ARROW GOT YOU!",
                "HA HA HA - YOU LOSE!",
                "SAME SET-UP (Y-N)? ",
            ]
        );
    }

    #[test]
    fn last_arrow_missing_loses_the_game() {
        let mut engine = scripted(vec![3, 3, 3, 3, 3]);
        engine.set_player_room(2).unwrap();
        engine.set_wumpus_room(20).unwrap();
        let mut interp = at_command_prompt(engine);
        for _ in 0..4 {
            interp.input("S");
            interp.input("1");
            let output = interp.input("10");
            assert_eq!(output[1], "MISSED");
            assert_eq!(output.last().unwrap(), "SHOOT OR MOVE (S-M)? ");
        }
        interp.input("S");
        interp.input("1");
        assert_eq!(
            interp.input("10"),
            vec![
                "",
                "MISSED",
                "THAT WAS YOUR LAST ARROW",
                "HA HA HA - YOU LOSE!",
                "SAME SET-UP (Y-N)? ",
            ]
        );
    }

    #[test]
    fn replay_restores_the_same_cave() {
        // Placement: player 2, wumpus 20, bats 11/12, pits 10/14.
        let mut interp = Interpreter::new(scripted(vec![2, 20, 11, 12, 10, 14]));
        interp.input(RANDOMIZE);
        interp.input("M");
        let output = interp.input("10");
        assert_eq!(output[1], "YYYIIIIEEEE... FELL IN PIT");
        assert_eq!(
            interp.input("Y"),
            vec![
                "HUNT THE WUMPUS",
                "",
                "I FEEL A DRAFT",
                "YOU ARE IN ROOM 2",
                "TUNNELS LEAD TO 1 3 10",
                "",
                "SHOOT OR MOVE (S-M)? ",
            ]
        );
    }

    #[test]
    fn declining_a_replay_restarts_with_fresh_placements() {
        // Second placement set: player 5, wumpus 20, bats 11/12, pits 13/14.
        let mut interp =
            Interpreter::new(scripted(vec![2, 20, 11, 12, 10, 14, 5, 20, 11, 12, 13, 14]));
        interp.input(RANDOMIZE);
        interp.input("M");
        interp.input("10");
        assert_eq!(
            interp.input("N"),
            vec![
                "HUNT THE WUMPUS",
                "",
                "YOU ARE IN ROOM 5",
                "TUNNELS LEAD TO 1 4 6",
                "",
                "SHOOT OR MOVE (S-M)? ",
            ]
        );
    }

    #[test]
    fn replay_prompt_rejects_gibberish() {
        let mut engine = placed_engine();
        engine.set_pit_rooms(10, 11).unwrap();
        let mut interp = at_command_prompt(engine);
        interp.input("M");
        interp.input("10");
        assert_eq!(interp.input("maybe"), vec!["HUH?", "SAME SET-UP (Y-N)? "]);
    }
}
