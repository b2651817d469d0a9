//! The turn loop and its I/O boundary.
//!
//! The engine never talks to a terminal directly. It asks a [`TurnIo`] to
//! display the turn's choices and read back a selection, and hands it any
//! transient message an action produced. [`ConsoleIo`] runs the boundary
//! over rustyline; tests substitute a scripted implementation.

use crate::state::{Choice, GameState};
use crate::style::GameStyle;

use anyhow::Result;
use log::{info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Control flow signal deciding whether the turn loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnControl {
    Continue,
    Quit,
}

/// Capabilities the turn loop needs from its environment.
pub trait TurnIo {
    /// Present the numbered choices for this turn (plus quit at zero).
    fn display_choices(&mut self, choices: &[Choice]);
    /// Read the player's selection: 0 to quit, 1..=N for a choice.
    fn read_selection(&mut self) -> usize;
    /// Surface a transient action message.
    fn show_message(&mut self, message: &str);
}

/// Read one selection and resolve it against the current state.
///
/// Quit (selection 0) leaves the state untouched. A selected choice yields
/// the action's result with its pending message drained and surfaced. An
/// out-of-range index is reported through the boundary and the state kept,
/// so the caller can simply ask again.
pub fn take_turn(state: &GameState, io: &mut impl TurnIo) -> (TurnControl, GameState) {
    let selection = io.read_selection();
    if selection == 0 {
        return (TurnControl::Quit, state.clone());
    }
    match state.select(selection) {
        Ok(candidate) => {
            let (next, message) = candidate.take_message();
            if let Some(message) = message {
                io.show_message(&message);
            }
            (TurnControl::Continue, next)
        }
        Err(error) => {
            warn!("{error}");
            io.show_message(&error.to_string());
            (TurnControl::Continue, state.clone())
        }
    }
}

/// Run turns until the player quits. Returns the final state.
pub fn run_turn_loop(mut state: GameState, io: &mut impl TurnIo) -> GameState {
    let mut turn = 0usize;
    loop {
        turn += 1;
        info!("================> BEGIN TURN {turn} <================");
        io.display_choices(&state.choices());
        let (control, next) = take_turn(&state, io);
        state = next;
        if let TurnControl::Quit = control {
            info!("player quit on turn {turn}");
            return state;
        }
    }
}

/// Rustyline-backed console implementation of the [`TurnIo`] boundary.
pub struct ConsoleIo {
    editor: DefaultEditor,
}

impl ConsoleIo {
    /// Create a console boundary.
    ///
    /// # Errors
    /// Fails if the line editor cannot be initialized.
    pub fn new() -> Result<ConsoleIo> {
        Ok(ConsoleIo {
            editor: DefaultEditor::new()?,
        })
    }
}

impl TurnIo for ConsoleIo {
    fn display_choices(&mut self, choices: &[Choice]) {
        println!();
        for (index, choice) in choices.iter().enumerate() {
            println!(
                "  {}) {}",
                (index + 1).to_string().choice_index_style(),
                choice.description
            );
        }
        println!("  {}) Quit", "0".choice_index_style());
    }

    fn read_selection(&mut self) -> usize {
        loop {
            match self.editor.readline(&"> ".prompt_style().to_string()) {
                Ok(line) => {
                    if let Ok(selection) = line.trim().parse::<usize>() {
                        return selection;
                    }
                    println!(
                        "{}",
                        "Enter the number of a choice, or 0 to quit.".error_style()
                    );
                }
                // ctrl-d and ctrl-c both read as quit
                Err(ReadlineError::Eof | ReadlineError::Interrupted) => return 0,
                Err(error) => {
                    warn!("readline error: {error}");
                    return 0;
                }
            }
        }
    }

    fn show_message(&mut self, message: &str) {
        println!("\n{}", message.message_style());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Character;
    use crate::item::Item;
    use crate::money::Price;
    use crate::world::{Area, GameMap};

    struct ScriptedIo {
        selections: Vec<usize>,
        shown: Vec<String>,
        displays: usize,
    }

    impl ScriptedIo {
        fn new(selections: &[usize]) -> ScriptedIo {
            ScriptedIo {
                selections: selections.to_vec(),
                shown: Vec::new(),
                displays: 0,
            }
        }
    }

    impl TurnIo for ScriptedIo {
        fn display_choices(&mut self, _choices: &[Choice]) {
            self.displays += 1;
        }
        fn read_selection(&mut self) -> usize {
            if self.selections.is_empty() {
                0
            } else {
                self.selections.remove(0)
            }
        }
        fn show_message(&mut self, message: &str) {
            self.shown.push(message.to_string());
        }
    }

    fn axe() -> Item {
        Item::weapon("Axe", 10, "", Price(25), 5)
    }

    fn demo_state() -> GameState {
        let armory = Area::new("Armory").with_item(axe());
        let lair = Area::new("Lair").with_character(Character::new("Ogre", 200));
        let door = armory.connect(&lair);
        let key = Item::key("Door Key", 5, "", Price(5), door.clone());
        let armory = armory.with_item(key);
        GameState::new(
            Character::new("Aldra", 60),
            GameMap::new(vec![door]),
            armory,
        )
    }

    #[test]
    fn immediate_quit_returns_the_state_unchanged() {
        let state = demo_state();
        let mut io = ScriptedIo::new(&[0]);
        let ending = run_turn_loop(state.clone(), &mut io);
        assert_eq!(ending, state);
        assert_eq!(io.displays, 1);
        assert!(io.shown.is_empty());
    }

    #[test]
    fn selections_are_applied_until_quit() {
        let state = demo_state();
        let mut io = ScriptedIo::new(&[2, 0]); // pick up the axe, quit
        let ending = run_turn_loop(state, &mut io);
        assert!(ending.player.inventory.contains(&axe()));
        assert_eq!(io.displays, 2);
    }

    #[test]
    fn locked_door_message_is_surfaced_and_drained() {
        let state = demo_state();
        let mut io = ScriptedIo::new(&[1, 0]); // open the door with no key
        let ending = run_turn_loop(state, &mut io);

        assert_eq!(io.shown, vec!["Door is locked".to_string()]);
        // strictly transient: nothing pending on the adopted state
        assert!(ending.message.is_none());
        assert_eq!(ending.current_area.name, "Armory");
    }

    #[test]
    fn invalid_index_is_reported_and_the_loop_continues() {
        let state = demo_state();
        let mut io = ScriptedIo::new(&[99, 0]);
        let ending = run_turn_loop(state.clone(), &mut io);

        assert_eq!(io.shown, vec!["invalid choice index: 99".to_string()]);
        assert_eq!(ending, state);
        assert_eq!(io.displays, 2);
    }

    #[test]
    fn take_turn_signals_quit_on_zero() {
        let state = demo_state();
        let mut io = ScriptedIo::new(&[0]);
        let (control, next) = take_turn(&state, &mut io);
        assert_eq!(control, TurnControl::Quit);
        assert_eq!(next, state);
    }
}
