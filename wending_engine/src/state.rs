//! The aggregate game state and the turn engine's choice machinery.
//!
//! [`GameState`] is an immutable snapshot: the player, the map, the area the
//! player stands in, and at most one pending message. Every action produces
//! a replacement snapshot; nothing is mutated in place. The `with_*` helpers
//! are the "rebuild with field X replaced" constructors the rest of the
//! engine leans on.

use crate::action::Action;
use crate::character::Character;
use crate::error::{EngineError, EngineResult};
use crate::item::Item;
use crate::world::{Area, Door, GameMap};

use log::info;
use serde::{Deserialize, Serialize};

/// One selectable (action, item, description) triple, recomputed every turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub action: Action,
    pub item: Option<Item>,
    pub description: String,
}

impl Choice {
    fn open_door(door: &Door, destination: &str) -> Choice {
        Choice {
            action: Action::OpenDoor { door: door.clone() },
            item: None,
            description: format!("Open door to {destination}"),
        }
    }

    fn pick_up(item: &Item) -> Choice {
        Choice {
            action: Action::PickUp,
            item: Some(item.clone()),
            description: format!("Pick up {}", item.name),
        }
    }

    fn drop_item(item: &Item) -> Choice {
        Choice {
            action: Action::Drop,
            item: Some(item.clone()),
            description: format!("Drop {}", item.name),
        }
    }

    fn intrinsic(action: Action, item: &Item) -> Choice {
        let description = match &action {
            Action::Attack => format!("Attack with {}", item.name),
            Action::Drink => format!("Drink {}", item.name),
            Action::Unlock => format!("Unlock a door with {}", item.name),
            _ => format!("Use {}", item.name),
        };
        Choice {
            action,
            item: Some(item.clone()),
            description,
        }
    }
}

/// Complete, immutable state of the running game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Character,
    pub map: GameMap,
    pub current_area: Area,
    /// Transient diagnostic from the last action; drained every turn.
    pub message: Option<String>,
}

impl GameState {
    /// Assemble the starting state.
    ///
    /// The map is rebuilt so every door endpoint naming the starting area
    /// carries its value -- the invariant the rest of the engine relies on.
    pub fn new(player: Character, map: GameMap, current_area: Area) -> GameState {
        GameState {
            player,
            map: map.with_area_replaced(&current_area),
            current_area,
            message: None,
        }
    }

    /// Doors reachable from where the player stands.
    pub fn current_doors(&self) -> Vec<&Door> {
        self.map.doors_in(&self.current_area)
    }

    /// Everything the player can do this turn, in stable order: doors first,
    /// then items lying in the area (pick up, then the item's own action),
    /// then carried items (own action, then drop).
    ///
    /// Lock state never hides an "open door" choice; a locked door only
    /// changes what happens when the choice is taken.
    pub fn choices(&self) -> Vec<Choice> {
        let mut choices = Vec::new();
        for door in self.current_doors() {
            if let Ok(destination) = door.other(&self.current_area) {
                choices.push(Choice::open_door(door, &destination.name));
            }
        }
        for item in &self.current_area.items {
            choices.push(Choice::pick_up(item));
            if let Some(action) = item.action() {
                choices.push(Choice::intrinsic(action, item));
            }
        }
        for item in &self.player.inventory {
            if let Some(action) = item.action() {
                choices.push(Choice::intrinsic(action, item));
            }
            choices.push(Choice::drop_item(item));
        }
        choices
    }

    /// Apply the 1-based selection from this turn's choices.
    ///
    /// # Errors
    /// [`EngineError::InvalidChoice`] when `index` is zero or past the end
    /// of the list -- a caller bug, not a gameplay outcome.
    pub fn select(&self, index: usize) -> EngineResult<GameState> {
        let choices = self.choices();
        let choice = index
            .checked_sub(1)
            .and_then(|i| choices.get(i))
            .ok_or(EngineError::InvalidChoice(index))?;
        Ok(self.execute(choice))
    }

    /// Dispatch a choice's action against this state.
    pub fn execute(&self, choice: &Choice) -> GameState {
        choice.action.apply(choice.item.as_ref(), self)
    }

    /// Direct navigation through a door.
    ///
    /// Auto-unlocks when the player carries the matching key, then moves to
    /// the far endpoint if the door ends up unlocked. A door that does not
    /// touch the current area, or that stays locked, leaves the state
    /// unchanged.
    pub fn enter(&self, door: &Door) -> GameState {
        if !door.connects_to(&self.current_area) {
            return self.clone();
        }
        let map = match self.player.key_for(door) {
            Some(key) => self.map.unlock_door(key),
            None => self.map.clone(),
        };
        let Some(current) = map.door_matching(door) else {
            return self.clone();
        };
        if current.locked {
            return GameState {
                map,
                ..self.clone()
            };
        }
        let Ok(destination) = current.other(&self.current_area) else {
            return self.clone();
        };
        let destination = destination.clone();
        info!(
            "player moved from '{}' to '{}'",
            self.current_area.name, destination.name
        );
        GameState {
            map,
            ..self.clone()
        }
        .with_current_area(destination)
    }

    /// Split off the pending message, leaving a clean state for next turn.
    pub fn take_message(mut self) -> (GameState, Option<String>) {
        let message = self.message.take();
        (self, message)
    }

    /// Replacement state with a new player value.
    pub fn with_player(&self, player: Character) -> GameState {
        GameState {
            player,
            ..self.clone()
        }
    }

    /// Replacement state with a new map value.
    pub fn with_map(&self, map: GameMap) -> GameState {
        GameState {
            map,
            ..self.clone()
        }
    }

    /// Replacement state standing in `area`, with the map's matching door
    /// endpoints rebuilt to agree with it.
    pub fn with_current_area(&self, area: Area) -> GameState {
        GameState {
            map: self.map.with_area_replaced(&area),
            current_area: area,
            ..self.clone()
        }
    }

    /// Replacement state carrying a pending message.
    pub fn with_message(&self, message: impl Into<String>) -> GameState {
        GameState {
            message: Some(message.into()),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Price;

    fn axe() -> Item {
        Item::weapon("Axe", 10, "", Price(25), 5)
    }

    /// Armory (axe and key on the floor) and Lair (one ogre), behind a
    /// locked door.
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
    fn new_state_reconciles_map_endpoints_with_the_start_area() {
        let state = demo_state();
        // the armory gained its key after the door snapshotted it
        assert_eq!(state.map.doors[0].first, state.current_area);
    }

    #[test]
    fn choices_list_doors_then_area_items_then_inventory() {
        let state = demo_state();
        let choices = state.choices();
        let described: Vec<&str> = choices
            .iter()
            .map(|c| c.description.as_str())
            .collect();
        assert_eq!(
            described,
            vec![
                "Open door to Lair",
                "Pick up Axe",
                "Attack with Axe",
                "Pick up Door Key",
                "Unlock a door with Door Key",
            ]
        );
    }

    #[test]
    fn locked_doors_still_appear_as_choices() {
        let state = demo_state();
        assert!(state.map.doors[0].locked);
        assert!(
            state
                .choices()
                .iter()
                .any(|c| c.description == "Open door to Lair")
        );
    }

    #[test]
    fn carried_items_add_action_and_drop_choices() {
        let state = demo_state();
        let holding = state.select(2).unwrap(); // pick up the axe
        let described: Vec<String> = holding
            .choices()
            .iter()
            .map(|c| c.description.clone())
            .collect();
        assert!(described.contains(&"Attack with Axe".to_string()));
        assert!(described.contains(&"Drop Axe".to_string()));
    }

    #[test]
    fn select_rejects_zero_and_out_of_range_indices() {
        let state = demo_state();
        assert_eq!(state.select(0), Err(EngineError::InvalidChoice(0)));
        assert_eq!(state.select(99), Err(EngineError::InvalidChoice(99)));
    }

    #[test]
    fn select_dispatches_the_chosen_action() {
        let state = demo_state();
        let next = state.select(2).unwrap(); // pick up the axe
        assert!(next.player.inventory.contains(&axe()));
    }

    #[test]
    fn enter_ignores_doors_elsewhere() {
        let state = demo_state();
        let far_door = Area::new("Lair").connect(&Area::new("Cellar"));
        assert_eq!(state.enter(&far_door), state);
    }

    #[test]
    fn enter_stays_put_when_the_door_is_locked_and_keyless() {
        let state = demo_state();
        let door = state.map.doors[0].clone();
        let next = state.enter(&door);
        assert_eq!(next.current_area.name, "Armory");
        assert!(next.map.doors[0].locked);
    }

    #[test]
    fn enter_auto_unlocks_with_the_carried_key() {
        let state = demo_state();
        let with_key = state.select(4).unwrap(); // pick up the door key
        let door = with_key.map.doors[0].clone();

        let next = with_key.enter(&door);
        assert_eq!(next.current_area.name, "Lair");
        assert!(!next.map.doors[0].locked);
    }

    #[test]
    fn with_current_area_keeps_the_endpoint_invariant() {
        let state = demo_state();
        let restocked = state
            .current_area
            .clone()
            .with_item(Item::potion("Tonic", 2, "", Price(10), 20));

        let next = state.with_current_area(restocked);
        for door in next.current_doors() {
            assert!(
                door.first == next.current_area || door.second == next.current_area,
                "door endpoint fell out of sync with the current area"
            );
        }
    }

    #[test]
    fn take_message_drains_the_pending_message() {
        let state = demo_state().with_message("Door is locked");
        let (clean, message) = state.take_message();
        assert_eq!(message.as_deref(), Some("Door is locked"));
        assert!(clean.message.is_none());

        let (still_clean, nothing) = clean.take_message();
        assert!(nothing.is_none());
        assert!(still_clean.message.is_none());
    }
}
