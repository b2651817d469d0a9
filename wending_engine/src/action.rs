//! Action dispatch.
//!
//! An [`Action`] is a pure transformation from an optional item and a game
//! state to a new game state. Application is total: a pairing that makes no
//! sense (drinking a sword, attacking with nothing) returns the state
//! unchanged instead of failing.

use crate::character::Character;
use crate::item::Item;
use crate::state::GameState;
use crate::world::Door;

/// The closed set of things a turn can do to the world.
///
/// `Attack`, `Drink` and `Unlock` are item-intrinsic, obtained from
/// [`Item::action`]. `PickUp`, `Drop` and `OpenDoor` are constructed by the
/// engine when it assembles each turn's choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Swing a weapon at everyone in the player's current area.
    Attack,
    /// Drink a potion, applying its potency to the player's health.
    Drink,
    /// Use a key on the one door it opens.
    Unlock,
    /// Move an item from the current area into the player's inventory.
    PickUp,
    /// Remove an item from the player's inventory.
    Drop,
    /// Pass through a door, unlocking it first when the player has the key.
    OpenDoor { door: Door },
}

impl Action {
    /// Apply this action, producing the next game state.
    pub fn apply(&self, item: Option<&Item>, state: &GameState) -> GameState {
        match self {
            Action::Attack => attack(item, state),
            Action::Drink => drink(item, state),
            Action::Unlock => unlock(item, state),
            Action::PickUp => pick_up(item, state),
            Action::Drop => drop_item(item, state),
            Action::OpenDoor { door } => open_door(door, state),
        }
    }
}

/// Damage every character in the current area by the weapon's attack value,
/// replacing that area's character list.
fn attack(item: Option<&Item>, state: &GameState) -> GameState {
    let Some(weapon) = item else {
        return state.clone();
    };
    if !weapon.kind.is_weapon() {
        return state.clone();
    }
    let wounded: Vec<Character> = state
        .current_area
        .characters
        .iter()
        .map(|character| character.damage(weapon))
        .collect();
    let area = state.current_area.with_characters(wounded);
    state.with_current_area(area)
}

fn drink(item: Option<&Item>, state: &GameState) -> GameState {
    match item {
        Some(potion) => state.with_player(state.player.drink_potion(potion)),
        None => state.clone(),
    }
}

fn unlock(item: Option<&Item>, state: &GameState) -> GameState {
    match item {
        Some(key) => state.with_map(state.map.unlock_door(key)),
        None => state.clone(),
    }
}

fn pick_up(item: Option<&Item>, state: &GameState) -> GameState {
    match item {
        // the area keeps its copy; picking up does not consume it
        Some(item) => state.with_player(state.player.pick_up_item(item.clone())),
        None => state.clone(),
    }
}

fn drop_item(item: Option<&Item>, state: &GameState) -> GameState {
    let Some(item) = item else {
        return state.clone();
    };
    match state.player.without_item(item) {
        Some(player) => state.with_player(player),
        None => state.with_message(format!(
            "{}'s inventory does not contain {}",
            state.player.name, item
        )),
    }
}

fn open_door(door: &Door, state: &GameState) -> GameState {
    if state.player.has_key_for(door) {
        state.enter(door)
    } else {
        state.with_message("Door is locked")
    }
}
