//! Item types and their intrinsic actions.
//!
//! Items are immutable value objects: two items with identical fields are the
//! same item as far as inventories and areas are concerned. The kind-specific
//! payload lives in [`ItemKind`], a closed family, so every dispatch site can
//! match it exhaustively. Each kind except armor carries exactly one
//! intrinsic [`Action`].

use crate::action::Action;
use crate::money::Price;
use crate::world::Door;

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use variantly::Variantly;

/// Kind-specific data for an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Variantly)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    /// Deals `attack` damage to everyone in the wielder's area when swung.
    Weapon { attack: i32 },
    /// Shifts the drinker's health by `potency`. Negative potions poison.
    Potion { potency: i32 },
    /// Worn, never used. `defends_against` is not consulted anywhere yet.
    Armor { defends_against: Vec<Item> },
    /// Opens exactly one door, matched by the door's passage.
    Key { opens: Door },
}

/// Anything that can lie in an area, be carried, or be applied to the world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name; also how messages refer to the item.
    pub name: String,
    /// Carry weight, counted against a character's capacity.
    pub weight: u32,
    /// A general description of the item.
    pub description: String,
    /// What the item would fetch at market.
    pub value: Price,
    /// The kind-specific payload.
    pub kind: ItemKind,
}

impl Item {
    /// Create a weapon with the given attack value.
    pub fn weapon(name: &str, weight: u32, description: &str, value: Price, attack: i32) -> Item {
        Item {
            name: name.to_string(),
            weight,
            description: description.to_string(),
            value,
            kind: ItemKind::Weapon { attack },
        }
    }

    /// Create a potion with the given potency.
    pub fn potion(name: &str, weight: u32, description: &str, value: Price, potency: i32) -> Item {
        Item {
            name: name.to_string(),
            weight,
            description: description.to_string(),
            value,
            kind: ItemKind::Potion { potency },
        }
    }

    /// Create a piece of armor.
    pub fn armor(
        name: &str,
        weight: u32,
        description: &str,
        value: Price,
        defends_against: Vec<Item>,
    ) -> Item {
        Item {
            name: name.to_string(),
            weight,
            description: description.to_string(),
            value,
            kind: ItemKind::Armor { defends_against },
        }
    }

    /// Create the key for a specific door.
    pub fn key(name: &str, weight: u32, description: &str, value: Price, opens: Door) -> Item {
        Item {
            name: name.to_string(),
            weight,
            description: description.to_string(),
            value,
            kind: ItemKind::Key { opens },
        }
    }

    /// The intrinsic action bound to this item's kind, if it has one.
    ///
    /// Armor is the one kind you can only possess, not use.
    pub fn action(&self) -> Option<Action> {
        match &self.kind {
            ItemKind::Weapon { .. } => Some(Action::Attack),
            ItemKind::Potion { .. } => Some(Action::Drink),
            ItemKind::Key { .. } => Some(Action::Unlock),
            ItemKind::Armor { .. } => None,
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
