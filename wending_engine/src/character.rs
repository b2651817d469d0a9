//! Characters and their inventories.
//!
//! A character owns items and derives everything else -- carried weight,
//! weapon and armor queries, life state -- from them. All operations are
//! pure: they return an updated copy rather than mutating in place.

use crate::item::{Item, ItemKind};
use crate::world::Door;

use log::info;
use serde::{Deserialize, Serialize};

/// Health a newly created character starts with.
pub const STARTING_HEALTH: i32 = 100;

/// The player, or anyone else standing around in an area.
///
/// Inventory order matters only for display; duplicates by value are legal
/// and lose exactly one copy on removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    /// Unclamped: potions can push it past 100, weapons below zero.
    pub health: i32,
    pub weight_capacity: u32,
    pub inventory: Vec<Item>,
}

impl Character {
    /// Create a character at full health with an empty inventory.
    pub fn new(name: &str, weight_capacity: u32) -> Character {
        Character {
            name: name.to_string(),
            health: STARTING_HEALTH,
            weight_capacity,
            inventory: Vec::new(),
        }
    }

    /// Total weight of everything carried.
    pub fn carried_weight(&self) -> u32 {
        self.inventory.iter().map(|item| item.weight).sum()
    }

    /// Add an item to the front of the inventory.
    ///
    /// A pick-up that would exceed the weight capacity is a silent no-op,
    /// not a failure.
    pub fn pick_up_item(&self, item: Item) -> Character {
        if self.carried_weight() + item.weight > self.weight_capacity {
            info!(
                "'{}' left '{}' behind: over weight capacity",
                self.name, item.name
            );
            return self.clone();
        }
        let mut updated = self.clone();
        updated.inventory.insert(0, item);
        updated
    }

    /// Remove the first structurally-equal occurrence of `item`.
    ///
    /// Returns `None` when the inventory holds no such item.
    pub fn without_item(&self, item: &Item) -> Option<Character> {
        let position = self.inventory.iter().position(|held| held == item)?;
        let mut updated = self.clone();
        updated.inventory.remove(position);
        Some(updated)
    }

    /// Apply a potion's potency to health, unclamped in both directions.
    /// Anything that isn't a potion is a no-op.
    pub fn drink_potion(&self, potion: &Item) -> Character {
        let ItemKind::Potion { potency } = &potion.kind else {
            return self.clone();
        };
        Character {
            health: self.health + potency,
            ..self.clone()
        }
    }

    /// Take a weapon's attack value off health. Can drive health negative.
    /// Anything that isn't a weapon is a no-op.
    pub fn damage(&self, weapon: &Item) -> Character {
        let ItemKind::Weapon { attack } = &weapon.kind else {
            return self.clone();
        };
        Character {
            health: self.health - attack,
            ..self.clone()
        }
    }

    /// A character dies at zero health or below.
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// First carried key that opens the given door, if any.
    pub fn key_for(&self, door: &Door) -> Option<&Item> {
        self.inventory.iter().find(|held| match &held.kind {
            ItemKind::Key { opens } => opens.same_passage(door),
            _ => false,
        })
    }

    /// Whether any carried key opens the given door.
    pub fn has_key_for(&self, door: &Door) -> bool {
        self.key_for(door).is_some()
    }

    /// All carried weapons.
    pub fn weapons(&self) -> Vec<&Item> {
        self.inventory
            .iter()
            .filter(|item| item.kind.is_weapon())
            .collect()
    }

    /// All carried armor.
    pub fn armors(&self) -> Vec<&Item> {
        self.inventory
            .iter()
            .filter(|item| item.kind.is_armor())
            .collect()
    }

    /// Whether the character carries any armor at all.
    pub fn has_armor(&self) -> bool {
        !self.armors().is_empty()
    }
}
