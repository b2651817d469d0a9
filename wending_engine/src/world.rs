//! The world graph: areas joined by lockable doors.
//!
//! Doors are immutable edges. Unlocking never flips a flag in place; the map
//! is rebuilt with the matching door replaced by its unlocked counterpart,
//! and every other door carried over untouched.

use crate::character::Character;
use crate::error::{EngineError, EngineResult};
use crate::item::{Item, ItemKind};

use log::info;
use serde::{Deserialize, Serialize};

/// The lock capability: a flag plus a transition that clears it.
///
/// Doors are the only lockable things in the world today.
pub trait Lockable {
    /// Whether the lock is currently engaged.
    fn locked(&self) -> bool;
    /// The unlocked counterpart of this value.
    fn unlock(self) -> Self;
}

/// Somewhere the player can stand: a named place holding items and
/// characters.
///
/// The name is the area's identity; contents evolve by copy-on-write without
/// disturbing it, so doors and keys keep agreeing on which area is which.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub name: String,
    pub items: Vec<Item>,
    pub characters: Vec<Character>,
}

impl Area {
    /// Create an empty area.
    pub fn new(name: &str) -> Area {
        Area {
            name: name.to_string(),
            items: Vec::new(),
            characters: Vec::new(),
        }
    }

    /// Same area, with an extra item present.
    pub fn with_item(mut self, item: Item) -> Area {
        self.items.push(item);
        self
    }

    /// Same area, with an extra character present.
    pub fn with_character(mut self, character: Character) -> Area {
        self.characters.push(character);
        self
    }

    /// Same area, with the character list replaced wholesale.
    pub fn with_characters(&self, characters: Vec<Character>) -> Area {
        Area {
            characters,
            ..self.clone()
        }
    }

    /// Join two areas with a new door. Doors start locked.
    pub fn connect(&self, other: &Area) -> Door {
        Door::between(self.clone(), other.clone())
    }
}

/// A connection between exactly two areas.
///
/// A door's passage identity is the unordered pair of its endpoint names.
/// Keys match doors by passage, so the identity survives content changes in
/// the endpoint areas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub first: Area,
    pub second: Area,
    pub locked: bool,
}

impl Door {
    /// Create a locked door between two areas.
    pub fn between(first: Area, second: Area) -> Door {
        Door {
            first,
            second,
            locked: true,
        }
    }

    /// True when `area` is one of this door's endpoints.
    pub fn connects_to(&self, area: &Area) -> bool {
        self.first.name == area.name || self.second.name == area.name
    }

    /// True when both doors join the same pair of areas, in either order.
    pub fn same_passage(&self, other: &Door) -> bool {
        (self.first.name == other.first.name && self.second.name == other.second.name)
            || (self.first.name == other.second.name && self.second.name == other.first.name)
    }

    /// The endpoint opposite `area`.
    ///
    /// # Errors
    /// [`EngineError::InvalidEndpoint`] when `area` is neither endpoint --
    /// callers must hand in one of the door's own areas.
    pub fn other(&self, area: &Area) -> EngineResult<&Area> {
        if self.first.name == area.name {
            Ok(&self.second)
        } else if self.second.name == area.name {
            Ok(&self.first)
        } else {
            Err(EngineError::InvalidEndpoint(area.name.clone()))
        }
    }
}

impl Lockable for Door {
    fn locked(&self) -> bool {
        self.locked
    }

    fn unlock(self) -> Door {
        Door {
            locked: false,
            ..self
        }
    }
}

/// The set of doors making up the world graph.
///
/// Areas are not stored separately; they are derived from door endpoints, so
/// an isolated area is not representable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    pub doors: Vec<Door>,
}

impl GameMap {
    /// Create a map from its door set.
    pub fn new(doors: Vec<Door>) -> GameMap {
        GameMap { doors }
    }

    /// Every door with `area` as an endpoint -- the adjacency query behind
    /// each turn's "open door" choices.
    pub fn doors_in(&self, area: &Area) -> Vec<&Door> {
        self.doors
            .iter()
            .filter(|door| door.connects_to(area))
            .collect()
    }

    /// The distinct areas referenced by any door, in first-seen order.
    pub fn areas(&self) -> Vec<&Area> {
        let mut seen: Vec<&str> = Vec::new();
        let mut areas = Vec::new();
        for door in &self.doors {
            for endpoint in [&door.first, &door.second] {
                if !seen.contains(&endpoint.name.as_str()) {
                    seen.push(endpoint.name.as_str());
                    areas.push(endpoint);
                }
            }
        }
        areas
    }

    /// The map's current door for the same passage as `door`, if present.
    pub fn door_matching(&self, door: &Door) -> Option<&Door> {
        self.doors.iter().find(|held| held.same_passage(door))
    }

    /// Rebuild the map with the door matching `key` unlocked.
    ///
    /// Anything other than a key, or a key for a door this map does not
    /// hold, leaves the map unchanged. Unlocking an unlocked door again is a
    /// no-op rather than an error.
    pub fn unlock_door(&self, key: &Item) -> GameMap {
        let ItemKind::Key { opens } = &key.kind else {
            return self.clone();
        };
        let doors = self
            .doors
            .iter()
            .map(|door| {
                if door.same_passage(opens) {
                    if door.locked {
                        info!(
                            "unlocked door between '{}' and '{}'",
                            door.first.name, door.second.name
                        );
                    }
                    door.clone().unlock()
                } else {
                    door.clone()
                }
            })
            .collect();
        GameMap { doors }
    }

    /// Rebuild the map with `area`'s updated value substituted into every
    /// door endpoint that names it.
    pub fn with_area_replaced(&self, area: &Area) -> GameMap {
        let doors = self
            .doors
            .iter()
            .map(|door| {
                let mut door = door.clone();
                if door.first.name == area.name {
                    door.first = area.clone();
                }
                if door.second.name == area.name {
                    door.second = area.clone();
                }
                door
            })
            .collect();
        GameMap { doors }
    }
}
