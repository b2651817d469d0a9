#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const WENDING_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod action;
pub mod character;
pub mod error;
pub mod item;
pub mod money;
pub mod repl;
pub mod state;
pub mod style;
pub mod world;

// Re-exports for convenience
pub use action::Action;
pub use character::Character;
pub use error::{EngineError, EngineResult};
pub use item::{Item, ItemKind};
pub use money::Price;
pub use repl::{ConsoleIo, TurnControl, TurnIo, run_turn_loop};
pub use state::{Choice, GameState};
pub use world::{Area, Door, GameMap, Lockable};
