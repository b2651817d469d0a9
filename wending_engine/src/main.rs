#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Wending **
//! Demo wiring for the turn-based adventure rules engine.

use wending_engine::style::GameStyle;
use wending_engine::{Area, Character, ConsoleIo, GameMap, GameState, Item, Price, run_turn_loop};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: building the demo world...");
    let state = build_demo_world();
    info!("demo world ready");

    println!("{:^60}", "WENDING: A DOOR, A KEY, AN OGRE".banner_style());
    println!(
        "\nYou are {}, standing in the {}.",
        state.player.name.bold().bright_blue(),
        state.current_area.name.area_style(),
    );

    let mut io = ConsoleIo::new().context("while initializing the console")?;
    let ending = run_turn_loop(state, &mut io);

    println!(
        "\nYou wander off with {} item(s) in your pack.",
        ending.player.inventory.len()
    );
    Ok(())
}

/// Two areas behind a locked door: an armory holding an axe, a tonic, a
/// buckler and the door key, and a lair holding a healthy ogre.
fn build_demo_world() -> GameState {
    let axe = Item::weapon("Axe", 10, "A single-bladed woodcutter's axe.", Price(25), 5);
    let tonic = Item::potion("Tonic", 2, "Smells of juniper. Restorative.", Price(10), 20);
    let buckler = Item::armor(
        "Buckler",
        8,
        "A small round shield, dented twice.",
        Price(15),
        vec![axe.clone()],
    );

    let armory = Area::new("Armory")
        .with_item(axe)
        .with_item(tonic)
        .with_item(buckler);
    let lair = Area::new("Lair").with_character(Character::new("Ogre", 200));

    let door = armory.connect(&lair);
    let key = Item::key("Door Key", 5, "Cold iron, recently oiled.", Price(5), door.clone());
    let armory = armory.with_item(key);

    let player = Character::new("Aldra", 60);
    GameState::new(player, GameMap::new(vec![door]), armory)
}
