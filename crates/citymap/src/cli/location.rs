//! `citymap location` command implementations.

use citymap::{Config, validate};
use colored::Colorize;

use super::display::number;

/// Add a location from raw command-line input.
pub fn add(config: &Config, name: &str, x: &str, y: &str) -> Result<(), citymap::Error> {
    let position = validate::parse_position(x, y)?;
    let mut map = super::open(config)?;

    map.add_location(name, position)?;

    println!(
        "{} location {} at ({}, {})",
        "Added".green().bold(),
        name.trim().cyan(),
        number(position.x),
        number(position.y)
    );
    Ok(())
}

/// Set a location's position directly.
pub fn relocate(config: &Config, name: &str, x: &str, y: &str) -> Result<(), citymap::Error> {
    let position = validate::parse_position(x, y)?;
    let mut map = super::open(config)?;

    map.move_location(name, position)?;

    println!(
        "{} {} to ({}, {})",
        "Moved".green().bold(),
        name.trim().cyan(),
        number(position.x),
        number(position.y)
    );
    Ok(())
}

/// Delete a location and its roads.
pub fn delete(config: &Config, name: &str) -> Result<(), citymap::Error> {
    let mut map = super::open(config)?;
    let roads_before = map.graph().edge_count();

    map.delete_location(name)?;

    let removed_roads = roads_before - map.graph().edge_count();
    println!(
        "{} location {} and {} road(s)",
        "Deleted".green().bold(),
        name.trim().cyan(),
        removed_roads
    );
    Ok(())
}
