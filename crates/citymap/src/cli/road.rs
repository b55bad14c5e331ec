//! `citymap road` command implementations.

use citymap::{Config, validate};
use colored::Colorize;

use super::display::number;

/// Add a road from raw command-line input.
pub fn add(config: &Config, from: &str, to: &str, weight: &str) -> Result<(), citymap::Error> {
    let weight = validate::parse_weight(weight)?;
    let mut map = super::open(config)?;

    map.add_road(from, to, weight)?;

    println!(
        "{} road {} - {} ({})",
        "Added".green().bold(),
        from.trim().cyan(),
        to.trim().cyan(),
        number(weight)
    );
    Ok(())
}
