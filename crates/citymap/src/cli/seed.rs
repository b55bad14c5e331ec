//! `citymap seed` command implementation.

use citymap::{Config, sample};
use colored::Colorize;

/// Run the seed command.
pub fn run(config: &Config) -> Result<(), citymap::Error> {
    let mut map = super::open(config)?;

    if map.seed_sample()? {
        println!(
            "{} {} locations and {} roads",
            "Seeded".green().bold(),
            sample::NH48_LOCATIONS.len(),
            sample::NH48_ROADS.len()
        );
    } else {
        println!("The map already has locations; nothing seeded.");
    }
    Ok(())
}
