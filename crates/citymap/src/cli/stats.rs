//! `citymap stats` command implementation.

use citymap::Config;
use colored::Colorize;

/// Run the stats command.
pub fn run(config: &Config) -> Result<(), citymap::Error> {
    let map = super::open(config)?;
    let stats = map.stats()?;

    println!("{}", "City Map Statistics".cyan().bold());
    println!();

    let db_path = map
        .store()
        .path()
        .map_or_else(|| "in memory".to_string(), |p| p.display().to_string());
    println!("  {}: {}", "Database".white().bold(), db_path);
    println!(
        "  {}: {}",
        "Pick radius".white().bold(),
        super::display::number(config.pick_radius)
    );
    println!();

    println!(
        "  {}: {}",
        "Locations".white().bold(),
        stats.location_count.to_string().green()
    );
    println!(
        "  {}: {} ({} stored rows)",
        "Roads".white().bold(),
        stats.road_count.to_string().green(),
        stats.road_row_count
    );

    if stats.road_row_count != stats.road_count * 2 {
        println!();
        println!(
            "  {}: road rows are not paired; some roads are stored in one direction only",
            "Warning".yellow().bold()
        );
    }

    Ok(())
}
