//! `citymap list` command implementation.

use citymap::Config;
use colored::Colorize;

use super::display::number;

/// Run the list command.
pub fn run(config: &Config) -> Result<(), citymap::Error> {
    let map = super::open(config)?;
    let graph = map.graph();

    if graph.is_empty() {
        println!("The map is empty.");
        println!(
            "\n{}: Add locations with '{}' or load the sample with '{}'.",
            "hint".dimmed(),
            "citymap location add".cyan(),
            "citymap seed".cyan()
        );
        return Ok(());
    }

    println!(
        "{} ({})",
        "Locations".white().bold(),
        graph.node_count().to_string().green()
    );
    for location in graph.nodes() {
        println!(
            "  {} {} ({}, {})",
            "•".dimmed(),
            location.name,
            number(location.position.x),
            number(location.position.y)
        );
    }
    println!();

    println!(
        "{} ({})",
        "Roads".white().bold(),
        graph.edge_count().to_string().green()
    );
    let roads = graph.edges();
    if roads.is_empty() {
        println!("  {}", "No roads".dimmed());
    }
    for road in roads {
        println!(
            "  {} {} - {}: {}",
            "•".dimmed(),
            road.start,
            road.end,
            number(road.weight)
        );
    }

    Ok(())
}
