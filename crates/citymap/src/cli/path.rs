//! `citymap path` command implementation.

use citymap::Config;
use colored::Colorize;

use super::display::number;

/// Run the path command.
///
/// A missing endpoint is an error; two existing but disconnected locations
/// are reported as having no path.
pub fn run(config: &Config, from: &str, to: &str) -> Result<(), citymap::Error> {
    let map = super::open(config)?;

    let Some(path) = map.shortest_path(from, to)? else {
        println!("No path between {} and {}", from.cyan(), to.cyan());
        return Ok(());
    };

    println!(
        "{} {} ({} road(s))",
        "Shortest path cost:".white().bold(),
        number(path.cost()).green().bold(),
        path.hops()
    );
    println!("  {}", path.nodes().join(" → "));
    Ok(())
}
