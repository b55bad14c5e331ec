//! `citymap export` command implementations.

use std::path::Path;

use citymap::Config;
use colored::Colorize;

/// Export node-link JSON into `dir`.
pub fn json(config: &Config, dir: &Path) -> Result<(), citymap::Error> {
    let map = super::open(config)?;

    let path = map.export_json(dir)?;

    println!("{} {}", "Wrote".green().bold(), path.display());
    Ok(())
}

/// Export `nodes.csv` and `edges.csv` into `dir`.
pub fn csv(config: &Config, dir: &Path) -> Result<(), citymap::Error> {
    let map = super::open(config)?;

    let files = map.export_csv(dir)?;

    println!("{} {}", "Wrote".green().bold(), files.nodes.display());
    println!("{} {}", "Wrote".green().bold(), files.edges.display());
    Ok(())
}
