//! CLI command implementations.

mod display;

pub mod drag;
pub mod export;
pub mod list;
pub mod location;
pub mod matrix;
pub mod path;
pub mod road;
pub mod seed;
pub mod stats;

use std::path::{Path, PathBuf};

use citymap::{CityMap, Config};

/// Resolve the effective configuration.
///
/// An explicit `--config` file is loaded as-is; otherwise the project
/// configuration is discovered from the current directory. `--database`
/// overrides whatever database the configuration names.
pub fn load_config(
    config_path: Option<&Path>,
    database: Option<PathBuf>,
) -> Result<Config, citymap::Error> {
    let mut config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::discover(&std::env::current_dir()?)?,
    };

    if let Some(database) = database {
        config.database = database;
    }

    tracing::debug!(database = %config.database.display(), "Using database");
    Ok(config)
}

/// Open the configured map.
fn open(config: &Config) -> Result<CityMap, citymap::Error> {
    CityMap::open(config)
}
