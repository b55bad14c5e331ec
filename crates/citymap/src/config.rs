//! Project configuration stored in `.citymap/config.yaml`.
//!
//! A missing file means defaults. Relative paths are resolved against the
//! directory that contains `.citymap/`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::drag::DEFAULT_PICK_RADIUS;
use crate::error::{Error, Result};

/// Name of the per-project directory.
pub const CONFIG_DIR_NAME: &str = ".citymap";

/// Name of the configuration file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Default database location, relative to the project root.
pub const DEFAULT_DATABASE: &str = ".citymap/city_map.db";

/// Configuration file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// SQLite database file.
    pub database: PathBuf,

    /// A press picks the nearest node only if it lands strictly closer than this.
    pub pick_radius: f64,

    /// Directory export files are written to.
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            pick_radius: DEFAULT_PICK_RADIUS,
            export_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Load `<root>/.citymap/config.yaml`, falling back to defaults if absent.
    ///
    /// Relative `database` and `export-dir` paths are joined onto `root`.
    pub fn discover(root: &Path) -> Result<Self> {
        let path = Self::path_in(root);
        let mut config = if path.is_file() {
            tracing::debug!(path = %path.display(), "Loading configuration");
            Self::load(&path)?
        } else {
            tracing::debug!(root = %root.display(), "No configuration file, using defaults");
            Self::default()
        };
        config.database = resolve(root, &config.database);
        config.export_dir = resolve(root, &config.export_dir);
        Ok(config)
    }

    /// Location of the configuration file for a project root.
    #[must_use]
    pub fn path_in(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
    }

    fn validate(&self) -> Result<()> {
        if !self.pick_radius.is_finite() || self.pick_radius < 0.0 {
            return Err(Error::Config(format!(
                "pick-radius must be a non-negative number, got {}",
                self.pick_radius
            )));
        }
        Ok(())
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
