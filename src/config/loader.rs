//! Configuration loading utilities
//!
//! Resolves the config file location and layers file, environment and
//! defaults into validated [`Settings`].

use crate::{Result, config::Settings};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable pointing at a TOML config file
pub const CONFIG_PATH_ENV: &str = "BUNNYSTREAM_CONFIG";

/// Builds validated [`Settings`] from a config file and `BUNNY_*` variables
#[derive(Debug)]
pub struct ConfigLoader {
    /// Starting point before the file and environment are layered on
    defaults: Settings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            defaults: Settings::default(),
        }
    }

    /// `<config_dir>/bunnystream/config.toml`, if the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bunnystream").join("config.toml"))
    }

    /// Locate an existing config file.
    ///
    /// `BUNNYSTREAM_CONFIG` is tried first, then [`Self::default_config_path`].
    /// A variable naming a missing file is skipped with a warning.
    pub fn get_config_path() -> Option<PathBuf> {
        let from_env = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        if let Some(path) = &from_env
            && !path.exists()
        {
            warn!(
                env = CONFIG_PATH_ENV,
                path = %path.display(),
                "Config path from environment does not exist, skipping"
            );
        }

        let found = from_env
            .into_iter()
            .chain(Self::default_config_path())
            .find(|path| path.exists());

        match &found {
            Some(path) => debug!(path = %path.display(), "Found Bunny Stream config"),
            None => debug!("No Bunny Stream config file found"),
        }
        found
    }

    /// Layer `config_file` (if it exists), then `BUNNY_*` variables, then
    /// built-in defaults for anything still unset.
    ///
    /// The returned settings have passed [`Settings::validate`].
    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        let mut settings = match config_file {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "Reading Bunny Stream config");
                Settings::from_file(path)?
            }
            Some(path) => {
                warn!(
                    path = %path.display(),
                    "Config file missing, continuing with environment only"
                );
                self.defaults.clone()
            }
            None => self.defaults.clone(),
        };

        settings = settings.merge_with_env()?;
        settings.apply_defaults();
        settings.validate()?;

        info!(
            library_id = %settings.api.library_id,
            base_url = %settings.api.base_url,
            "Bunny Stream settings ready"
        );
        Ok(settings)
    }

    /// Like [`Self::load`] with no file
    pub fn from_env_only(&self) -> Result<Settings> {
        self.load(None)
    }

    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
