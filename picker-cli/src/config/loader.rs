use std::path::{Path, PathBuf};

use picker_core::{ConfigError, PickerConfig};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the group registry from the user config path
    pub fn load() -> Result<PickerConfig, ConfigError> {
        Self::load_from_path(&Self::config_path())
    }

    /// Get the group registry path (`$XDG_CONFIG_HOME/random-picker/config.yaml`)
    pub fn config_path() -> PathBuf {
        picker_paths::config_file()
    }

    /// Get the directory holding per-group history files
    pub fn history_dir() -> PathBuf {
        picker_paths::cache_dir()
    }

    /// Load config from a specific path
    ///
    /// A missing file yields an empty registry.
    pub fn load_from_path(path: &Path) -> Result<PickerConfig, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using empty registry");
            return Ok(PickerConfig::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        PickerConfig::from_yaml_str(&contents)
    }

    /// Write the sample registry to `path`
    ///
    /// Creates parent directories if they don't exist. Refuses to overwrite an
    /// existing file.
    pub fn write_default(path: &Path) -> Result<PickerConfig, ConfigError> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }

        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let config = PickerConfig::sample();
        std::fs::write(path, config.to_yaml_string()?).map_err(write_err)?;
        debug!(path = %path.display(), "wrote default config");

        // Read back so the written file goes through the same validation as a load
        Self::load_from_path(path)
    }
}
