pub mod completion;
pub mod config;
pub mod gen_config;
pub mod groups;
pub mod list;
pub mod pick;
pub mod reset;

use anyhow::{Context, Result};
use picker_core::{FileHistoryStore, PickerConfig};

use crate::config::ConfigLoader;

/// Registry and history store shared by the group commands
pub struct AppContext {
    pub config: PickerConfig,
    pub store: FileHistoryStore,
}

impl AppContext {
    pub fn load() -> Result<Self> {
        let config = ConfigLoader::load().with_context(|| {
            format!(
                "Failed to load settings from {}",
                ConfigLoader::config_path().display()
            )
        })?;
        Ok(Self {
            config,
            store: FileHistoryStore::new(ConfigLoader::history_dir()),
        })
    }

    /// Name of the group selected by `--group` or `default_group`.
    pub fn group_name<'a>(&'a self, requested: Option<&'a str>) -> Result<&'a str> {
        Ok(&self.config.resolve_group(requested)?.name)
    }
}
