use anyhow::{Context, Result};
use tracing::info;

use crate::config::ConfigLoader;

pub fn run() -> Result<()> {
    let path = ConfigLoader::config_path();
    let config = ConfigLoader::write_default(&path)
        .with_context(|| format!("Failed to generate config at {}", path.display()))?;

    info!(path = %path.display(), groups = config.groups.len(), "generated config");
    println!("Default config file has been generated!");
    Ok(())
}
