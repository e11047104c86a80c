use anyhow::Result;
use clap::{Args, Subcommand};

use super::AppContext;
use crate::config::ConfigLoader;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the loaded group registry
    Show,
    /// Show configuration and history paths
    Path,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(),
        ConfigCommands::Path => show_paths(),
    }
}

fn show_config() -> Result<()> {
    let ctx = AppContext::load()?;
    print!("{}", ctx.config.to_yaml_string()?);
    Ok(())
}

fn show_paths() -> Result<()> {
    println!("Config file:  {}", ConfigLoader::config_path().display());
    println!("History dir:  {}", ConfigLoader::history_dir().display());
    Ok(())
}
