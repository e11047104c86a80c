use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "rp",
    about = "Random item picker",
    long_about = "Random item picker (rp) picks items from named groups at random, \
                  never repeating an item until every item in the group has been picked."
)]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Group name (defaults to default_group from the config)
    #[arg(short, long, global = true)]
    group: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured items
    List(commands::list::ListArgs),
    /// Reset the chosen items list, keeping the last two picks
    Reset(commands::reset::ResetArgs),
    /// List configured groups
    Groups,
    /// Generate shell completion
    Completion(commands::completion::CompletionArgs),
    /// Generate sample config
    GenConfig,
    /// Inspect configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let filter = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let group = cli.group.as_deref();
    match cli.command {
        None => commands::pick::run(group),
        Some(Commands::List(args)) => commands::list::run(args, group),
        Some(Commands::Reset(args)) => commands::reset::run(args, group),
        Some(Commands::Groups) => commands::groups::run(),
        Some(Commands::Completion(args)) => commands::completion::run(args),
        Some(Commands::GenConfig) => commands::gen_config::run(),
        Some(Commands::Config(args)) => commands::config::run(args),
    }
}
