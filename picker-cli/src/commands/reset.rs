use anyhow::Result;
use clap::Args;
use picker_core::Picker;
use tracing::info;

use super::AppContext;

#[derive(Args)]
pub struct ResetArgs {
    /// Clear the whole history instead of keeping the last two picks
    #[arg(long)]
    pub all: bool,
}

pub fn run(args: ResetArgs, group: Option<&str>) -> Result<()> {
    let ctx = AppContext::load()?;
    let group = ctx.group_name(group)?;

    let picker = Picker::new(&ctx.config, &ctx.store);
    let outcome = if args.all {
        picker.reset_all(group)?
    } else {
        picker.reset(group)?
    };

    if outcome.was_reset() {
        println!("Chosen items list has been reset.");
    } else {
        info!(group, "nothing to reset");
    }
    Ok(())
}
