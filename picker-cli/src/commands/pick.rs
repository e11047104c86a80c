use anyhow::Result;
use picker_core::{PickEvent, Picker};

use super::AppContext;

pub fn run(group: Option<&str>) -> Result<()> {
    let ctx = AppContext::load()?;
    let group = ctx.group_name(group)?;

    let picker = Picker::new(&ctx.config, &ctx.store).with_observer(&announce);
    let pick = picker.choose_one(group)?;

    // stdout carries only the value so it can be piped
    println!("{}", pick.item);
    Ok(())
}

fn announce(event: &PickEvent<'_>) {
    match event {
        PickEvent::Exhausted { .. } => {
            eprintln!("All items have been chosen. Resetting the list.");
        }
        PickEvent::Reset { outcome, .. } if outcome.was_reset() => {
            eprintln!("Chosen items list has been reset.");
        }
        PickEvent::Reset { .. } => {}
    }
}
