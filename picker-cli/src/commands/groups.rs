use anyhow::Result;

use super::AppContext;

pub fn run() -> Result<()> {
    let ctx = AppContext::load()?;

    if ctx.config.groups.is_empty() {
        eprintln!("No groups are configured. Run `rp gen-config` to create a sample config.");
        return Ok(());
    }

    for name in ctx.config.group_names() {
        if ctx.config.default_group.as_deref() == Some(name.as_str()) {
            println!("{} (default)", name);
        } else {
            println!("{}", name);
        }
    }
    Ok(())
}
