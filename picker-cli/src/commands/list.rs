use std::io::{self, Write};

use anyhow::Result;
use clap::{Args, ValueEnum};
use picker_core::{ListKind, Reporter};

use super::AppContext;

#[derive(Args)]
pub struct ListArgs {
    /// Which items to list
    #[arg(value_enum, default_value_t = ListType::Chosen)]
    pub kind: ListType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListType {
    /// Every item in the group
    All,
    /// Items that have been chosen
    Chosen,
    /// Items that haven't been chosen yet
    Unchosen,
}

impl From<ListType> for ListKind {
    fn from(value: ListType) -> Self {
        match value {
            ListType::All => ListKind::All,
            ListType::Chosen => ListKind::Chosen,
            ListType::Unchosen => ListKind::Unchosen,
        }
    }
}

pub fn run(args: ListArgs, group: Option<&str>) -> Result<()> {
    let ctx = AppContext::load()?;
    let group = ctx.group_name(group)?;

    let listing = Reporter::new(&ctx.config, &ctx.store).list(args.kind.into(), group)?;
    if listing.is_empty() {
        eprintln!("{}", listing.empty_message());
        return Ok(());
    }

    let mut out = io::stdout().lock();
    for item in &listing.items {
        writeln!(out, "{}", item)?;
    }
    Ok(())
}
