use clap::Args;
use serde::Serialize;

use iconforge::local_files;
use iconforge::sequence;
use iconforge::svg;

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct ListArgs {
    /// Return names in random order
    #[arg(long)]
    pub shuffle: bool,

    /// Return at most this many names
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct ListOutput {
    pub total: usize,
    pub icons: Vec<String>,
}

pub fn run(args: ListArgs, global: &GlobalArgs) -> CmdResult<ListOutput> {
    let settings = global.settings()?;
    let names = svg::list_icon_names(&local_files::local(), &settings.icons_dir)?;
    let total = names.len();

    let mut icons = if args.shuffle {
        sequence::shuffle(&names)
    } else {
        names
    };

    if let Some(limit) = args.limit {
        icons.truncate(limit);
    }

    Ok((ListOutput { total, icons }, 0))
}
