use clap::Args;
use serde::Serialize;

use iconforge::git::Git;
use iconforge::local_files;
use iconforge::refactor::{self, FileRename, NextSteps, RenameOptions};

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct RenameArgs {
    /// Current icon name (file stem of <name>.svg / <name>.json)
    pub old_name: String,
    /// New icon name
    pub new_name: String,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RenameOutput {
    #[serde(rename = "icon.rename")]
    Rename {
        old_name: String,
        new_name: String,
        artwork: FileRename,
        metadata: FileRename,
        aliases: Vec<String>,
        next_steps: NextSteps,
    },
}

pub fn run(args: RenameArgs, global: &GlobalArgs) -> CmdResult<RenameOutput> {
    let settings = global.settings()?;
    let git = Git::discover(&settings.icons_dir)?;

    let result = refactor::rename_icon(
        &local_files::local(),
        &git,
        &settings.icons_dir,
        &args.old_name,
        &args.new_name,
        &RenameOptions {
            log_info: settings.log_info,
        },
    )?;

    Ok((
        RenameOutput::Rename {
            old_name: result.old_name,
            new_name: result.new_name,
            artwork: result.artwork,
            metadata: result.metadata,
            aliases: result.aliases,
            next_steps: result.next_steps,
        },
        0,
    ))
}
