use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;

use iconforge::local_files;
use iconforge::metadata::{self, IconMetadata};

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct MetadataArgs {
    /// Only report these keys for each icon
    #[arg(long = "key", value_name = "KEY")]
    pub keys: Vec<String>,
}

#[derive(Serialize)]
pub struct MetadataOutput {
    pub count: usize,
    pub icons: BTreeMap<String, IconMetadata>,
}

pub fn run(args: MetadataArgs, global: &GlobalArgs) -> CmdResult<MetadataOutput> {
    let settings = global.settings()?;
    let mut icons = metadata::read_all_metadata(&local_files::local(), &settings.icons_dir)?;

    if !args.keys.is_empty() {
        for entry in icons.values_mut() {
            *entry = entry.select(&args.keys);
        }
    }

    Ok((
        MetadataOutput {
            count: icons.len(),
            icons,
        },
        0,
    ))
}
