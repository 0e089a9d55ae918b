use clap::Args;
use serde::Serialize;

use iconforge::fingerprint::{self, DuplicateGroup};
use iconforge::local_files;
use iconforge::svg;

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct DuplicatesArgs {
    /// Only check these icons (default: every icon in the directory)
    pub names: Vec<String>,
}

#[derive(Serialize)]
pub struct DuplicateElement {
    pub element: String,
    pub fingerprint: String,
    pub indices: Vec<usize>,
}

#[derive(Serialize)]
pub struct IconDuplicates {
    pub icon: String,
    pub duplicates: Vec<DuplicateElement>,
}

#[derive(Serialize)]
pub struct DuplicatesOutput {
    pub scanned: usize,
    pub icons: Vec<IconDuplicates>,
}

/// Exit code 1 when any icon has duplicated children.
pub fn run(args: DuplicatesArgs, global: &GlobalArgs) -> CmdResult<DuplicatesOutput> {
    let settings = global.settings()?;
    let fs = local_files::local();

    let names = if args.names.is_empty() {
        svg::list_icon_names(&fs, &settings.icons_dir)?
    } else {
        args.names
    };

    let mut icons = Vec::new();
    for name in &names {
        let content = svg::read_svg(&fs, name, &settings.icons_dir)?;
        let children = svg::parse_children(&content);

        if !fingerprint::has_duplicated_children(&children) {
            continue;
        }

        let duplicates = fingerprint::duplicate_groups(&children)
            .into_iter()
            .map(|DuplicateGroup { fingerprint, indices }| DuplicateElement {
                element: children[indices[0]].name.clone(),
                fingerprint,
                indices,
            })
            .collect();

        icons.push(IconDuplicates {
            icon: name.trim_end_matches(".svg").to_string(),
            duplicates,
        });
    }

    if settings.log_info {
        iconforge::log_status!(
            "duplicates",
            "Scanned {} icons, {} with duplicated elements",
            names.len(),
            icons.len()
        );
    }

    let exit_code = if icons.is_empty() { 0 } else { 1 };

    Ok((
        DuplicatesOutput {
            scanned: names.len(),
            icons,
        },
        exit_code,
    ))
}
