use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use iconforge::local_files::{self, FileSystem};
use iconforge::svg;

use super::CmdResult;

#[derive(Args)]
pub struct MinifyArgs {
    /// Path to the SVG file
    pub file: PathBuf,

    /// Overwrite the file with the minified markup
    #[arg(long)]
    pub write: bool,
}

#[derive(Serialize)]
pub struct MinifyOutput {
    pub file: String,
    pub original_bytes: usize,
    pub minified_bytes: usize,
    pub written: bool,
    pub svg: String,
}

pub fn run(args: MinifyArgs) -> CmdResult<MinifyOutput> {
    let fs = local_files::local();
    let original = fs.read(&args.file)?;
    let minified = svg::minify_svg(&original);

    if args.write {
        fs.write(&args.file, &minified)?;
    }

    Ok((
        MinifyOutput {
            file: args.file.display().to_string(),
            original_bytes: original.len(),
            minified_bytes: minified.len(),
            written: args.write,
            svg: minified,
        },
        0,
    ))
}
