use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{case, duplicates, hash, list, metadata, minify, rename};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "iconforge")]
#[command(version = VERSION)]
#[command(about = "Build helpers for SVG icon sets")]
struct Cli {
    /// Icons directory (overrides iconsDir from iconforge.json)
    #[arg(long, global = true)]
    icons_dir: Option<String>,

    /// Suppress progress messages on stderr
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename an icon, its metadata file and its aliases
    #[command(visible_alias = "mv")]
    Rename(rename::RenameArgs),
    /// Report icons containing duplicated child elements
    Duplicates(duplicates::DuplicatesArgs),
    /// Read and validate every metadata file
    Metadata(metadata::MetadataArgs),
    /// List icon names
    #[command(visible_alias = "ls")]
    List(list::ListArgs),
    /// Minify an SVG file
    Minify(minify::MinifyArgs),
    /// Compute the short fingerprint of a string
    Hash(hash::HashArgs),
    /// Show camel, pascal and kebab forms of a name
    Case(case::CaseArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs {
        icons_dir: cli.icons_dir,
        quiet: cli.quiet,
    };

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    if output::print_json_result(json_result).is_err() {
        return std::process::ExitCode::from(exit_code_to_u8(1));
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
