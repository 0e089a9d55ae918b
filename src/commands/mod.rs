use std::path::PathBuf;

use iconforge::defaults::{self, IconforgeConfig};

pub type CmdResult<T> = iconforge::Result<(T, i32)>;

/// Flags shared by every subcommand.
pub(crate) struct GlobalArgs {
    pub icons_dir: Option<String>,
    pub quiet: bool,
}

/// Flags merged over iconforge.json.
pub(crate) struct Settings {
    pub icons_dir: PathBuf,
    pub log_info: bool,
    pub hash_seed: u32,
}

impl GlobalArgs {
    pub fn settings(&self) -> iconforge::Result<Settings> {
        let cwd = std::env::current_dir().map_err(|e| {
            iconforge::Error::internal_io(e.to_string(), Some("resolve current dir".to_string()))
        })?;
        let config: IconforgeConfig = defaults::load_config_from(&cwd)?;

        let icons_dir = match &self.icons_dir {
            Some(dir) => defaults::resolve_dir(dir, &cwd),
            None => config.resolve_icons_dir(&cwd),
        };

        Ok(Settings {
            icons_dir,
            log_info: config.log_info && !self.quiet,
            hash_seed: config.hash_seed,
        })
    }
}

pub mod case;
pub mod duplicates;
pub mod hash;
pub mod list;
pub mod metadata;
pub mod minify;
pub mod rename;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args))
    };
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (iconforge::Result<serde_json::Value>, i32) {
    if !global.quiet {
        crate::tty::status("iconforge is working...");
    }

    match command {
        // Commands without global context
        crate::Commands::Case(args) => dispatch!(args, case),
        crate::Commands::Minify(args) => dispatch!(args, minify),

        // Commands with global context
        crate::Commands::Rename(args) => dispatch!(args, global, rename),
        crate::Commands::Duplicates(args) => dispatch!(args, global, duplicates),
        crate::Commands::Metadata(args) => dispatch!(args, global, metadata),
        crate::Commands::List(args) => dispatch!(args, global, list),
        crate::Commands::Hash(args) => dispatch!(args, global, hash),
    }
}
