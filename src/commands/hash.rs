use clap::Args;
use serde::Serialize;

use iconforge::fingerprint;

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct HashArgs {
    /// String to fingerprint
    pub input: String,

    /// Seed value (default: hashSeed from iconforge.json, else 5381)
    #[arg(long)]
    pub seed: Option<u32>,
}

#[derive(Serialize)]
pub struct HashOutput {
    pub input: String,
    pub seed: u32,
    pub fingerprint: String,
}

pub fn run(args: HashArgs, global: &GlobalArgs) -> CmdResult<HashOutput> {
    let seed = match args.seed {
        Some(seed) => seed,
        None => global.settings()?.hash_seed,
    };

    Ok((
        HashOutput {
            fingerprint: fingerprint::hash(&args.input, seed),
            input: args.input,
            seed,
        },
        0,
    ))
}
