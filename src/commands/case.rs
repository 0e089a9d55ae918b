use clap::Args;
use serde::Serialize;

use iconforge::case;

use super::CmdResult;

#[derive(Args)]
pub struct CaseArgs {
    /// Icon name, e.g. `arrow-left`
    pub name: String,
}

#[derive(Serialize)]
pub struct CaseOutput {
    pub name: String,
    pub camel: String,
    pub pascal: String,
    pub kebab: String,
}

pub fn run(args: CaseArgs) -> CmdResult<CaseOutput> {
    Ok((
        CaseOutput {
            camel: case::to_camel_case(&args.name),
            pascal: case::to_pascal_case(&args.name),
            kebab: case::to_kebab_case(&args.name),
            name: args.name,
        },
        0,
    ))
}
