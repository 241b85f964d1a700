//! Parse command - print the canonical form of a range.

use anyhow::{Context, Result};
use clap::Args;

use semrange::Range;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version range to parse
    pub range: String,

    /// Print the parsed tree instead of the canonical form
    #[arg(short = 't', long)]
    pub tree: bool,
}

pub fn execute(args: ParseArgs) -> Result<i32> {
    let range = Range::parse(&args.range)
        .with_context(|| format!("Invalid range \"{}\"", args.range))?;

    if args.tree {
        println!("{:#?}", range);
    } else {
        println!("{}", range);
    }

    Ok(0)
}
