//! Sort command - order versions by precedence.

use anyhow::Result;
use clap::Args;
use console::style;

use semrange::{RangeError, Version};

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short = 'r', long)]
    pub reverse: bool,
}

/// Stable sort of the parsable inputs, plus the parse error of every other input
fn sorted(inputs: &[String], reverse: bool) -> (Vec<&str>, Vec<RangeError>) {
    let mut parsed: Vec<(Version, &str)> = Vec::with_capacity(inputs.len());
    let mut errors = Vec::new();

    for input in inputs {
        match Version::parse(input) {
            Ok(version) => parsed.push((version, input.as_str())),
            Err(e) => errors.push(e),
        }
    }

    parsed.sort_by(|(a, _), (b, _)| {
        let cmp = a.precedence_cmp(b);
        if reverse {
            cmp.reverse()
        } else {
            cmp
        }
    });

    (parsed.into_iter().map(|(_, input)| input).collect(), errors)
}

pub fn execute(args: SortArgs) -> Result<i32> {
    let (versions, errors) = sorted(&args.versions, args.reverse);

    for e in &errors {
        eprintln!("{} skipping {}", style("Warning:").yellow().bold(), e);
    }

    for version in versions {
        println!("{}", version);
    }

    Ok(0)
}
