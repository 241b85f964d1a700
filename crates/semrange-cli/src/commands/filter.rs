//! Filter command - print the versions that satisfy a range.

use anyhow::{Context, Result};
use clap::Args;

use semrange::Range;

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Version range to filter with
    pub range: String,

    /// Candidate versions
    #[arg(required = true)]
    pub versions: Vec<String>,
}

/// Versions from `args` that satisfy the range, in input order
fn matching(range: &Range, versions: &[String]) -> Vec<String> {
    versions.iter().filter(|v| range.matches(v)).cloned().collect()
}

pub fn execute(args: FilterArgs) -> Result<i32> {
    let range = Range::parse(&args.range)
        .with_context(|| format!("Invalid range \"{}\"", args.range))?;

    let matched = matching(&range, &args.versions);
    log::debug!("{} of {} versions satisfy {}", matched.len(), args.versions.len(), range);

    for version in &matched {
        println!("{}", version);
    }

    Ok(0)
}
