//! Check command - report whether each version satisfies a range.

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use semrange::{Range, RangeNode, Version};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Version range, e.g. "^1.2 || ~2.4"
    pub range: String,

    /// Versions to check
    #[arg(required = true)]
    pub versions: Vec<String>,
}

pub fn execute(args: CheckArgs) -> Result<i32> {
    let range = Range::parse(&args.range)
        .with_context(|| format!("Invalid range \"{}\"", args.range))?;

    let mut all_satisfied = true;
    for input in &args.versions {
        let version = match Version::parse(input) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{} {}", style("Warning:").yellow().bold(), e);
                all_satisfied = false;
                continue;
            }
        };

        if range.is_satisfied_by(&version) {
            println!("{} {}", style("✓").green().bold(), input);
        } else {
            log::debug!("{} is outside {}", version, range);
            println!("{} {}", style("✗").red().bold(), input);
            all_satisfied = false;
        }
    }

    Ok(if all_satisfied { 0 } else { 1 })
}
