mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "semrange")]
#[command(about = "Check versions against semantic version ranges")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether versions satisfy a range
    Check(commands::check::CheckArgs),

    /// Parse a range and print its canonical form
    Parse(commands::parse::ParseArgs),

    /// Print the versions that satisfy a range
    Filter(commands::filter::FilterArgs),

    /// Sort versions by precedence
    Sort(commands::sort::SortArgs),
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();

    init_logger(args.verbose);
    if args.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    log::debug!("Running {:?}", args.command);

    match args.command {
        Commands::Check(args) => commands::check::execute(args),
        Commands::Parse(args) => commands::parse::execute(args),
        Commands::Filter(args) => commands::filter::execute(args),
        Commands::Sort(args) => commands::sort::execute(args),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("{} {}", console::style("Error:").red().bold(), e);
            // Print the error chain for debugging
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
