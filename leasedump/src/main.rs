use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use leasedump::loader::read_locked;
use leasedump::report::{render_stats, render_summary, render_text, render_warnings};
use leasedump::stats::build_stats;
use leasefile_core::LeaseSet;

mod cli;

use cli::{Cli, Command, DumpArgs, OutputFormat, StatsArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Dump(args) => run_dump(args),
        Command::Stats(args) => run_stats(args),
    }
}

fn run_dump(args: DumpArgs) -> Result<()> {
    let set = load(&args.file)?;

    match args.format {
        OutputFormat::Text => {
            if args.summary {
                println!("{}", render_summary(set.records()));
            } else {
                println!("{}", render_text(set.records()));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(set.records())?),
    }

    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<()> {
    let set = load(&args.file)?;
    let stats = build_stats(&set);

    match args.format {
        OutputFormat::Text => println!("{}", render_stats(&stats)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }

    Ok(())
}

fn load(path: &Path) -> Result<LeaseSet> {
    let text = read_locked(path)?;
    let set = leasefile_core::parse(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    if !set.malformed_timestamps().is_empty() {
        eprintln!("{}", render_warnings(set.malformed_timestamps()));
    }

    Ok(set)
}
