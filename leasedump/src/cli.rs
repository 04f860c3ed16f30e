use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Where ISC dhcpd keeps its lease database by default.
const DEFAULT_LEASE_FILE: &str = "/var/lib/dhcp/dhcpd.leases";

#[derive(Parser, Debug)]
#[command(name = "leasedump")]
#[command(about = "Inspect ISC dhcpd lease database files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print every lease block in the file.
    Dump(DumpArgs),
    /// Print aggregate counts for the file.
    Stats(StatsArgs),
}

#[derive(Parser, Debug)]
pub struct DumpArgs {
    /// Lease database to read.
    #[arg(default_value = DEFAULT_LEASE_FILE)]
    pub file: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// One line per lease instead of full blocks.
    #[arg(long)]
    pub summary: bool,
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Lease database to read.
    #[arg(default_value = DEFAULT_LEASE_FILE)]
    pub file: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
