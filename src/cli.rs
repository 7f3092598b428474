//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

/// Packet Latency Calculator - turns timestamped packet records into latency records
#[derive(Parser, Debug, Clone)]
#[command(name = "latency")]
#[command(version = crate::VERSION, long_about = None)]
#[command(long_version = crate::long_version())]
pub struct Cli {
    /// File with line-delimited JSON records; reads standard input when omitted
    #[arg(value_name = "INFILE")]
    pub infile: Option<PathBuf>,
}
