//! Packet Latency Calculator - Main CLI Application
//!
//! Reads line-delimited JSON packet telemetry, emits one latency record
//! per received packet, and forwards receive errors unchanged.

use clap::Parser;
use packet_latency::{app::App, cli::Cli, error::AppError};
use std::error::Error;
use std::process;

fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        eprintln!(
            "Please report this issue at: https://github.com/netdev-tools/packet-latency/issues"
        );
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();

    if let Err(e) = App::new(cli).run() {
        eprintln!("Error: {}", e);

        if let Some(source) = e.source() {
            eprintln!("Caused by: {}", source);
        }

        // Print suggestions for common errors
        print_error_suggestions(&e);

        process::exit(e.exit_code());
    }
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Io { .. } => {
            eprintln!();
            eprintln!("I/O troubleshooting:");
            eprintln!("  - Check that the input file exists and is readable");
            eprintln!("  - Verify the downstream consumer is still running");
            eprintln!("  - Check free disk space if output goes to a file");
        }
        _ => {}
    }
}
