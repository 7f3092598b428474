//! Packet Latency Calculator
//!
//! A streaming transformer for packet telemetry: reads line-delimited JSON
//! records, computes per-packet latencies from their capture timestamps,
//! and forwards receive errors unchanged, one flushed line at a time.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod interrupt;
pub mod latency;
pub mod models;
pub mod stream;

// Re-export commonly used types
pub use error::{AppError, DiagnosticReporter, Result};
pub use latency::calc_latency;
pub use models::{
    parse_timestamp, InputRecord, LatencyObject, LatencyRecord, Nanos, PacketTimestamps,
};
pub use stream::{ProcessingStats, StreamTransformer};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Version string enriched with build metadata when available
pub fn long_version() -> String {
    let mut version = String::from(VERSION);

    if let Some(commit) = option_env!("GIT_COMMIT") {
        version.push_str(&format!(" ({})", commit));
    }
    if let Some(build_time) = option_env!("BUILD_TIME") {
        version.push_str(&format!(", built {}", build_time));
    }
    if let Some(target) = option_env!("TARGET_TRIPLE") {
        version.push_str(&format!(" for {}", target));
    }

    version
}
