//! Runtime configuration derived from the CLI and the environment

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{AppError, Result};

/// Where the record stream comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read records from standard input
    Stdin,

    /// Read records from a file
    File(PathBuf),
}

impl InputSource {
    /// Open the source for line-buffered reading.
    ///
    /// A file that cannot be opened fails here, before any line is
    /// processed, so a mistyped path surfaces immediately.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|e| {
                    AppError::io(format!(
                        "cannot open input file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Record stream source
    pub input: InputSource,

    /// Color stderr diagnostics
    pub use_color: bool,

    /// Print a processing summary on stderr after the stream ends
    pub emit_summary: bool,
}

impl RunConfig {
    /// Build the runtime configuration from parsed CLI arguments.
    ///
    /// stdout stays reserved for records, so everything beyond the input
    /// selection is driven by the environment: color detection follows
    /// the usual TERM/NO_COLOR/FORCE_COLOR conventions and LATENCY_DEBUG
    /// opts into an end-of-stream summary on stderr.
    pub fn from_cli(cli: &Cli) -> Self {
        let input = match &cli.infile {
            Some(path) => InputSource::File(path.clone()),
            None => InputSource::Stdin,
        };

        Self {
            input,
            use_color: supports_color(),
            emit_summary: summary_enabled(),
        }
    }
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    // Check for common environment variables that indicate color support
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check for NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for FORCE_COLOR environment variable
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // On Windows, check for ANSICON or ConEmu
    #[cfg(target_os = "windows")]
    {
        if std::env::var("ANSICON").is_ok() || std::env::var("ConEmuANSI").is_ok() {
            return true;
        }
    }

    // Default to true on Unix-like systems, false on Windows
    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}

/// Check if the end-of-stream summary was requested
fn summary_enabled() -> bool {
    std::env::var("LATENCY_DEBUG").is_ok()
}
