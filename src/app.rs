//! Main application orchestration and execution

use std::io;

use crate::{
    cli::Cli,
    config::RunConfig,
    error::{DiagnosticReporter, Result},
    interrupt,
    stream::{ProcessingStats, StreamTransformer},
};

/// Main application struct that coordinates all components
pub struct App {
    cli: Cli,
}

impl App {
    /// Create a new application instance with CLI configuration
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the application
    pub fn run(self) -> Result<ProcessingStats> {
        let config = RunConfig::from_cli(&self.cli);

        // Open the input before anything else so a bad path fails up front.
        let reader = config.input.open()?;
        let shutdown = interrupt::install_flag()?;

        let stdout = io::stdout();
        let transformer = StreamTransformer::new(
            stdout.lock(),
            DiagnosticReporter::new(config.use_color),
            shutdown,
        );

        let stats = transformer.run(reader)?;

        if config.emit_summary {
            eprintln!("{}", stats.summary());
        }

        Ok(stats)
    }
}
