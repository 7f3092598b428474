//! Error handling for the packet latency calculator

use thiserror::Error;

/// Custom error types for the packet latency calculator
#[derive(Error, Debug)]
pub enum AppError {
    /// Parsing errors (a line that is not valid JSON)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Validation errors (valid JSON with a malformed record shape)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Timestamp errors (unparseable or out-of-range timestamp strings)
    #[error("Timestamp error: {0}")]
    Timestamp(String),

    /// I/O errors (file operations, stream reads and writes)
    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new timestamp error
    pub fn timestamp<S: Into<String>>(message: S) -> Self {
        Self::Timestamp(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Get error category for diagnostics and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse(_) => "PARSE",
            Self::Validation(_) => "VALIDATION",
            Self::Timestamp(_) => "TIMESTAMP",
            Self::Io(_) => "IO",
        }
    }

    /// Check if the error is scoped to a single input line.
    ///
    /// Line-scoped errors are reported and the offending line is skipped;
    /// the stream keeps flowing. Everything else aborts the run.
    pub fn is_line_scoped(&self) -> bool {
        match self {
            Self::Parse(_) | Self::Validation(_) | Self::Timestamp(_) => true,
            Self::Io(_) => false,
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Parse(_) | Self::Validation(_) | Self::Timestamp(_) => 1, // Invalid input data
            Self::Io(_) => 5, // I/O issues
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Parse(_) | Self::Validation(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Timestamp(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Io(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse(format!("JSON parse error: {}", error))
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(error: chrono::ParseError) -> Self {
        Self::timestamp(format!("Timestamp parse error: {}", error))
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Diagnostic reporter for per-line error output on stderr
pub struct DiagnosticReporter {
    pub use_color: bool,
}

impl DiagnosticReporter {
    /// Create a new diagnostic reporter
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Report a line-scoped error to the user.
    ///
    /// Emits exactly one stderr line per call so downstream log collectors
    /// can count and correlate diagnostics with input line numbers.
    pub fn report_line(&self, line_number: u64, error: &AppError) {
        eprintln!(
            "line {}: {}",
            line_number,
            error.format_for_console(self.use_color)
        );
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new(false)
    }
}
