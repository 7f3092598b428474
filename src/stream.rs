//! The line pump: reads telemetry records, emits latencies, forwards errors

use std::io::{BufRead, ErrorKind, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;

use crate::error::{AppError, DiagnosticReporter, Result};
use crate::latency::calc_latency;
use crate::models::record::InputRecord;

/// Counters describing one processing run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Lines consumed from the input, whatever became of them
    pub lines_read: u64,

    /// rx-error records forwarded verbatim
    pub errors_forwarded: u64,

    /// Latency records computed and emitted
    pub latencies_emitted: u64,

    /// Lines dropped after a diagnostic (parse, validation, timestamp)
    pub lines_skipped: u64,

    /// Lines dropped silently (missing or unrecognized type)
    pub lines_ignored: u64,
}

impl ProcessingStats {
    /// Lines that produced output
    pub fn lines_emitted(&self) -> u64 {
        self.errors_forwarded + self.latencies_emitted
    }

    /// One-line human readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} lines read, {} latencies emitted, {} errors forwarded, {} skipped, {} ignored",
            self.lines_read,
            self.latencies_emitted,
            self.errors_forwarded,
            self.lines_skipped,
            self.lines_ignored
        )
    }
}

/// What to do after one line has been handled
#[derive(Clone, Copy)]
enum LineOutcome {
    Continue,
    Stop,
}

/// Streams records from a reader to a writer, one line at a time.
///
/// Each qualifying input line produces at most one output line, flushed
/// before the next line is read so downstream consumers see records as
/// they complete. A line that fails to parse or validate costs one
/// stderr diagnostic and nothing else.
pub struct StreamTransformer<W: Write> {
    writer: W,
    reporter: DiagnosticReporter,
    shutdown: Arc<AtomicBool>,
    stats: ProcessingStats,
}

impl<W: Write> StreamTransformer<W> {
    /// Create a transformer writing records to `writer`
    pub fn new(writer: W, reporter: DiagnosticReporter, shutdown: Arc<AtomicBool>) -> Self {
        Self {
            writer,
            reporter,
            shutdown,
            stats: ProcessingStats::default(),
        }
    }

    /// Pump the reader dry.
    ///
    /// Returns when the input ends, the shutdown flag is raised, or the
    /// downstream consumer goes away. Read and write failures other than
    /// an interrupted read or a broken pipe abort the run.
    pub fn run<R: BufRead>(mut self, mut reader: R) -> Result<ProcessingStats> {
        let mut line = String::new();

        loop {
            if self.shutdown.load(Ordering::Relaxed) {
                break;
            }

            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {
                    self.stats.lines_read += 1;
                    match self.process_line(trim_terminator(&line))? {
                        LineOutcome::Continue => {}
                        LineOutcome::Stop => break,
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(AppError::io(format!("cannot read input: {}", e))),
            }
        }

        Ok(self.stats)
    }

    /// Handle one line, terminator already stripped
    fn process_line(&mut self, raw: &str) -> Result<LineOutcome> {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => return Ok(self.skip(AppError::from(e))),
        };

        match InputRecord::classify(&value) {
            Ok(InputRecord::RxError) => {
                let outcome = self.emit(raw)?;
                if let LineOutcome::Continue = outcome {
                    self.stats.errors_forwarded += 1;
                }
                Ok(outcome)
            }
            Ok(InputRecord::RxPacket(timestamps)) => match calc_latency(&timestamps) {
                Ok(record) => {
                    let serialized = serde_json::to_string(&record)?;
                    let outcome = self.emit(&serialized)?;
                    if let LineOutcome::Continue = outcome {
                        self.stats.latencies_emitted += 1;
                    }
                    Ok(outcome)
                }
                Err(e) => Ok(self.skip(e)),
            },
            Ok(InputRecord::Other) => {
                self.stats.lines_ignored += 1;
                Ok(LineOutcome::Continue)
            }
            Err(e) => Ok(self.skip(e)),
        }
    }

    /// Write one output line and flush it through
    fn emit(&mut self, line: &str) -> Result<LineOutcome> {
        let written = writeln!(self.writer, "{}", line).and_then(|_| self.writer.flush());
        match written {
            Ok(()) => Ok(LineOutcome::Continue),
            // The consumer went away; stop as cleanly as at end of input.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(LineOutcome::Stop),
            Err(e) => Err(AppError::io(format!("cannot write output: {}", e))),
        }
    }

    /// Diagnose a line-scoped failure and move on
    fn skip(&mut self, error: AppError) -> LineOutcome {
        self.stats.lines_skipped += 1;
        self.reporter.report_line(self.stats.lines_read, &error);
        LineOutcome::Continue
    }
}

/// Strip the trailing newline, tolerating CRLF input
fn trim_terminator(line: &str) -> &str {
    let without_newline = line.strip_suffix('\n').unwrap_or(line);
    without_newline.strip_suffix('\r').unwrap_or(without_newline)
}
