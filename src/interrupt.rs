//! Interrupt handling for clean shutdown

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use signal_hook::consts::signal::{SIGINT, SIGTERM};
use signal_hook::flag;

use crate::error::{AppError, Result};

/// Register SIGINT and SIGTERM to raise a shared shutdown flag.
///
/// The handler does nothing but set the flag. The pump polls it between
/// lines, so a running transfer winds down at a line boundary instead of
/// mid-record, and the process exits cleanly.
pub fn install_flag() -> Result<Arc<AtomicBool>> {
    let shutdown = Arc::new(AtomicBool::new(false));

    for signal in [SIGINT, SIGTERM] {
        flag::register(signal, Arc::clone(&shutdown))
            .map_err(|e| AppError::io(format!("cannot register signal handler: {}", e)))?;
    }

    Ok(shutdown)
}
