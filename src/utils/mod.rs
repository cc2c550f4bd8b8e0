//! Utility modules for entry formatting and diagnostic logging.

pub mod format;

use simplelog::*;
use std::fs::File;

/// Initialize diagnostic logging. By default, logs to console at warn level,
/// or debug level when `verbose` is set.
/// Set LFM_LOG_TO_FILE=1 to send debug logging to lfm-debug.log instead.
pub fn init(verbose: bool) {
    let log_to_file = std::env::var("LFM_LOG_TO_FILE").ok().as_deref() == Some("1");
    let console_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    if log_to_file {
        match File::create("lfm-debug.log") {
            Ok(log_file) => {
                let _ = CombinedLogger::init(vec![WriteLogger::new(
                    LevelFilter::Debug,
                    Config::default(),
                    log_file,
                )]);
            }
            Err(_) => {
                // Fallback to console if file cannot be created
                let _ = SimpleLogger::init(console_level, Config::default());
            }
        }
    } else {
        let _ = SimpleLogger::init(console_level, Config::default());
    }
}

pub use format::{format_entry, format_timestamp};
