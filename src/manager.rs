//! Best-effort writer for the user-configured log file.
//!
//! The manager never holds the file open: every operation opens the file,
//! does its work, flushes and closes it again. The silent operations swallow
//! every failure; the `try_*` variants report them.

use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::clock::{Clock, LocalClock};
use crate::config::{ConfigStore, LogSettings};
use crate::errors::{LogFileError, LogFileResult};
use crate::quiet::QuietLogs;
use crate::utils::format::format_entry;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Holds whether logging is active and where entries go.
///
/// A default manager is inactive with no file, so [`write_line`] does
/// nothing until [`initialize_from_config`] loads real settings.
///
/// [`write_line`]: LogFileManager::write_line
/// [`initialize_from_config`]: LogFileManager::initialize_from_config
#[derive(Debug, Clone)]
pub struct LogFileManager<C: Clock = LocalClock> {
    settings: LogSettings,
    clock: C,
}

impl Default for LogFileManager<LocalClock> {
    fn default() -> Self {
        Self::with_clock(LocalClock)
    }
}

impl LogFileManager<LocalClock> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> LogFileManager<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            settings: LogSettings::default(),
            clock,
        }
    }

    /// Take over `settings` without touching the log file.
    pub fn with_settings(mut self, settings: &LogSettings) -> Self {
        self.settings = settings.clone();
        self
    }

    pub fn is_activated(&self) -> bool {
        self.settings.activated
    }

    pub fn log_file(&self) -> &Path {
        Path::new(&self.settings.file)
    }

    /// True when a call to `write_line` would touch the file system
    pub fn is_enabled(&self) -> bool {
        self.settings.is_enabled()
    }

    pub fn settings(&self) -> &LogSettings {
        &self.settings
    }

    /// Load the activation flag and file path from `store`, then empty the
    /// log file (creating it if needed) when logging is enabled.
    ///
    /// Failures are swallowed; see [`Self::try_initialize_from_config`].
    pub fn initialize_from_config(&mut self, store: &dyn ConfigStore) {
        if let Err(e) = self.try_initialize_from_config(store) {
            debug!("Log file not reset: {}", e);
        }
    }

    pub fn try_initialize_from_config(&mut self, store: &dyn ConfigStore) -> LogFileResult<()> {
        let _quiet = QuietLogs::new();
        self.settings = LogSettings::load(store);

        if !self.is_enabled() {
            return Ok(());
        }
        reset_file(self.log_file())
    }

    /// Append one timestamped line to the log file.
    ///
    /// Does nothing when logging is inactive or no file is configured.
    /// Failures are swallowed; see [`Self::try_write_line`].
    pub fn write_line(&self, message: &str) {
        if let Err(e) = self.try_write_line(message) {
            debug!("Log entry dropped: {}", e);
        }
    }

    /// Returns `Ok(false)` when logging is disabled and nothing was written.
    pub fn try_write_line(&self, message: &str) -> LogFileResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let _quiet = QuietLogs::new();
        let entry = format_entry(&self.clock.now(), message);
        append_entry(self.log_file(), &entry)?;
        Ok(true)
    }
}

/// Truncate an existing file or create a missing one.
fn reset_file(path: &Path) -> LogFileResult<()> {
    if path.exists() {
        let mut file = OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|e| LogFileError::open(path, e))?;
        file.set_len(0).map_err(|e| LogFileError::write(path, e))?;
        file.flush().map_err(|e| LogFileError::write(path, e))?;
    } else {
        File::create(path).map_err(|e| LogFileError::create(path, e))?;
    }
    Ok(())
}

fn append_entry(path: &Path, entry: &str) -> LogFileResult<()> {
    let mut options = OpenOptions::new();
    options.read(true).append(true);

    let mut file = if path.exists() {
        options.open(path).map_err(|e| LogFileError::open(path, e))?
    } else {
        options
            .create(true)
            .open(path)
            .map_err(|e| LogFileError::create(path, e))?
    };

    let mut line = String::with_capacity(entry.len() + 2 * LINE_ENDING.len());
    if ends_mid_line(&mut file).map_err(|e| LogFileError::write(path, e))? {
        line.push_str(LINE_ENDING);
    }
    line.push_str(entry);
    line.push_str(LINE_ENDING);

    file.write_all(line.as_bytes())
        .map_err(|e| LogFileError::write(path, e))?;
    file.flush().map_err(|e| LogFileError::write(path, e))
}

/// Whether the file has content whose last byte is not a newline
fn ends_mid_line(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
