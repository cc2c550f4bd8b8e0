//! Command dispatch for the `lfm` host.
//!
//! Log file failures never surface here; only configuration and stdin
//! failures come back as errors, which the binary turns into a non-zero exit.

use log::debug;
use std::io::BufRead;

use crate::cli::{CliArgs, Commands, ConfigAction};
use crate::clock::Clock;
use crate::config::{self, LogSettings, TomlStore};
use crate::errors::AppResult;
use crate::manager::LogFileManager;

/// Run the parsed command line. `input` feeds `lfm run`.
pub fn execute<R: BufRead>(args: &CliArgs, input: R) -> AppResult<()> {
    if let Commands::ResetConfig = args.command {
        return config::reset_configuration();
    }

    let mut store = args.open_store()?;
    debug!("Settings loaded from {}", store.path().display());
    run_command(&mut store, args.command.clone(), input)
}

pub fn run_command<R: BufRead>(store: &mut TomlStore, command: Commands, input: R) -> AppResult<()> {
    match command {
        Commands::Init => {
            let mut manager = LogFileManager::new();
            manager.initialize_from_config(&*store);
        }
        Commands::Write { message } => {
            let manager = LogFileManager::new().with_settings(&LogSettings::load(&*store));
            manager.write_line(&message.join(" "));
        }
        Commands::Run => {
            let mut manager = LogFileManager::new();
            manager.initialize_from_config(&*store);
            let count = log_lines(&manager, input)?;
            debug!("Logged {} lines from input", count);
        }
        Commands::Config { action } => run_config_action(store, action)?,
        Commands::ResetConfig => config::reset_configuration()?,
    }
    Ok(())
}

fn run_config_action(store: &mut TomlStore, action: ConfigAction) -> AppResult<()> {
    match action {
        ConfigAction::Show => {
            let settings = LogSettings::load(&*store);
            println!("Settings file: {}", store.path().display());
            println!("Log/Activated = {}", settings.activated);
            println!("Log/File = {:?}", settings.file);
        }
        ConfigAction::Set { activated, file } => {
            let mut settings = LogSettings::load(&*store);
            settings.update_setting(store, |s| {
                if let Some(activated) = activated {
                    s.activated = activated;
                }
                if let Some(file) = file {
                    s.file = file;
                }
            });
            store.save()?;
            println!("Saved settings to {}", store.path().display());
        }
    }
    Ok(())
}

/// Write every line of `input` as one entry until EOF.
///
/// Lines are split on `\n` with a trailing `\r` dropped; invalid UTF-8 is
/// replaced rather than ending the loop. Returns the number of lines read.
pub fn log_lines<C: Clock, R: BufRead>(manager: &LogFileManager<C>, mut input: R) -> AppResult<usize> {
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        manager.write_line(&String::from_utf8_lossy(&buf));
        count += 1;
    }

    Ok(count)
}
