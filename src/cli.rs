use clap::{Parser, Subcommand};
use log::debug;
use std::path::PathBuf;

use crate::config::TomlStore;
use crate::errors::AppResult;

/// Log File Manager - timestamped, best-effort application log file
#[derive(Parser, Debug)]
#[command(name = "lfm")]
#[command(version)]
#[command(about = "Append timestamped lines to the configured application log file")]
#[command(
    long_about = "lfm reads the Log/Activated and Log/File settings, clears the log file on start-up
and appends one timestamped line per message. Log file failures are never reported."
)]
pub struct CliArgs {
    /// Settings file to use instead of ~/.config/lfm/settings.toml
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Print diagnostic logging to the console
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load settings and clear (or create) the log file
    Init,
    /// Append one line to the log file without clearing it
    Write {
        /// Message words, joined with single spaces
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Clear the log file, then append every line read from stdin
    Run,
    /// Show or change the log settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Remove ~/.config/lfm and write default settings
    ResetConfig,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Update one or both settings and save them
    Set {
        /// Turn logging on or off
        #[arg(long, value_name = "BOOL")]
        activated: Option<bool>,

        /// Log file path; pass an empty string to unset
        #[arg(long, value_name = "PATH")]
        file: Option<String>,
    },
}

impl CliArgs {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Open the settings store, preferring --config over the default location
    pub fn open_store(&self) -> AppResult<TomlStore> {
        match &self.config {
            Some(path) => {
                debug!("Using settings file from --config: {}", path.display());
                TomlStore::open(path)
            }
            None => TomlStore::open_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_write_collects_words() {
        let args = CliArgs::try_parse_from(["lfm", "write", "hello", "world"]).unwrap();
        match args.command {
            Commands::Write { message } => assert_eq!(message, vec!["hello", "world"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_config_after_subcommand() {
        let args = CliArgs::try_parse_from(["lfm", "init", "--config", "/tmp/s.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/s.toml")));
        assert!(matches!(args.command, Commands::Init));
    }

    #[test]
    fn test_parse_config_set() {
        let args = CliArgs::try_parse_from([
            "lfm", "config", "set", "--activated", "true", "--file", "/tmp/a.log",
        ])
        .unwrap();
        match args.command {
            Commands::Config {
                action: ConfigAction::Set { activated, file },
            } => {
                assert_eq!(activated, Some(true));
                assert_eq!(file.as_deref(), Some("/tmp/a.log"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_write_requires_message() {
        assert!(CliArgs::try_parse_from(["lfm", "write"]).is_err());
    }
}
