pub mod settings;
pub mod store;

pub use settings::{LogSettings, ACTIVATED_KEY, FILE_KEY};
pub use store::{default_settings_path, ConfigStore, MemoryStore, TomlStore};

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the settings document inside the config directory
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Create ~/.config/lfm/ if it doesn't exist
pub fn ensure_config_directories() -> AppResult<()> {
    ensure_config_directories_in(&get_config_dir()?)
}

pub fn ensure_config_directories_in(config_dir: &Path) -> AppResult<()> {
    if !config_dir.exists() {
        fs::create_dir_all(config_dir).map_err(|e| AppError::Configuration {
            message: format!(
                "Failed to create config directory '{}': {}",
                config_dir.display(),
                e
            ),
        })?;
    }

    Ok(())
}

/// Get the configuration directory path (~/.config/lfm/)
pub fn get_config_dir() -> AppResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| AppError::Configuration {
        message: "Could not determine home directory".to_string(),
    })?;

    Ok(home_dir.join(".config").join("lfm"))
}

/// Create the default settings file if it doesn't exist
pub fn create_default_if_missing() -> AppResult<()> {
    create_default_if_missing_in(&get_config_dir()?)?;
    Ok(())
}

/// Same as [`create_default_if_missing`] for an explicit config directory.
/// Returns the settings file path.
pub fn create_default_if_missing_in(config_dir: &Path) -> AppResult<PathBuf> {
    ensure_config_directories_in(config_dir)?;

    let settings_path = config_dir.join(SETTINGS_FILE_NAME);
    if !settings_path.exists() {
        let mut store = TomlStore::open(&settings_path)?;
        LogSettings::default().save(&mut store);
        store.save()?;

        println!("Created default settings file at: {}", settings_path.display());
    }

    Ok(settings_path)
}

/// Reset configuration by removing all config files and regenerating defaults
pub fn reset_configuration() -> AppResult<()> {
    reset_configuration_in(&get_config_dir()?)
}

pub fn reset_configuration_in(config_dir: &Path) -> AppResult<()> {
    if config_dir.exists() {
        fs::remove_dir_all(config_dir).map_err(|e| AppError::Configuration {
            message: format!(
                "Failed to remove config directory '{}': {}",
                config_dir.display(),
                e
            ),
        })?;
    }

    create_default_if_missing_in(config_dir)?;
    Ok(())
}
