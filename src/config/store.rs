use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::config::{get_config_dir, SETTINGS_FILE_NAME};
use crate::errors::{AppError, AppResult};

/// Persisted key/value settings addressed by slash-separated group paths
/// such as `Log/Activated`.
///
/// Implementors only provide raw access; the typed readers fall back to the
/// caller's default when a key is missing or holds a value of another type.
pub trait ConfigStore {
    fn value(&self, key: &str) -> Option<Value>;

    fn set_value(&mut self, key: &str, value: Value);

    fn read_bool(&self, key: &str, default: bool) -> bool {
        match self.value(key) {
            Some(Value::Boolean(b)) => b,
            _ => default,
        }
    }

    fn read_string(&self, key: &str, default: &str) -> String {
        match self.value(key) {
            Some(Value::String(s)) => s,
            _ => default.to_string(),
        }
    }

    fn write_bool(&mut self, key: &str, value: bool) {
        self.set_value(key, Value::Boolean(value));
    }

    fn write_string(&mut self, key: &str, value: &str) {
        self.set_value(key, Value::String(value.to_string()));
    }
}

/// Split a key into its group segments. `/Log/File` and `Log/File` are the
/// same key; empty segments are ignored.
pub fn key_segments(key: &str) -> Vec<&str> {
    key.split('/').filter(|s| !s.is_empty()).collect()
}

/// Settings kept in a TOML document on disk. Groups become tables:
///
/// ```toml
/// [Log]
/// Activated = true
/// File = "/home/user/app.log"
/// ```
#[derive(Debug, Clone)]
pub struct TomlStore {
    path: PathBuf,
    table: Table,
}

impl TomlStore {
    /// Load the document at `path`. A missing file gives an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            debug!("No settings file at {}, starting empty", path.display());
            return Ok(Self {
                path,
                table: Table::new(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::config(format!(
                "Failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let table: Table = toml::from_str(&content).map_err(|e| {
            AppError::config(format!(
                "Failed to parse TOML settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self { path, table })
    }

    /// Load `~/.config/lfm/settings.toml`
    pub fn open_default() -> AppResult<Self> {
        Self::open(default_settings_path()?)
    }

    /// Write the document back to its path, creating parent directories.
    pub fn save(&self) -> AppResult<()> {
        let toml_content = toml::to_string_pretty(&self.table)
            .map_err(|e| AppError::config(format!("Failed to serialize settings to TOML: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, toml_content).map_err(|e| {
            AppError::config(format!(
                "Failed to write settings to file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for TomlStore {
    fn value(&self, key: &str) -> Option<Value> {
        let segments = key_segments(key);
        let (last, groups) = segments.split_last()?;

        let mut table = &self.table;
        for group in groups {
            table = table.get(*group)?.as_table()?;
        }
        table.get(*last).cloned()
    }

    fn set_value(&mut self, key: &str, value: Value) {
        let segments = key_segments(key);
        let Some((last, groups)) = segments.split_last() else {
            return;
        };

        let mut table = &mut self.table;
        for group in groups {
            let entry = table
                .entry(group.to_string())
                .or_insert(Value::Table(Table::new()));
            if !entry.is_table() {
                *entry = Value::Table(Table::new());
            }
            table = match entry {
                Value::Table(t) => t,
                _ => unreachable!("entry was just made a table"),
            };
        }
        table.insert(last.to_string(), value);
    }
}

/// Settings held in memory only, for hosts that own their configuration.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(key: &str) -> String {
        key_segments(key).join("/")
    }
}

impl ConfigStore for MemoryStore {
    fn value(&self, key: &str) -> Option<Value> {
        self.values.get(&Self::normalize(key)).cloned()
    }

    fn set_value(&mut self, key: &str, value: Value) {
        self.values.insert(Self::normalize(key), value);
    }
}

/// Path of the default settings document (`~/.config/lfm/settings.toml`)
pub fn default_settings_path() -> AppResult<PathBuf> {
    Ok(get_config_dir()?.join(SETTINGS_FILE_NAME))
}
