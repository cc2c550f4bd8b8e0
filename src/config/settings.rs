use crate::config::store::ConfigStore;

/// Store key of the activation flag
pub const ACTIVATED_KEY: &str = "/Log/Activated";
/// Store key of the log file path
pub const FILE_KEY: &str = "/Log/File";

/// The two persisted values that drive the log file manager.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub activated: bool,
    /// Destination path; empty means no file is configured
    pub file: String,
}

impl LogSettings {
    pub fn new<S: Into<String>>(activated: bool, file: S) -> Self {
        Self {
            activated,
            file: file.into(),
        }
    }

    /// Read both values, defaulting to `false` and `""`
    pub fn load(store: &dyn ConfigStore) -> Self {
        Self {
            activated: store.read_bool(ACTIVATED_KEY, false),
            file: store.read_string(FILE_KEY, ""),
        }
    }

    pub fn save(&self, store: &mut dyn ConfigStore) {
        store.write_bool(ACTIVATED_KEY, self.activated);
        store.write_string(FILE_KEY, &self.file);
    }

    /// Update a specific setting and write it to the store
    pub fn update_setting<F>(&mut self, store: &mut dyn ConfigStore, updater: F)
    where
        F: FnOnce(&mut Self),
    {
        updater(self);
        self.save(store)
    }

    /// Logging happens only when activated with a non-empty path
    pub fn is_enabled(&self) -> bool {
        self.activated && !self.file.is_empty()
    }
}
