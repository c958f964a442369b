//! Persistent store for the task collection and theme preference.
//!
//! # Responsibility
//! - Serialize the full task collection to one key and back.
//! - Keep the theme preference under an independent key.
//! - Contain every storage and codec failure at this boundary.
//!
//! # Invariants
//! - No public operation returns an error or panics; failures are logged and
//!   degraded to `false`, an empty collection, or the default theme.
//! - Writes always replace the whole collection.
//! - Nothing is cached between calls.

use crate::model::task::Task;
use crate::model::theme::Theme;
use crate::storage::KeyValueStorage;
use log::{debug, error, info, warn};

/// Storage key holding the JSON task array.
pub const TASKS_KEY: &str = "taskflow-tasks";
/// Storage key holding the `light`/`dark` literal.
pub const THEME_KEY: &str = "taskflow-theme";

/// Persistent store over a key-value medium.
pub struct TaskStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> TaskStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Underlying storage medium.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the stored collection in stored order.
    ///
    /// Returns an empty collection when the key is absent, unreadable, or
    /// does not decode as a task array.
    pub fn load_tasks(&self) -> Vec<Task> {
        let raw = match self.storage.get_item(TASKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=tasks_load module=store status=ok source=absent count=0");
                return Vec::new();
            }
            Err(err) => {
                error!(
                    "event=tasks_load module=store status=error error_code=storage_read_failed error={err}"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => {
                info!(
                    "event=tasks_load module=store status=ok source=storage count={}",
                    tasks.len()
                );
                tasks
            }
            Err(err) => {
                error!(
                    "event=tasks_load module=store status=error error_code=decode_failed bytes={} error={err}",
                    raw.len()
                );
                Vec::new()
            }
        }
    }

    /// Writes the full collection. Returns whether the write landed.
    pub fn save_tasks(&self, tasks: &[Task]) -> bool {
        let encoded = match serde_json::to_string(tasks) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!(
                    "event=tasks_save module=store status=error error_code=encode_failed error={err}"
                );
                return false;
            }
        };

        match self.storage.set_item(TASKS_KEY, &encoded) {
            Ok(()) => {
                debug!(
                    "event=tasks_save module=store status=ok count={} bytes={}",
                    tasks.len(),
                    encoded.len()
                );
                true
            }
            Err(err) => {
                error!(
                    "event=tasks_save module=store status=error error_code=storage_write_failed count={} error={err}",
                    tasks.len()
                );
                false
            }
        }
    }

    /// Removes the stored collection entirely.
    pub fn clear_tasks(&self) -> bool {
        match self.storage.remove_item(TASKS_KEY) {
            Ok(()) => {
                info!("event=tasks_clear module=store status=ok");
                true
            }
            Err(err) => {
                error!(
                    "event=tasks_clear module=store status=error error_code=storage_remove_failed error={err}"
                );
                false
            }
        }
    }

    /// Stored theme, `Theme::Light` when absent or unrecognized.
    pub fn theme(&self) -> Theme {
        match self.storage.get_item(THEME_KEY) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|err| {
                warn!("event=theme_load module=store status=fallback error={err}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                error!(
                    "event=theme_load module=store status=error error_code=storage_read_failed error={err}"
                );
                Theme::default()
            }
        }
    }

    pub fn set_theme(&self, theme: Theme) -> bool {
        match self.storage.set_item(THEME_KEY, theme.as_str()) {
            Ok(()) => {
                debug!("event=theme_save module=store status=ok theme={theme}");
                true
            }
            Err(err) => {
                error!(
                    "event=theme_save module=store status=error error_code=storage_write_failed theme={theme} error={err}"
                );
                false
            }
        }
    }
}
