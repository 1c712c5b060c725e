//! Settings persistence coordination.
//!
//! Settings are stored as JSON strings in eframe's persistent storage, so
//! any serde type can be saved and restored.

use serde::{Deserialize, Serialize};

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Saves a setting to persistent storage.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    ///
    /// # Examples
    /// ```ignore
    /// SettingsCoordinator::save_setting(storage, "tooltip_config", controller.config());
    /// ```
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }

    /// Loads a setting from persistent storage with a custom default.
    ///
    /// Missing keys and unreadable JSON both fall back to `default`; a
    /// settings file from an incompatible build must never block startup.
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise the provided default
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        default
    }
}
