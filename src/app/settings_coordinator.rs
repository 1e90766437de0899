//! Settings persistence coordination.
//!
//! Stores the editor mode, each panel's viewport and the drawing position
//! in eframe's persistent storage as JSON strings, so a restarted editor
//! opens where the user left it.

use rpixed::PanelMode;
use serde::{Deserialize, Serialize};

const PANEL_SETTINGS_KEY: &str = "panel_settings";

/// Everything the editor restores on startup.
///
/// Restored values are untrusted: panels re-align and clamp them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Editor shown at startup
    pub mode: PanelMode,
    /// Image panel viewport `(x, y)`
    pub image_viewport: (i32, i32),
    /// Tilemap panel viewport `(x, y)`
    pub tilemap_viewport: (i32, i32),
    /// Image editor drawing position `(x, y)`
    pub drawing_pos: (i32, i32),
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            mode: PanelMode::Image,
            image_viewport: (0, 0),
            tilemap_viewport: (0, 0),
            drawing_pos: (0, 0),
        }
    }
}

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads panel settings, falling back to defaults when absent or unreadable.
    pub fn load_panel_settings(storage: Option<&dyn eframe::Storage>) -> PanelSettings {
        Self::load_setting_or(storage, PANEL_SETTINGS_KEY, PanelSettings::default())
    }

    /// Saves panel settings.
    pub fn save_panel_settings(storage: &mut dyn eframe::Storage, settings: &PanelSettings) {
        Self::save_setting(storage, PANEL_SETTINGS_KEY, settings);
    }

    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Type Parameters
    /// * `T` - The type to deserialize, must implement Deserialize
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - The value to use if the key is missing or malformed
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        let Some(json_str) = storage.and_then(|s| s.get_string(key)) else {
            return default;
        };
        match serde_json::from_str(&json_str) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "ignoring unreadable setting");
                default
            }
        }
    }

    /// Saves a setting to persistent storage.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => tracing::warn!(key, %err, "failed to serialize setting"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_missing_settings_use_defaults() {
        let storage = MockStorage::new();
        let settings = SettingsCoordinator::load_panel_settings(Some(&storage));
        assert_eq!(settings, PanelSettings::default());
        assert_eq!(SettingsCoordinator::load_panel_settings(None), PanelSettings::default());
    }

    #[test]
    fn test_save_and_load_panel_settings() {
        let mut storage = MockStorage::new();
        let settings = PanelSettings {
            mode: PanelMode::Tilemap,
            image_viewport: (64, 128),
            tilemap_viewport: (192, 8),
            drawing_pos: (16, 32),
        };

        SettingsCoordinator::save_panel_settings(&mut storage, &settings);
        let loaded = SettingsCoordinator::load_panel_settings(Some(&storage));
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_malformed_settings_fall_back() {
        let mut storage = MockStorage::new();
        eframe::Storage::set_string(&mut storage, PANEL_SETTINGS_KEY, "{not json".to_string());
        let loaded = SettingsCoordinator::load_panel_settings(Some(&storage));
        assert_eq!(loaded, PanelSettings::default());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let mut storage = MockStorage::new();
        eframe::Storage::set_string(&mut storage, PANEL_SETTINGS_KEY, r#"{"mode":"Tilemap"}"#.to_string());
        let loaded = SettingsCoordinator::load_panel_settings(Some(&storage));
        assert_eq!(loaded.mode, PanelMode::Tilemap);
        assert_eq!(loaded.image_viewport, (0, 0));
    }
}
