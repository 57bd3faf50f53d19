//! Settings parser for ~/.config/blogmonk/config.toml

use std::path::{Path, PathBuf};

use blogmonk_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "blogmonk";

/// The default config file location (`~/.config/blogmonk/config.toml`).
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from the default location.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings() -> Settings {
    load_settings_from(&default_config_path())
}

/// Load settings from an explicit path.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_settings_missing_file_gives_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&temp.path().join("config.toml"));
        assert_eq!(settings.backend.base_url, "http://localhost:3001");
    }

    #[test]
    fn test_load_settings_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [backend]
            base_url = "http://127.0.0.1:4000"
            timeout_secs = 5

            [ui]
            skeleton_rows = 5
            "#,
        )
        .unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings.backend.base_url, "http://127.0.0.1:4000");
        assert_eq!(settings.backend.timeout_secs, 5);
        assert_eq!(settings.ui.skeleton_rows, 5);
        // unspecified values keep their defaults
        assert_eq!(settings.ui.notice_ticks, 60);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "this is not toml [[").unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings.backend.base_url, "http://localhost:3001");
    }
}
