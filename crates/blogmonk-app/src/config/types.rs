//! Settings type definitions

use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Base URL of the blog REST service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Presentation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Number of skeleton rows shown while the list loads
    #[serde(default = "default_skeleton_rows")]
    pub skeleton_rows: usize,

    /// How many ticks the success notice stays visible (ticks fire on the
    /// 50ms idle poll, so 60 is roughly three seconds)
    #[serde(default = "default_notice_ticks")]
    pub notice_ticks: u32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            skeleton_rows: default_skeleton_rows(),
            notice_ticks: default_notice_ticks(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_skeleton_rows() -> usize {
    3
}

fn default_notice_ticks() -> u32 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.backend.base_url, "http://localhost:3001");
        assert_eq!(settings.backend.timeout_secs, 10);
        assert_eq!(settings.ui.skeleton_rows, 3);
        assert_eq!(settings.ui.notice_ticks, 60);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [backend]
            base_url = "http://blog.internal:8080"
            "#,
        )
        .unwrap();
        assert_eq!(settings.backend.base_url, "http://blog.internal:8080");
        assert_eq!(settings.backend.timeout_secs, 10);
        assert_eq!(settings.ui.skeleton_rows, 3);
    }
}
