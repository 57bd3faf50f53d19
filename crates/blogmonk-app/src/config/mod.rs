//! Configuration loading for blogmonk
//!
//! Settings live in `~/.config/blogmonk/config.toml`. Missing or malformed
//! files fall back to defaults; a CLI `--url` flag overrides the file.

mod settings;
mod types;

pub use settings::{default_config_path, load_settings, load_settings_from};
pub use types::{BackendSettings, Settings, UiSettings};
