//! Visual theme for the blogmonk TUI: palette constants and style builders.

pub mod palette;
pub mod styles;
