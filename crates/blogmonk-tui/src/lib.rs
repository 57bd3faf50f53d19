//! blogmonk-tui - Terminal UI for blogmonk
//!
//! This crate provides the ratatui-based terminal interface. It renders the
//! state owned by blogmonk-app, polls terminal events, and executes the
//! background fetch/submit tasks against blogmonk-api.

pub mod actions;
pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
