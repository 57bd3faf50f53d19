//! # blogmonk-app - Application State and Orchestration
//!
//! The model/update half of the TUI (TEA pattern). Owns [`AppState`], the
//! [`Message`] vocabulary, and the pure [`update()`] dispatch that converts
//! messages into state changes plus [`UpdateAction`]s for the event loop to
//! execute. Holds no terminal or HTTP dependencies; the TUI crate renders
//! the state and runs the background tasks.
//!
//! ## Modules
//! - `state`: [`AppState`], [`UiMode`], the transient [`Notice`]
//! - `store`: [`BlogStore`], the explicit query cache with sequence-numbered
//!   begin/resolve/invalidate operations
//! - `draft`: [`BlogDraft`] create-form state and structured validation
//! - `message`: [`Message`] enum
//! - `handler`: `update()` plus key handling and per-area handlers
//! - `input_key`: [`InputKey`], terminal-library-independent key events
//! - `config`: TOML settings loading

pub mod config;
pub mod draft;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;
pub mod store;

pub use config::{load_settings, Settings};
pub use draft::{BlogDraft, FormField, ValidationError};
pub use handler::{update, Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Notice, UiMode};
pub use store::{BlogStore, QueryState};
