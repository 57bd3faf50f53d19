//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: Main entry point with loaded settings
//! - `run_loop`: Main event loop processing terminal events and task results

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use blogmonk_api::BlogClient;
use blogmonk_app::config::Settings;
use blogmonk_app::handler::{update, UpdateResult};
use blogmonk_app::message::Message;
use blogmonk_app::state::AppState;
use blogmonk_core::prelude::*;

use crate::{actions, event, render, terminal};

/// Run the TUI application with the given settings
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // The URL is validated here so a bad --url fails before the terminal
    // enters raw mode
    let client = Arc::new(BlogClient::new(
        &settings.backend.base_url,
        Duration::from_secs(settings.backend.timeout_secs),
    )?);
    info!("using backend at {}", client.base_url());

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::with_settings(settings);

    // Unified message channel (task completions, etc.)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Kick off the initial collection fetch
    process_message(&mut state, Message::RefreshBlogs, &msg_tx, &client);

    // Run the main loop
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, client);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: Arc<BlogClient>,
) -> Result<()> {
    while !state.should_quit() {
        // Process task completion messages (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &client);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events (50ms timeout doubles as the tick)
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &client);
        }
    }

    Ok(())
}

/// Run a message through update(), spawning any resulting actions and
/// chasing follow-up messages until the chain settles.
fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<BlogClient>,
) {
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        let UpdateResult { message, action } = update(state, msg);
        if let Some(action) = action {
            actions::handle_action(action, msg_tx.clone(), client.clone());
        }
        next = message;
    }
}
