//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use blogmonk_api::BlogClient;
use blogmonk_app::handler::{Task, UpdateAction};
use blogmonk_app::message::Message;
use blogmonk_core::Error;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: Arc<BlogClient>) {
    match action {
        UpdateAction::SpawnTask(task) => {
            tokio::spawn(async move {
                execute_task(task, msg_tx, client).await;
            });
        }
    }
}

/// Execute a task and send the completion message back to the event loop.
///
/// Errors are stringified here: the update layer only ever sees display
/// text, never transport types.
pub async fn execute_task(task: Task, msg_tx: mpsc::Sender<Message>, client: Arc<BlogClient>) {
    match task {
        Task::FetchBlogs { seq } => {
            info!("fetching blog list (seq {})", seq);
            let result = client.list_blogs().await.map_err(|e| e.to_string());
            let _ = msg_tx.send(Message::BlogsLoaded { seq, result }).await;
        }

        Task::FetchBlog { id, seq } => {
            info!("fetching blog {} (seq {})", id, seq);
            let result = match client.get_blog(id).await {
                Ok(post) => Ok(Some(post)),
                Err(Error::NotFound) => Ok(None),
                Err(e) => Err(e.to_string()),
            };
            let _ = msg_tx
                .send(Message::BlogDetailLoaded { seq, id, result })
                .await;
        }

        Task::CreateBlog { input } => {
            info!("creating blog: {}", input.title);
            let result = client.create_blog(&input).await.map_err(|e| e.to_string());
            let _ = msg_tx.send(Message::BlogCreated { result }).await;
        }
    }
}
