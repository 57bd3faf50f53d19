//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `browse`: List/detail handlers
//! - `form`: Create-form handlers

pub(crate) mod browse;
pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod update;


use blogmonk_core::{BlogId, NewBlogPost};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Background work the event loop performs with the API client.
#[derive(Debug, Clone)]
pub enum Task {
    /// GET /blogs; the result must echo `seq` back in `BlogsLoaded`.
    FetchBlogs { seq: u64 },
    /// GET /blogs/{id}; the result must echo `seq` back in `BlogDetailLoaded`.
    FetchBlog { id: BlogId, seq: u64 },
    /// POST /blogs with the validated draft.
    CreateBlog { input: NewBlogPost },
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Spawn a background task
    SpawnTask(Task),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn task(task: Task) -> Self {
        Self::action(UpdateAction::SpawnTask(task))
    }
}
