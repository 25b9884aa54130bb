//! Error types for the loading boundary.
//!
//! Controllers never fail: an absent or mismatched task makes their queries
//! return `false`. Errors only surface when turning learning-path documents
//! into [`Task`](crate::task_engine::models::Task) values.

use thiserror::Error;

use crate::task_engine::models::TaskType;

/// Errors raised while decoding learning-path content.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The document is not valid JSON or does not have the expected shape.
    #[error("invalid learning-path document: {0}")]
    Json(#[from] serde_json::Error),

    /// A task's content does not parse as the payload its type tag requires.
    #[error("task '{task_id}': content does not match type '{task_type}': {reason}")]
    MalformedContent {
        task_id: String,
        task_type: TaskType,
        reason: String,
    },
}

impl EngineError {
    /// Id of the offending task, when the error is tied to one.
    pub fn task_id(&self) -> Option<&str> {
        match self {
            EngineError::MalformedContent { task_id, .. } => Some(task_id),
            EngineError::Json(_) => None,
        }
    }
}
