//! Learning-path documents → [`Task`] values.
//!
//! A document looks like `{ "id": ..., "title": ..., "tasks": [ ... ] }`.
//! Each task's `content` is decoded against its `type` tag; a task whose
//! content does not fit its tag fails the whole document with
//! [`EngineError::MalformedContent`].

use serde::Deserialize;

use crate::task_engine::{
    error::EngineError,
    models::{LearningPath, RawTask, Task},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLearningPath {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    tasks: Vec<RawTask>,
}

impl TryFrom<RawLearningPath> for LearningPath {
    type Error = EngineError;

    fn try_from(raw: RawLearningPath) -> Result<Self, Self::Error> {
        let tasks = raw
            .tasks
            .into_iter()
            .map(|t| {
                let task = Task::try_from(t)?;
                if task.learning_path_id.is_empty() {
                    return Ok(task.with_learning_path(raw.id.as_str()));
                }
                Ok(task)
            })
            .collect::<Result<Vec<_>, EngineError>>()?;
        Ok(LearningPath { id: raw.id, title: raw.title, tasks })
    }
}

/// Parse a full learning-path document.
pub fn parse_learning_path(json: &str) -> Result<LearningPath, EngineError> {
    let raw: RawLearningPath = serde_json::from_str(json)?;
    let path = LearningPath::try_from(raw)?;
    tracing::debug!(path_id = %path.id, tasks = path.tasks.len(), "learning path loaded");
    Ok(path)
}

/// Parse a single task object.
pub fn parse_task(json: &str) -> Result<Task, EngineError> {
    let raw: RawTask = serde_json::from_str(json)?;
    Task::try_from(raw)
}
