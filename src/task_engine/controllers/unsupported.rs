use rand::Rng;

use crate::task_engine::{
    controller::{AnswerInput, TaskLifecycle},
    models::{Task, TaskType},
};

/// Stand-in for task types that have content but no correctness rules yet
/// (multiple-select, cloze deletion, true/false, error detection, flashcard,
/// drag-and-drop).
///
/// It tracks which task is mounted so the view can report it, but never
/// accepts input and never reports an answer as submittable or correct.
#[derive(Debug, Clone)]
pub struct UnsupportedController {
    kind: TaskType,
    task_id: Option<String>,
}

impl UnsupportedController {
    pub fn new(kind: TaskType) -> Self {
        UnsupportedController { kind, task_id: None }
    }
}

impl TaskLifecycle for UnsupportedController {
    fn kind(&self) -> TaskType {
        self.kind
    }

    fn initialize<R: Rng>(&mut self, task: Option<&Task>, _rng: &mut R) {
        self.task_id = task.filter(|t| t.task_type == self.kind).map(|t| t.id.clone());
        if let Some(id) = &self.task_id {
            tracing::debug!(task_id = %id, kind = %self.kind, "no evaluator for task type");
        }
    }

    fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    fn can_submit(&self) -> bool {
        false
    }

    fn check_answer(&self) -> bool {
        false
    }

    fn reset(&mut self) {}

    fn apply(&mut self, _input: &AnswerInput) -> bool {
        false
    }
}
