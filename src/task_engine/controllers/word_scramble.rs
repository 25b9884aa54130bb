use rand::Rng;

use crate::task_engine::{
    controller::{bind, AnswerInput, Binding, TaskLifecycle},
    models::{Task, TaskContent, TaskType, WordScrambleContent},
};

/// Trimmed, lower-cased form used for free-text comparison.
pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Scrambled-word reconstruction: the learner types the unscrambled word.
#[derive(Debug, Clone, Default)]
pub struct WordScrambleController {
    binding: Option<Binding<WordScrambleContent>>,
    answer: String,
}

impl WordScrambleController {
    pub fn content(&self) -> Option<&WordScrambleContent> {
        self.binding.as_ref().map(|b| &b.content)
    }

    /// The answer exactly as typed.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Replace the answer verbatim; trimming happens only when scoring.
    pub fn set_answer(&mut self, text: impl Into<String>) {
        self.answer = text.into();
    }
}

impl TaskLifecycle for WordScrambleController {
    fn kind(&self) -> TaskType {
        TaskType::WordScramble
    }

    fn initialize<R: Rng>(&mut self, task: Option<&Task>, _rng: &mut R) {
        *self = WordScrambleController::default();
        self.binding = bind(task, TaskType::WordScramble, |c| match c {
            TaskContent::WordScramble(w) => Some(w),
            _ => None,
        });
    }

    fn task_id(&self) -> Option<&str> {
        self.binding.as_ref().map(|b| b.task_id.as_str())
    }

    fn can_submit(&self) -> bool {
        self.binding.is_some() && !self.answer.trim().is_empty()
    }

    fn check_answer(&self) -> bool {
        match self.content() {
            Some(c) if self.can_submit() => normalize(&self.answer) == c.correct_word.to_lowercase(),
            _ => false,
        }
    }

    fn reset(&mut self) {
        self.answer.clear();
    }

    fn apply(&mut self, input: &AnswerInput) -> bool {
        match input {
            AnswerInput::SetText(text) => {
                self.set_answer(text.as_str());
                true
            }
            _ => false,
        }
    }
}
