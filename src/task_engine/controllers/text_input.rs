use rand::Rng;

use crate::task_engine::{
    controller::{bind, AnswerInput, Binding, TaskLifecycle},
    controllers::word_scramble::normalize,
    models::{Task, TaskContent, TaskType, TextInputContent},
};

/// Free-text answer with optional accepted alternatives.
#[derive(Debug, Clone, Default)]
pub struct TextInputController {
    binding: Option<Binding<TextInputContent>>,
    answer: String,
}

impl TextInputController {
    pub fn content(&self) -> Option<&TextInputContent> {
        self.binding.as_ref().map(|b| &b.content)
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn set_answer(&mut self, text: impl Into<String>) {
        self.answer = text.into();
    }
}

impl TaskLifecycle for TextInputController {
    fn kind(&self) -> TaskType {
        TaskType::TextInput
    }

    fn initialize<R: Rng>(&mut self, task: Option<&Task>, _rng: &mut R) {
        *self = TextInputController::default();
        self.binding = bind(task, TaskType::TextInput, |c| match c {
            TaskContent::TextInput(t) => Some(t),
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
        let Some(c) = self.content() else {
            return false;
        };
        if !self.can_submit() {
            return false;
        }
        let given = normalize(&self.answer);
        std::iter::once(&c.correct_answer)
            .chain(c.alternatives.iter())
            .any(|accepted| normalize(accepted) == given)
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

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mounted() -> TextInputController {
        let mut rng = StdRng::seed_from_u64(0);
        let mut c = TextInputController::default();
        let task = Task::new(
            "ti1",
            TaskType::TextInput,
            TextInputContent {
                question: "Past participle of 'go'?".into(),
                correct_answer: "gone".into(),
                alternatives: vec!["have gone".into()],
            },
        );
        c.initialize(Some(&task), &mut rng);
        c
    }

    #[test]
    fn accepts_answer_and_alternatives_case_insensitively() {
        let mut c = mounted();
        c.set_answer(" Gone ");
        assert!(c.check_answer());
        c.set_answer("HAVE GONE");
        assert!(c.check_answer());
        c.set_answer("went");
        assert!(!c.check_answer());
    }

    #[test]
    fn blank_answer_is_neither_submittable_nor_correct() {
        let mut c = mounted();
        c.set_answer("\t ");
        assert!(!c.can_submit());
        assert!(!c.check_answer());
    }
}
