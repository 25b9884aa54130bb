use rand::Rng;

use crate::task_engine::{
    controller::{bind, AnswerInput, Binding, TaskLifecycle},
    models::{MultipleChoiceContent, Task, TaskContent, TaskType},
};

/// Single-answer multiple choice. Options keep their authored order.
#[derive(Debug, Clone, Default)]
pub struct MultipleChoiceController {
    binding: Option<Binding<MultipleChoiceContent>>,
    selected: Option<usize>,
}

impl MultipleChoiceController {
    pub fn content(&self) -> Option<&MultipleChoiceContent> {
        self.binding.as_ref().map(|b| &b.content)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select option `index`; indices past the last option are ignored.
    pub fn select_option(&mut self, index: usize) {
        let count = self.content().map_or(0, |c| c.options.len());
        if index < count {
            self.selected = Some(index);
        }
    }
}

impl TaskLifecycle for MultipleChoiceController {
    fn kind(&self) -> TaskType {
        TaskType::MultipleChoice
    }

    fn initialize<R: Rng>(&mut self, task: Option<&Task>, _rng: &mut R) {
        *self = MultipleChoiceController::default();
        self.binding = bind(task, TaskType::MultipleChoice, |c| match c {
            TaskContent::MultipleChoice(m) => Some(m),
            _ => None,
        });
    }

    fn task_id(&self) -> Option<&str> {
        self.binding.as_ref().map(|b| b.task_id.as_str())
    }

    fn can_submit(&self) -> bool {
        self.binding.is_some() && self.selected.is_some()
    }

    fn check_answer(&self) -> bool {
        match (self.content(), self.selected) {
            (Some(c), Some(i)) => i == c.correct_answer,
            _ => false,
        }
    }

    fn reset(&mut self) {
        self.selected = None;
    }

    fn apply(&mut self, input: &AnswerInput) -> bool {
        match *input {
            AnswerInput::SelectOption(i) => {
                self.select_option(i);
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

    fn mounted() -> MultipleChoiceController {
        let mut rng = StdRng::seed_from_u64(0);
        let mut c = MultipleChoiceController::default();
        let task = Task::new(
            "mc1",
            TaskType::MultipleChoice,
            MultipleChoiceContent {
                question: "Simple past of 'go'?".into(),
                options: vec!["goed".into(), "went".into(), "gone".into()],
                correct_answer: 1,
            },
        );
        c.initialize(Some(&task), &mut rng);
        c
    }

    #[test]
    fn needs_a_selection_before_submitting() {
        let mut c = mounted();
        assert!(!c.can_submit());
        c.select_option(0);
        assert!(c.can_submit());
        assert!(!c.check_answer());
        c.select_option(1);
        assert!(c.check_answer());
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut c = mounted();
        c.select_option(7);
        assert_eq!(c.selected(), None);
        assert!(!c.can_submit());
    }

    #[test]
    fn reset_clears_selection() {
        let mut c = mounted();
        c.select_option(1);
        c.reset();
        assert!(!c.can_submit());
    }
}
