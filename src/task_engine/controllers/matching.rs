use std::collections::BTreeMap;

use rand::Rng;

use crate::task_engine::{
    controller::{bind, AnswerInput, Binding, TaskLifecycle},
    models::{MatchingContent, Task, TaskContent, TaskType},
    shuffle::shuffled_indices,
};

/// Pair matching: each left item is associated with one right item.
///
/// Right items are shown in `shuffled_right_column` order, fixed for the
/// lifetime of the mounted task. All indices handled here are canonical:
/// left `i` is correctly matched when its association is right `i`.
#[derive(Debug, Clone, Default)]
pub struct MatchingController {
    binding: Option<Binding<MatchingContent>>,
    shuffled_right_column: Vec<usize>,
    matching_answers: BTreeMap<usize, usize>,
}

impl MatchingController {
    pub fn content(&self) -> Option<&MatchingContent> {
        self.binding.as_ref().map(|b| &b.content)
    }

    fn pair_count(&self) -> usize {
        self.content().map_or(0, |c| c.pairs.len())
    }

    /// Presentation order of the right column (canonical right indices).
    pub fn shuffled_right_column(&self) -> &[usize] {
        &self.shuffled_right_column
    }

    /// Right index the learner picked for `left`, if any.
    pub fn selection(&self, left: usize) -> Option<usize> {
        self.matching_answers.get(&left).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.matching_answers.len()
    }

    /// Record or overwrite the association for `left`.
    ///
    /// `right` is trusted; a `left` outside the task's pairs is dropped.
    pub fn set_match(&mut self, left: usize, right: usize) {
        if left >= self.pair_count() {
            tracing::debug!(left, "ignoring match for unknown left item");
            return;
        }
        self.matching_answers.insert(left, right);
    }

    /// Per-pair verdict: `true` once left `i` is associated with right `i`.
    pub fn pair_is_correct(&self, left: usize) -> bool {
        self.selection(left) == Some(left)
    }
}

impl TaskLifecycle for MatchingController {
    fn kind(&self) -> TaskType {
        TaskType::Matching
    }

    fn initialize<R: Rng>(&mut self, task: Option<&Task>, rng: &mut R) {
        *self = MatchingController::default();
        self.binding = bind(task, TaskType::Matching, |c| match c {
            TaskContent::Matching(m) => Some(m),
            _ => None,
        });
        self.shuffled_right_column = shuffled_indices(self.pair_count(), rng);
    }

    fn task_id(&self) -> Option<&str> {
        self.binding.as_ref().map(|b| b.task_id.as_str())
    }

    fn can_submit(&self) -> bool {
        self.binding.is_some() && self.matching_answers.len() == self.pair_count()
    }

    fn check_answer(&self) -> bool {
        self.binding.is_some() && (0..self.pair_count()).all(|i| self.pair_is_correct(i))
    }

    fn reset(&mut self) {
        self.matching_answers.clear();
    }

    fn apply(&mut self, input: &AnswerInput) -> bool {
        match *input {
            AnswerInput::SetMatch { left, right } => {
                self.set_match(left, right);
                true
            }
            _ => false,
        }
    }
}
