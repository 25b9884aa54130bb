use rand::Rng;

use crate::task_engine::{
    controller::{bind, AnswerInput, Binding, TaskLifecycle},
    models::{OrderingContent, Task, TaskContent, TaskType},
    shuffle::shuffled,
};

/// Sequence ordering: the learner rearranges a shuffled list into the
/// canonical order of `OrderingContent::items` by adjacent swaps.
///
/// The initial shuffle may coincide with the canonical order.
#[derive(Debug, Clone, Default)]
pub struct OrderingController {
    binding: Option<Binding<OrderingContent>>,
    initial_order: Vec<String>,
    ordered_items: Vec<String>,
}

impl OrderingController {
    pub fn content(&self) -> Option<&OrderingContent> {
        self.binding.as_ref().map(|b| &b.content)
    }

    /// Current arrangement, top to bottom.
    pub fn ordered_items(&self) -> &[String] {
        &self.ordered_items
    }

    /// Swap position `index` with the one above it. No-op at the top.
    pub fn move_item_up(&mut self, index: usize) {
        if index == 0 || index >= self.ordered_items.len() {
            return;
        }
        self.ordered_items.swap(index - 1, index);
    }

    /// Swap position `index` with the one below it. No-op at the bottom.
    pub fn move_item_down(&mut self, index: usize) {
        if index >= self.ordered_items.len().saturating_sub(1) {
            return;
        }
        self.ordered_items.swap(index, index + 1);
    }

    /// Whether position `index` already holds its canonical item.
    pub fn position_is_correct(&self, index: usize) -> bool {
        match (self.content(), self.ordered_items.get(index)) {
            (Some(c), Some(item)) => c.items.get(index) == Some(item),
            _ => false,
        }
    }

    /// Canonical index of the item at `index`, found by value.
    pub fn canonical_index(&self, index: usize) -> Option<usize> {
        let item = self.ordered_items.get(index)?;
        self.content()?.items.iter().position(|c| c == item)
    }

    /// 1-based target position for a misplaced item; `None` when the item
    /// at `index` is already where it belongs.
    pub fn target_hint(&self, index: usize) -> Option<usize> {
        if self.position_is_correct(index) {
            return None;
        }
        self.canonical_index(index).map(|i| i + 1)
    }
}

impl TaskLifecycle for OrderingController {
    fn kind(&self) -> TaskType {
        TaskType::Ordering
    }

    fn initialize<R: Rng>(&mut self, task: Option<&Task>, rng: &mut R) {
        *self = OrderingController::default();
        self.binding = bind(task, TaskType::Ordering, |c| match c {
            TaskContent::Ordering(o) => Some(o),
            _ => None,
        });
        let order = self
            .content()
            .map(|c| shuffled(&c.items, rng))
            .unwrap_or_default();
        self.initial_order = order.clone();
        self.ordered_items = order;
    }

    fn task_id(&self) -> Option<&str> {
        self.binding.as_ref().map(|b| b.task_id.as_str())
    }

    fn can_submit(&self) -> bool {
        self.binding.is_some()
    }

    fn check_answer(&self) -> bool {
        self.content().is_some_and(|c| c.items == self.ordered_items)
    }

    fn reset(&mut self) {
        self.ordered_items = self.initial_order.clone();
    }

    fn apply(&mut self, input: &AnswerInput) -> bool {
        match *input {
            AnswerInput::MoveUp(i) => {
                self.move_item_up(i);
                true
            }
            AnswerInput::MoveDown(i) => {
                self.move_item_down(i);
                true
            }
            _ => false,
        }
    }
}
