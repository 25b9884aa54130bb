//! The lifecycle contract every answer controller follows, and the closed
//! sum type the orchestrator drives without knowing the task type.
//!
//! A controller owns the transient answer state for exactly one mounted task:
//!
//! 1. `initialize(task)` discards any previous state, then builds fresh state
//!    (shuffles included) for the new task.
//! 2. User input arrives as [`AnswerInput`] commands and mutates the state.
//! 3. `can_submit()` / `check_answer()` are pure queries, safe to call on
//!    every render.
//! 4. `reset()` returns the answer to its freshly-initialised form for the
//!    same task; presentation order is kept.
//!
//! An absent task, or a task whose type or payload does not belong to the
//! controller, leaves it unbound: both queries answer `false` and inputs are
//! ignored.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::task_engine::{
    controllers::{
        MatchingController, MultipleChoiceController, OrderingController, SliderController,
        TextInputController, UnsupportedController, WordScrambleController,
    },
    models::{Task, TaskContent, TaskType},
};

/// One discrete user action, forwarded from a view to its controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnswerInput {
    /// Matching: associate left item `left` with right item `right`
    /// (both canonical indices).
    SetMatch { left: usize, right: usize },
    /// Ordering: swap position `i` with `i - 1`.
    MoveUp(usize),
    /// Ordering: swap position `i` with `i + 1`.
    MoveDown(usize),
    /// Word scramble / text input: replace the typed answer verbatim.
    SetText(String),
    /// Slider: replace the chosen value verbatim.
    SetValue(f64),
    /// Multiple choice: select option `i`.
    SelectOption(usize),
}

/// Uniform lifecycle shared by every per-type controller.
pub trait TaskLifecycle {
    /// Task type this controller evaluates.
    fn kind(&self) -> TaskType;

    /// Drop all state, then bind to `task` (if it belongs to this controller).
    fn initialize<R: Rng>(&mut self, task: Option<&Task>, rng: &mut R);

    /// Id of the bound task, `None` while unbound.
    fn task_id(&self) -> Option<&str>;

    /// Is the current answer complete enough to be scored?
    fn can_submit(&self) -> bool;

    /// Is the current answer correct? Deterministic in the current state.
    fn check_answer(&self) -> bool;

    /// Restore the freshly-initialised answer for the bound task.
    fn reset(&mut self);

    /// Apply `input` if it is meaningful for this controller.
    /// Returns `false` when the input was not applicable.
    fn apply(&mut self, input: &AnswerInput) -> bool;
}

/// The task a controller is bound to: its identity plus the typed payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding<C> {
    pub task_id: String,
    pub content: C,
}

/// Resolve `task` into a binding for a controller of type `kind`.
///
/// Returns `None` (and logs) when the task is absent or does not fit.
pub(crate) fn bind<C: Clone>(
    task: Option<&Task>,
    kind: TaskType,
    extract: impl FnOnce(&TaskContent) -> Option<&C>,
) -> Option<Binding<C>> {
    let task = task?;
    if task.task_type != kind {
        tracing::warn!(task_id = %task.id, expected = %kind, actual = %task.task_type, "task type does not match controller");
        return None;
    }
    match extract(&task.content) {
        Some(content) => {
            tracing::debug!(task_id = %task.id, kind = %kind, "controller bound");
            Some(Binding { task_id: task.id.clone(), content: content.clone() })
        }
        None => {
            tracing::warn!(task_id = %task.id, kind = %kind, "task content does not match its type tag");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Closed dispatch
// ---------------------------------------------------------------------------

/// One controller per task type. Adding a type means adding a variant here,
/// and the compiler then points at every match that must handle it.
#[derive(Debug, Clone)]
pub enum AnswerController {
    Matching(MatchingController),
    Ordering(OrderingController),
    WordScramble(WordScrambleController),
    Slider(SliderController),
    MultipleChoice(MultipleChoiceController),
    TextInput(TextInputController),
    /// Types that are recognised but have no correctness rules yet.
    Unsupported(UnsupportedController),
}

impl AnswerController {
    /// Empty (unbound) controller for `task_type`.
    pub fn for_type(task_type: TaskType) -> Self {
        match task_type {
            TaskType::Matching       => AnswerController::Matching(MatchingController::default()),
            TaskType::Ordering       => AnswerController::Ordering(OrderingController::default()),
            TaskType::WordScramble   => AnswerController::WordScramble(WordScrambleController::default()),
            TaskType::Slider         => AnswerController::Slider(SliderController::default()),
            TaskType::MultipleChoice => AnswerController::MultipleChoice(MultipleChoiceController::default()),
            TaskType::TextInput      => AnswerController::TextInput(TextInputController::default()),
            TaskType::MultipleSelect
            | TaskType::ClozeDeletion
            | TaskType::TrueFalse
            | TaskType::ErrorDetection
            | TaskType::Flashcard
            | TaskType::DragAndDrop  => AnswerController::Unsupported(UnsupportedController::new(task_type)),
        }
    }

    /// Select the controller for `task.task_type` and initialise it.
    pub fn mount<R: Rng>(task: &Task, rng: &mut R) -> Self {
        let mut controller = Self::for_type(task.task_type);
        controller.initialize(Some(task), rng);
        controller
    }
}

impl TaskLifecycle for AnswerController {
    fn kind(&self) -> TaskType {
        match self {
            AnswerController::Matching(c)       => c.kind(),
            AnswerController::Ordering(c)       => c.kind(),
            AnswerController::WordScramble(c)   => c.kind(),
            AnswerController::Slider(c)         => c.kind(),
            AnswerController::MultipleChoice(c) => c.kind(),
            AnswerController::TextInput(c)      => c.kind(),
            AnswerController::Unsupported(c)    => c.kind(),
        }
    }

    fn initialize<R: Rng>(&mut self, task: Option<&Task>, rng: &mut R) {
        match self {
            AnswerController::Matching(c)       => c.initialize(task, rng),
            AnswerController::Ordering(c)       => c.initialize(task, rng),
            AnswerController::WordScramble(c)   => c.initialize(task, rng),
            AnswerController::Slider(c)         => c.initialize(task, rng),
            AnswerController::MultipleChoice(c) => c.initialize(task, rng),
            AnswerController::TextInput(c)      => c.initialize(task, rng),
            AnswerController::Unsupported(c)    => c.initialize(task, rng),
        }
    }

    fn task_id(&self) -> Option<&str> {
        match self {
            AnswerController::Matching(c)       => c.task_id(),
            AnswerController::Ordering(c)       => c.task_id(),
            AnswerController::WordScramble(c)   => c.task_id(),
            AnswerController::Slider(c)         => c.task_id(),
            AnswerController::MultipleChoice(c) => c.task_id(),
            AnswerController::TextInput(c)      => c.task_id(),
            AnswerController::Unsupported(c)    => c.task_id(),
        }
    }

    fn can_submit(&self) -> bool {
        match self {
            AnswerController::Matching(c)       => c.can_submit(),
            AnswerController::Ordering(c)       => c.can_submit(),
            AnswerController::WordScramble(c)   => c.can_submit(),
            AnswerController::Slider(c)         => c.can_submit(),
            AnswerController::MultipleChoice(c) => c.can_submit(),
            AnswerController::TextInput(c)      => c.can_submit(),
            AnswerController::Unsupported(c)    => c.can_submit(),
        }
    }

    fn check_answer(&self) -> bool {
        match self {
            AnswerController::Matching(c)       => c.check_answer(),
            AnswerController::Ordering(c)       => c.check_answer(),
            AnswerController::WordScramble(c)   => c.check_answer(),
            AnswerController::Slider(c)         => c.check_answer(),
            AnswerController::MultipleChoice(c) => c.check_answer(),
            AnswerController::TextInput(c)      => c.check_answer(),
            AnswerController::Unsupported(c)    => c.check_answer(),
        }
    }

    fn reset(&mut self) {
        match self {
            AnswerController::Matching(c)       => c.reset(),
            AnswerController::Ordering(c)       => c.reset(),
            AnswerController::WordScramble(c)   => c.reset(),
            AnswerController::Slider(c)         => c.reset(),
            AnswerController::MultipleChoice(c) => c.reset(),
            AnswerController::TextInput(c)      => c.reset(),
            AnswerController::Unsupported(c)    => c.reset(),
        }
    }

    fn apply(&mut self, input: &AnswerInput) -> bool {
        match self {
            AnswerController::Matching(c)       => c.apply(input),
            AnswerController::Ordering(c)       => c.apply(input),
            AnswerController::WordScramble(c)   => c.apply(input),
            AnswerController::Slider(c)         => c.apply(input),
            AnswerController::MultipleChoice(c) => c.apply(input),
            AnswerController::TextInput(c)      => c.apply(input),
            AnswerController::Unsupported(c)    => c.apply(input),
        }
    }
}
