//! # practice_engine
//!
//! Answer evaluation for practice tasks: the state behind each exercise
//! widget, deciding when an answer can be submitted and whether it is right.
//!
//! Supported task shapes:
//!
//! - **Matching**: associate left items with a shuffled right column.
//! - **Ordering**: rearrange a shuffled list into canonical order.
//! - **Word scramble**: type the unscrambled word (case/whitespace tolerant).
//! - **Slider**: estimate a number within a tolerance.
//! - **Multiple choice** and **text input**.
//!
//! Multiple-select, cloze deletion, true/false, error detection, flashcard and
//! drag-and-drop tasks load fine but have no evaluator: they never report submittable or
//! correct, and render nothing.
//!
//! ## How it works
//!
//! 1. Load tasks with [`parse_learning_path`] (or build [`Task`] values).
//! 2. Create a [`TaskView`] from an [`EngineConfig`], register an
//!    answer-change listener, and hand it a task with [`TaskView::show_task`].
//! 3. Forward user actions as [`AnswerInput`] commands; the listener hears the
//!    new `can_submit()` after every one.
//! 4. On submit, read [`TaskView::check_answer`], switch feedback on, and draw
//!    [`TaskView::render`] for per-item verdicts.
//!
//! ## Quick start
//!
//! ```rust
//! use practice_engine::{AnswerInput, EngineConfig, SliderContent, Task, TaskType, TaskView};
//!
//! let task = Task::new("s1", TaskType::Slider, SliderContent {
//!     min: 0.0, max: 100.0, step: 1.0,
//!     correct_value: 50.0, tolerance: 5.0, unit: None,
//! });
//!
//! let mut view = TaskView::new(&EngineConfig::seeded(42));
//! view.on_answer_change(|can_submit| println!("submit enabled: {can_submit}"));
//! view.show_task(Some(task));
//! view.input(AnswerInput::SetValue(54.0));
//! assert!(view.check_answer());
//! ```

pub mod task_engine;

pub use task_engine::{
    parse_learning_path, parse_task, AnswerController, AnswerInput, EngineConfig, EngineError,
    LearningPath, MatchingContent, MatchingPair, MultipleChoiceContent, OrderingContent,
    Rendered, SliderContent, Task, TaskBody, TaskContent, TaskLifecycle, TaskMetadata, TaskType,
    TaskView, TextInputContent, WordScrambleContent,
};
