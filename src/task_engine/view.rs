//! View binding: glue between the orchestrator, one mounted controller,
//! and whatever UI draws it.
//!
//! [`TaskView`] mounts the controller that matches the current task, forwards
//! [`AnswerInput`] commands to it, and notifies the answer-change listener
//! after every applied input and once per mount. [`TaskView::render`]
//! produces a plain data description of what to draw, including the
//! per-item feedback shown after submission.

use rand::rngs::StdRng;
use serde::Serialize;

use crate::task_engine::{
    config::EngineConfig,
    controller::{AnswerController, AnswerInput, TaskLifecycle},
    controllers::{
        MatchingController, MultipleChoiceController, OrderingController, SliderController,
        TextInputController, WordScrambleController,
    },
    models::Task,
};

/// Called with the current `can_submit()` whenever it may have changed.
pub type AnswerListener = Box<dyn FnMut(bool)>;

pub struct TaskView {
    rng: StdRng,
    task: Option<Task>,
    controller: Option<AnswerController>,
    listener: Option<AnswerListener>,
    show_feedback: bool,
}

impl TaskView {
    pub fn new(config: &EngineConfig) -> Self {
        TaskView {
            rng: config.rng(),
            task: None,
            controller: None,
            listener: None,
            show_feedback: false,
        }
    }

    /// Register the orchestrator's submittability listener.
    pub fn on_answer_change(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Bind `task`. State is rebuilt only when the task identity changes or
    /// the task goes away; handing in the same task again keeps the answer.
    pub fn show_task(&mut self, task: Option<Task>) {
        let same = match (&self.task, &task) {
            (Some(old), Some(new)) => old.id == new.id,
            _ => false,
        };
        if same {
            return;
        }
        // Discard the old state before anything new is computed.
        self.controller = None;
        self.task = task;
        if let Some(task) = &self.task {
            self.controller = Some(AnswerController::mount(task, &mut self.rng));
        }
        self.notify();
    }

    pub fn task(&self) -> Option<&Task> {
        self.task.as_ref()
    }

    pub fn controller(&self) -> Option<&AnswerController> {
        self.controller.as_ref()
    }

    /// While feedback is shown the view accepts no input.
    pub fn set_show_feedback(&mut self, show: bool) {
        self.show_feedback = show;
    }

    pub fn show_feedback(&self) -> bool {
        self.show_feedback
    }

    /// Forward one user action. Returns whether the controller took it.
    pub fn input(&mut self, input: AnswerInput) -> bool {
        if self.show_feedback {
            tracing::debug!(?input, "input ignored while feedback is shown");
            return false;
        }
        let Some(controller) = self.controller.as_mut() else {
            return false;
        };
        if !controller.apply(&input) {
            tracing::debug!(?input, kind = %controller.kind(), "input does not apply to mounted task");
            return false;
        }
        self.notify();
        true
    }

    /// Clear the learner's answer for the current task.
    pub fn reset(&mut self) {
        if let Some(c) = self.controller.as_mut() {
            c.reset();
        }
        self.notify();
    }

    pub fn can_submit(&self) -> bool {
        self.controller.as_ref().is_some_and(|c| c.can_submit())
    }

    pub fn check_answer(&self) -> bool {
        self.controller.as_ref().is_some_and(|c| c.check_answer())
    }

    fn notify(&mut self) {
        let can_submit = self.can_submit();
        if let Some(listener) = self.listener.as_mut() {
            listener(can_submit);
        }
    }

    /// Describe what to draw. `is_correct` is the orchestrator's verdict from
    /// submit time and is only consulted while feedback is shown.
    ///
    /// `None` means draw nothing: no task, or a task the controller rejected.
    pub fn render(&self, is_correct: bool) -> Option<Rendered> {
        let controller = self.controller.as_ref()?;
        let task_id = controller.task_id()?.to_string();
        let fb = self.show_feedback;
        let body = match controller {
            AnswerController::Matching(c)       => TaskBody::Matching(render_matching(c, fb)),
            AnswerController::Ordering(c)       => TaskBody::Ordering(render_ordering(c, fb)),
            AnswerController::WordScramble(c)   => TaskBody::WordScramble(render_word_scramble(c, fb)),
            AnswerController::Slider(c)         => TaskBody::Slider(render_slider(c, fb)),
            AnswerController::MultipleChoice(c) => TaskBody::MultipleChoice(render_choice(c, fb)),
            AnswerController::TextInput(c)      => TaskBody::TextInput(render_text_input(c, fb)),
            AnswerController::Unsupported(_)    => return None,
        };
        Some(Rendered {
            task_id,
            interactive: !fb,
            verdict: fb.then_some(is_correct),
            body,
        })
    }
}

// ---------------------------------------------------------------------------
// Render model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered {
    pub task_id: String,
    /// False while feedback is shown; input affordances are disabled.
    pub interactive: bool,
    /// Overall verdict, present only while feedback is shown.
    pub verdict: Option<bool>,
    pub body: TaskBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TaskBody {
    Matching(MatchingView),
    Ordering(OrderingView),
    WordScramble(WordScrambleView),
    Slider(SliderView),
    MultipleChoice(ChoiceView),
    TextInput(TextInputView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchingView {
    /// Left items in canonical order.
    pub left: Vec<MatchingLeftRow>,
    /// Right items in presentation (shuffled) order.
    pub right: Vec<MatchingRightItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchingLeftRow {
    pub index: usize,
    pub text: String,
    pub audio: Option<String>,
    pub selected_right: Option<usize>,
    pub selected_text: Option<String>,
    /// Per-pair verdict, present only while feedback is shown.
    pub correct: Option<bool>,
    /// Right text this row belongs with, revealed with feedback.
    pub expected_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchingRightItem {
    /// Canonical index, the value sent back in `AnswerInput::SetMatch`.
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderingView {
    pub rows: Vec<OrderingRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderingRow {
    pub position: usize,
    pub item: String,
    pub audio: Option<String>,
    pub can_move_up: bool,
    pub can_move_down: bool,
    pub correct: Option<bool>,
    /// 1-based position the item belongs at, shown when it is misplaced.
    pub target_position: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordScrambleView {
    pub scrambled_word: String,
    /// Letter count of the solution when the task opts in.
    pub length_hint: Option<usize>,
    pub answer: String,
    pub solution: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderView {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
    /// Where the thumb sits: `value` clamped to the range and rounded to the step.
    pub snapped: f64,
    pub unit: Option<String>,
    /// Value with its unit, e.g. `"42 km"`.
    pub label: String,
    pub correct_value: Option<f64>,
    pub tolerance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceView {
    pub question: String,
    pub options: Vec<ChoiceOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceOption {
    pub index: usize,
    pub text: String,
    pub selected: bool,
    /// Marks the correct option once feedback is shown.
    pub is_answer: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextInputView {
    pub question: String,
    pub answer: String,
    pub solution: Option<String>,
}

// ---------------------------------------------------------------------------
// Per-type rendering
// ---------------------------------------------------------------------------

fn render_matching(c: &MatchingController, feedback: bool) -> MatchingView {
    let Some(content) = c.content() else {
        return MatchingView { left: Vec::new(), right: Vec::new() };
    };
    let right_text = |i: usize| content.pairs.get(i).map(|p| p.right.clone());
    let left = content
        .pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| {
            let selected_right = c.selection(i);
            MatchingLeftRow {
                index: i,
                text: pair.left.clone(),
                audio: pair.left_audio.clone(),
                selected_right,
                selected_text: selected_right.and_then(right_text),
                correct: feedback.then(|| c.pair_is_correct(i)),
                expected_text: feedback.then(|| pair.right.clone()),
            }
        })
        .collect();
    let right = c
        .shuffled_right_column()
        .iter()
        .filter_map(|&i| right_text(i).map(|text| MatchingRightItem { index: i, text }))
        .collect();
    MatchingView { left, right }
}

fn render_ordering(c: &OrderingController, feedback: bool) -> OrderingView {
    let audio = c.content().and_then(|content| content.items_audio.as_ref());
    let len = c.ordered_items().len();
    let rows = c
        .ordered_items()
        .iter()
        .enumerate()
        .map(|(i, item)| OrderingRow {
            position: i,
            item: item.clone(),
            audio: c
                .canonical_index(i)
                .and_then(|ci| audio.and_then(|a| a.get(ci)).cloned()),
            can_move_up: !feedback && i > 0,
            can_move_down: !feedback && i + 1 < len,
            correct: feedback.then(|| c.position_is_correct(i)),
            target_position: if feedback { c.target_hint(i) } else { None },
        })
        .collect();
    OrderingView { rows }
}

fn render_word_scramble(c: &WordScrambleController, feedback: bool) -> WordScrambleView {
    let content = c.content();
    WordScrambleView {
        scrambled_word: content.map(|w| w.scrambled_word.clone()).unwrap_or_default(),
        length_hint: content
            .filter(|w| w.show_length)
            .map(|w| w.correct_word.chars().count()),
        answer: c.answer().to_string(),
        solution: content.filter(|_| feedback).map(|w| w.correct_word.clone()),
    }
}

/// Integral values print without a fractional part.
fn format_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

fn render_slider(c: &SliderController, feedback: bool) -> SliderView {
    let content = c.content();
    let unit = content.and_then(|s| s.unit.clone());
    let label = match &unit {
        Some(u) => format!("{} {u}", format_number(c.value())),
        None    => format_number(c.value()),
    };
    SliderView {
        min: content.map_or(0.0, |s| s.min),
        max: content.map_or(0.0, |s| s.max),
        step: content.map_or(1.0, |s| s.step),
        value: c.value(),
        snapped: c.snap(c.value()),
        unit,
        label,
        correct_value: content.filter(|_| feedback).map(|s| s.correct_value),
        tolerance: content.filter(|s| feedback && s.tolerance > 0.0).map(|s| s.tolerance),
    }
}

fn render_choice(c: &MultipleChoiceController, feedback: bool) -> ChoiceView {
    let Some(content) = c.content() else {
        return ChoiceView { question: String::new(), options: Vec::new() };
    };
    let options = content
        .options
        .iter()
        .enumerate()
        .map(|(i, text)| ChoiceOption {
            index: i,
            text: text.clone(),
            selected: c.selected() == Some(i),
            is_answer: feedback.then_some(i == content.correct_answer),
        })
        .collect();
    ChoiceView { question: content.question.clone(), options }
}

fn render_text_input(c: &TextInputController, feedback: bool) -> TextInputView {
    let content = c.content();
    TextInputView {
        question: content.map(|t| t.question.clone()).unwrap_or_default(),
        answer: c.answer().to_string(),
        solution: content.filter(|_| feedback).map(|t| t.correct_answer.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task_engine::models::{
        MatchingContent, MatchingPair, OrderingContent, SliderContent, TaskType,
        WordScrambleContent,
    };
    use std::cell::RefCell;
    use std::rc::Rc;

    fn matching_task(id: &str) -> Task {
        Task::new(
            id,
            TaskType::Matching,
            MatchingContent {
                pairs: vec![
                    MatchingPair::new("a", "x"),
                    MatchingPair::new("b", "y"),
                    MatchingPair::new("c", "z"),
                ],
            },
        )
    }

    fn recording_view() -> (TaskView, Rc<RefCell<Vec<bool>>>) {
        let mut view = TaskView::new(&EngineConfig::seeded(17));
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        view.on_answer_change(move |can| sink.borrow_mut().push(can));
        (view, log)
    }

    #[test]
    fn listener_fires_on_mount_and_after_each_input() {
        let (mut view, log) = recording_view();
        view.show_task(Some(matching_task("m1")));
        view.input(AnswerInput::SetMatch { left: 0, right: 0 });
        view.input(AnswerInput::SetMatch { left: 1, right: 1 });
        view.input(AnswerInput::SetMatch { left: 2, right: 2 });
        assert_eq!(*log.borrow(), vec![false, false, false, true]);
        assert!(view.check_answer());
    }

    #[test]
    fn missing_listener_changes_nothing() {
        let mut view = TaskView::new(&EngineConfig::seeded(17));
        view.show_task(Some(matching_task("m1")));
        assert!(view.input(AnswerInput::SetMatch { left: 0, right: 0 }));
        assert!(!view.can_submit());
    }

    #[test]
    fn same_task_identity_keeps_state() {
        let (mut view, log) = recording_view();
        view.show_task(Some(matching_task("m1")));
        view.input(AnswerInput::SetMatch { left: 0, right: 1 });
        view.show_task(Some(matching_task("m1")));
        assert_eq!(
            view.render(false).map(|r| match r.body {
                TaskBody::Matching(m) => m.left[0].selected_right,
                _ => None,
            }),
            Some(Some(1))
        );
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn new_task_identity_rebuilds_state() {
        let (mut view, _) = recording_view();
        view.show_task(Some(matching_task("m1")));
        view.input(AnswerInput::SetMatch { left: 0, right: 0 });
        view.show_task(Some(matching_task("m2")));
        match view.render(false).map(|r| r.body) {
            Some(TaskBody::Matching(m)) => assert!(m.left.iter().all(|row| row.selected_right.is_none())),
            other => panic!("expected matching body, got {other:?}"),
        }
    }

    #[test]
    fn absent_task_renders_nothing_and_notifies_false() {
        let (mut view, log) = recording_view();
        view.show_task(Some(matching_task("m1")));
        view.show_task(None);
        assert!(view.render(false).is_none());
        assert!(!view.can_submit());
        assert!(!view.check_answer());
        assert_eq!(*log.borrow(), vec![false, false]);
    }

    #[test]
    fn mismatched_task_renders_nothing() {
        let (mut view, _) = recording_view();
        let task = Task::new(
            "bad",
            TaskType::Ordering,
            SliderContent {
                min: 0.0, max: 1.0, step: 1.0,
                correct_value: 1.0, tolerance: 0.0, unit: None,
            },
        );
        view.show_task(Some(task));
        assert!(view.render(false).is_none());
        assert!(!view.can_submit());
    }

    #[test]
    fn feedback_blocks_input_and_reveals_per_pair_verdicts() {
        let (mut view, _) = recording_view();
        view.show_task(Some(matching_task("m1")));
        view.input(AnswerInput::SetMatch { left: 0, right: 1 });
        view.input(AnswerInput::SetMatch { left: 1, right: 0 });
        view.input(AnswerInput::SetMatch { left: 2, right: 2 });
        let verdict = view.check_answer();
        view.set_show_feedback(true);
        assert!(!view.input(AnswerInput::SetMatch { left: 0, right: 0 }));

        let rendered = view.render(verdict).unwrap();
        assert!(!rendered.interactive);
        assert_eq!(rendered.verdict, Some(false));
        let TaskBody::Matching(m) = rendered.body else {
            panic!("expected matching body");
        };
        let per_pair: Vec<_> = m.left.iter().map(|r| r.correct).collect();
        assert_eq!(per_pair, vec![Some(false), Some(false), Some(true)]);
        assert_eq!(m.left[0].selected_text.as_deref(), Some("y"));
        assert_eq!(m.left[0].expected_text.as_deref(), Some("x"));
    }

    #[test]
    fn matching_right_column_follows_shuffle() {
        let (mut view, _) = recording_view();
        view.show_task(Some(matching_task("m1")));
        let Some(AnswerController::Matching(c)) = view.controller() else {
            panic!("expected matching controller");
        };
        let order = c.shuffled_right_column().to_vec();
        let Some(TaskBody::Matching(m)) = view.render(false).map(|r| r.body) else {
            panic!("expected matching body");
        };
        let shown: Vec<usize> = m.right.iter().map(|r| r.index).collect();
        assert_eq!(shown, order);
        assert!(m.left.iter().all(|row| row.correct.is_none()));
    }

    #[test]
    fn ordering_feedback_includes_target_positions_and_audio() {
        let (mut view, _) = recording_view();
        view.show_task(Some(Task::new(
            "o1",
            TaskType::Ordering,
            OrderingContent {
                items: vec!["eins".into(), "zwei".into(), "drei".into()],
                items_audio: Some(vec!["1.mp3".into(), "2.mp3".into(), "3.mp3".into()]),
            },
        )));
        view.set_show_feedback(true);
        let Some(TaskBody::Ordering(o)) = view.render(false).map(|r| r.body) else {
            panic!("expected ordering body");
        };
        for row in &o.rows {
            let canonical = ["eins", "zwei", "drei"].iter().position(|w| *w == row.item).unwrap();
            assert_eq!(row.audio.as_deref(), Some(format!("{}.mp3", canonical + 1).as_str()));
            assert_eq!(row.correct, Some(canonical == row.position));
            if canonical == row.position {
                assert_eq!(row.target_position, None);
            } else {
                assert_eq!(row.target_position, Some(canonical + 1));
            }
            assert!(!row.can_move_up && !row.can_move_down);
        }
    }

    #[test]
    fn word_scramble_length_hint_and_solution() {
        let (mut view, _) = recording_view();
        view.show_task(Some(Task::new(
            "w1",
            TaskType::WordScramble,
            WordScrambleContent {
                scrambled_word: "ÜRTE".into(),
                correct_word: "TÜRE".into(),
                show_length: true,
            },
        )));
        view.input(AnswerInput::SetText("türe".into()));
        let Some(TaskBody::WordScramble(w)) = view.render(false).map(|r| r.body) else {
            panic!("expected word scramble body");
        };
        assert_eq!(w.length_hint, Some(4));
        assert_eq!(w.solution, None);
        view.set_show_feedback(true);
        let Some(TaskBody::WordScramble(w)) = view.render(true).map(|r| r.body) else {
            panic!("expected word scramble body");
        };
        assert_eq!(w.solution.as_deref(), Some("TÜRE"));
    }

    #[test]
    fn slider_label_carries_unit() {
        let (mut view, _) = recording_view();
        view.show_task(Some(Task::new(
            "s1",
            TaskType::Slider,
            SliderContent {
                min: 0.0, max: 1000.0, step: 10.0,
                correct_value: 830.0, tolerance: 20.0, unit: Some("m".into()),
            },
        )));
        view.input(AnswerInput::SetValue(810.0));
        assert!(view.check_answer());
        view.set_show_feedback(true);
        let Some(TaskBody::Slider(s)) = view.render(true).map(|r| r.body) else {
            panic!("expected slider body");
        };
        assert_eq!(s.label, "810 m");
        assert_eq!(s.correct_value, Some(830.0));
        assert_eq!(s.tolerance, Some(20.0));
    }

    #[test]
    fn slider_thumb_snaps_but_value_is_kept() {
        let (mut view, _) = recording_view();
        view.show_task(Some(Task::new(
            "s1",
            TaskType::Slider,
            SliderContent {
                min: 0.0, max: 1000.0, step: 10.0,
                correct_value: 830.0, tolerance: 0.0, unit: None,
            },
        )));
        let slider = |view: &TaskView| match view.render(false).map(|r| r.body) {
            Some(TaskBody::Slider(s)) => s,
            other => panic!("expected slider body, got {other:?}"),
        };

        view.input(AnswerInput::SetValue(813.0));
        let s = slider(&view);
        assert_eq!(s.value, 813.0);
        assert_eq!(s.snapped, 810.0);

        view.input(AnswerInput::SetValue(2500.0));
        let s = slider(&view);
        assert_eq!(s.value, 2500.0);
        assert_eq!(s.snapped, 1000.0);
        assert!(!view.check_answer());
    }

    #[test]
    fn reset_clears_answer_and_notifies() {
        let (mut view, log) = recording_view();
        view.show_task(Some(Task::new(
            "w1",
            TaskType::WordScramble,
            WordScrambleContent {
                scrambled_word: "DNUH".into(),
                correct_word: "HUND".into(),
                show_length: false,
            },
        )));
        view.input(AnswerInput::SetText("hund".into()));
        view.reset();
        assert_eq!(*log.borrow(), vec![false, true, false]);
    }
}
