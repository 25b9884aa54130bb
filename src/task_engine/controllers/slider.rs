use rand::Rng;

use crate::task_engine::{
    controller::{bind, AnswerInput, Binding, TaskLifecycle},
    models::{SliderContent, Task, TaskContent, TaskType},
};

/// Continuous-value estimation within `[min, max]`.
///
/// The value is stored and scored as given. [`SliderController::snap`] gives
/// the clamped, step-rounded position the view draws the thumb at.
#[derive(Debug, Clone, Default)]
pub struct SliderController {
    binding: Option<Binding<SliderContent>>,
    value: f64,
}

/// Floored midpoint of the range, the value a fresh slider starts at.
pub fn initial_value(content: &SliderContent) -> f64 {
    ((content.min + content.max) / 2.0).floor()
}

/// `|value - correct| <= tolerance`; both boundaries count as correct.
pub fn within_tolerance(value: f64, correct: f64, tolerance: f64) -> bool {
    (value - correct).abs() <= tolerance
}

impl SliderController {
    pub fn content(&self) -> Option<&SliderContent> {
        self.binding.as_ref().map(|b| &b.content)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Clamp `raw` into the range and round it to the nearest step from `min`.
    pub fn snap(&self, raw: f64) -> f64 {
        let Some(c) = self.content() else {
            return raw;
        };
        let clamped = raw.clamp(c.min.min(c.max), c.max.max(c.min));
        if c.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - c.min) / c.step).round();
        (c.min + steps * c.step).clamp(c.min.min(c.max), c.max.max(c.min))
    }
}

impl TaskLifecycle for SliderController {
    fn kind(&self) -> TaskType {
        TaskType::Slider
    }

    fn initialize<R: Rng>(&mut self, task: Option<&Task>, _rng: &mut R) {
        *self = SliderController::default();
        self.binding = bind(task, TaskType::Slider, |c| match c {
            TaskContent::Slider(s) => Some(s),
            _ => None,
        });
        self.value = self.content().map_or(0.0, initial_value);
    }

    fn task_id(&self) -> Option<&str> {
        self.binding.as_ref().map(|b| b.task_id.as_str())
    }

    fn can_submit(&self) -> bool {
        self.binding.is_some()
    }

    fn check_answer(&self) -> bool {
        self.content()
            .is_some_and(|c| within_tolerance(self.value, c.correct_value, c.tolerance))
    }

    fn reset(&mut self) {
        self.value = self.content().map_or(0.0, initial_value);
    }

    fn apply(&mut self, input: &AnswerInput) -> bool {
        match *input {
            AnswerInput::SetValue(v) => {
                self.set_value(v);
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

    fn content(min: f64, max: f64, correct: f64, tolerance: f64) -> SliderContent {
        SliderContent { min, max, step: 1.0, correct_value: correct, tolerance, unit: None }
    }

    fn mounted(c: SliderContent) -> SliderController {
        let mut rng = StdRng::seed_from_u64(0);
        let mut ctl = SliderController::default();
        ctl.initialize(Some(&Task::new("s1", TaskType::Slider, c)), &mut rng);
        ctl
    }

    #[test]
    fn starts_at_floored_midpoint() {
        assert_eq!(mounted(content(0.0, 100.0, 50.0, 0.0)).value(), 50.0);
        assert_eq!(mounted(content(1.0, 10.0, 5.0, 0.0)).value(), 5.0);
        assert_eq!(mounted(content(-5.0, 0.0, 0.0, 0.0)).value(), -3.0);
    }

    #[test]
    fn tolerance_boundaries_are_inclusive() {
        let mut c = mounted(content(0.0, 100.0, 50.0, 5.0));
        for (v, expected) in [(45.0, true), (55.0, true), (44.0, false), (56.0, false), (50.0, true)] {
            c.set_value(v);
            assert_eq!(c.check_answer(), expected, "value {v}");
        }
    }

    #[test]
    fn default_tolerance_requires_exact_value() {
        let mut c = mounted(content(0.0, 100.0, 42.0, 0.0));
        c.set_value(43.0);
        assert!(!c.check_answer());
        c.set_value(42.0);
        assert!(c.check_answer());
    }

    #[test]
    fn value_is_not_clamped_by_controller() {
        let mut c = mounted(content(0.0, 10.0, 5.0, 0.0));
        c.set_value(250.0);
        assert_eq!(c.value(), 250.0);
        assert!(c.can_submit());
    }

    #[test]
    fn snap_clamps_and_rounds_to_step() {
        let mut s = content(0.0, 100.0, 50.0, 0.0);
        s.step = 5.0;
        let c = mounted(s);
        assert_eq!(c.snap(-10.0), 0.0);
        assert_eq!(c.snap(101.0), 100.0);
        assert_eq!(c.snap(47.0), 45.0);
        assert_eq!(c.snap(48.0), 50.0);
    }

    #[test]
    fn new_task_resets_value_to_its_midpoint() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut c = mounted(content(0.0, 100.0, 50.0, 0.0));
        c.set_value(99.0);
        c.initialize(
            Some(&Task::new("s2", TaskType::Slider, content(10.0, 20.0, 12.0, 1.0))),
            &mut rng,
        );
        assert_eq!(c.value(), 15.0);
        assert_eq!(c.task_id(), Some("s2"));
    }

    #[test]
    fn reset_returns_to_midpoint() {
        let mut c = mounted(content(0.0, 9.0, 3.0, 0.0));
        c.set_value(3.0);
        c.reset();
        assert_eq!(c.value(), 4.0);
    }
}
