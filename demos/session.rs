//! Walk through one practice session.
//!
//! Run with: `cargo run --example session`
//! (`RUST_LOG=practice_engine=debug` shows controller binding).
//!
//! A small learning path is loaded from JSON, then every task is mounted in a
//! single `TaskView`, answered with scripted input, scored with
//! `check_answer()` and rendered with feedback, the way an orchestrator would
//! drive it.

use std::cell::Cell;
use std::rc::Rc;

use practice_engine::{
    parse_learning_path, AnswerController, AnswerInput, EngineConfig, TaskBody, TaskType,
    TaskLifecycle, TaskView,
};

const PATH: &str = r#"{
  "id": "deutsch-grundlagen",
  "title": "Deutsch: Grundlagen",
  "tasks": [
    { "id": "tiere", "type": "matching", "content": { "pairs": [
      { "left": "der Hund", "right": "dog" },
      { "left": "die Katze", "right": "cat" },
      { "left": "das Pferd", "right": "horse" } ] } },
    { "id": "zahlen", "type": "ordering", "content": { "items": ["eins", "zwei", "drei", "vier"] } },
    { "id": "hund", "type": "word-scramble",
      "content": { "scrambledWord": "DNUH", "correctWord": "HUND", "showLength": true } },
    { "id": "zugspitze", "type": "slider",
      "content": { "min": 0, "max": 4000, "step": 10, "correctValue": 2962, "tolerance": 100, "unit": "m" } },
    { "id": "go", "type": "multiple-choice",
      "content": { "question": "Simple past of 'go'?", "options": ["goed", "went", "gone"], "correctAnswer": 1 } },
    { "id": "karte", "type": "flashcard", "content": { "front": "das Haus", "back": "the house" } }
  ]
}"#;

/// Scripted learner: deliberately gets the matching task half wrong.
fn answer(view: &mut TaskView) {
    match view.controller().map(|c| c.kind()) {
        Some(TaskType::Matching) => {
            view.input(AnswerInput::SetMatch { left: 0, right: 1 });
            view.input(AnswerInput::SetMatch { left: 1, right: 0 });
            view.input(AnswerInput::SetMatch { left: 2, right: 2 });
        }
        Some(TaskType::Ordering) => {
            view.input(AnswerInput::MoveUp(1));
        }
        Some(TaskType::WordScramble) => {
            view.input(AnswerInput::SetText("  hund ".into()));
        }
        Some(TaskType::Slider) => {
            view.input(AnswerInput::SetValue(2900.0));
        }
        Some(TaskType::MultipleChoice) => {
            view.input(AnswerInput::SelectOption(1));
        }
        _ => {}
    }
}

fn print_body(body: &TaskBody) {
    match body {
        TaskBody::Matching(m) => {
            for row in &m.left {
                let mark = if row.correct == Some(true) { "✓" } else { "✗" };
                println!(
                    "  {mark} {} → {} (expected {})",
                    row.text,
                    row.selected_text.as_deref().unwrap_or("-"),
                    row.expected_text.as_deref().unwrap_or("?"),
                );
            }
        }
        TaskBody::Ordering(o) => {
            for row in &o.rows {
                match row.target_position {
                    None      => println!("  ✓ {}. {}", row.position + 1, row.item),
                    Some(pos) => println!("  ✗ {}. {} (belongs at {pos})", row.position + 1, row.item),
                }
            }
        }
        TaskBody::WordScramble(w) => {
            println!("  {} → '{}' (solution {})", w.scrambled_word, w.answer, w.solution.as_deref().unwrap_or("?"));
        }
        TaskBody::Slider(s) => {
            println!("  picked {} (correct {:?} ± {:?})", s.label, s.correct_value, s.tolerance);
        }
        TaskBody::MultipleChoice(c) => {
            for opt in &c.options {
                let marker = if opt.is_answer == Some(true) { "✓" } else { " " };
                let chosen = if opt.selected { "*" } else { " " };
                println!("  [{chosen}] {marker} {}", opt.text);
            }
        }
        TaskBody::TextInput(t) => {
            println!("  '{}' (solution {})", t.answer, t.solution.as_deref().unwrap_or("?"));
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("practice_engine=info".parse().unwrap()),
        )
        .init();

    let path = match parse_learning_path(PATH) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("failed to load learning path: {e}");
            std::process::exit(1);
        }
    };

    let submit_enabled = Rc::new(Cell::new(false));
    let flag = Rc::clone(&submit_enabled);
    let mut view = TaskView::new(&EngineConfig::seeded(7));
    view.on_answer_change(move |can| flag.set(can));

    println!("══ {} ══", path.title);
    let mut score = 0;
    let total = path.tasks.len();
    for task in path.tasks {
        view.set_show_feedback(false);
        view.show_task(Some(task.clone()));
        println!();
        println!("── {} [{}] ──", task.id, task.task_type);

        if let Some(AnswerController::Ordering(o)) = view.controller() {
            println!("  shuffled: {}", o.ordered_items().join(", "));
        }
        answer(&mut view);

        if !submit_enabled.get() {
            println!("  (skipped: nothing to submit)");
            continue;
        }
        let correct = view.check_answer();
        if correct {
            score += 1;
        }
        view.set_show_feedback(true);
        if let Some(rendered) = view.render(correct) {
            println!("  {}", if correct { "correct" } else { "incorrect" });
            print_body(&rendered.body);
        }
    }
    println!();
    println!("Score: {score}/{total}");
}
