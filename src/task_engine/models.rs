use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::task_engine::error::EngineError;

// ---------------------------------------------------------------------------
// Task type tag
// ---------------------------------------------------------------------------

/// Closed set of task shapes. Serialized as the kebab-case tags used in
/// learning-path documents (`"word-scramble"`, `"multiple-choice"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskType {
    Matching,
    Ordering,
    WordScramble,
    Slider,
    MultipleChoice,
    TextInput,
    MultipleSelect,
    ClozeDeletion,
    TrueFalse,
    ErrorDetection,
    Flashcard,
    DragAndDrop,
}

impl TaskType {
    /// Tag as it appears in learning-path documents.
    pub fn tag(self) -> &'static str {
        match self {
            TaskType::Matching       => "matching",
            TaskType::Ordering       => "ordering",
            TaskType::WordScramble   => "word-scramble",
            TaskType::Slider         => "slider",
            TaskType::MultipleChoice => "multiple-choice",
            TaskType::TextInput      => "text-input",
            TaskType::MultipleSelect => "multiple-select",
            TaskType::ClozeDeletion  => "cloze-deletion",
            TaskType::TrueFalse      => "true-false",
            TaskType::ErrorDetection => "error-detection",
            TaskType::Flashcard      => "flashcard",
            TaskType::DragAndDrop    => "drag-and-drop",
        }
    }

    /// Whether the engine has a real controller for this type.
    pub fn is_evaluable(self) -> bool {
        matches!(
            self,
            TaskType::Matching
                | TaskType::Ordering
                | TaskType::WordScramble
                | TaskType::Slider
                | TaskType::MultipleChoice
                | TaskType::TextInput
        )
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

// ---------------------------------------------------------------------------
// Content payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingPair {
    pub left: String,
    pub right: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_audio: Option<String>,
}

impl MatchingPair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        MatchingPair { left: left.into(), right: right.into(), left_audio: None }
    }
}

/// Pairs in canonical order: left `i` belongs with right `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingContent {
    pub pairs: Vec<MatchingPair>,
}

/// Items listed in canonical (correct) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderingContent {
    pub items: Vec<String>,
    /// Audio clips aligned with `items` by canonical index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_audio: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordScrambleContent {
    pub scrambled_word: String,
    pub correct_word: String,
    #[serde(default)]
    pub show_length: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderContent {
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_step")]
    pub step: f64,
    pub correct_value: f64,
    #[serde(default)]
    pub tolerance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

fn default_step() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceContent {
    #[serde(default)]
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInputContent {
    #[serde(default)]
    pub question: String,
    pub correct_answer: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

/// Type-specific payload of a [`Task`].
///
/// Types without a controller keep their payload as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaskContent {
    Matching(MatchingContent),
    Ordering(OrderingContent),
    WordScramble(WordScrambleContent),
    Slider(SliderContent),
    MultipleChoice(MultipleChoiceContent),
    TextInput(TextInputContent),
    Opaque(Value),
}

impl TaskContent {
    /// Decode `raw` as the payload `task_type` requires.
    pub fn parse(task_type: TaskType, raw: Value) -> Result<Self, serde_json::Error> {
        Ok(match task_type {
            TaskType::Matching       => TaskContent::Matching(serde_json::from_value(raw)?),
            TaskType::Ordering       => TaskContent::Ordering(serde_json::from_value(raw)?),
            TaskType::WordScramble   => TaskContent::WordScramble(serde_json::from_value(raw)?),
            TaskType::Slider         => TaskContent::Slider(serde_json::from_value(raw)?),
            TaskType::MultipleChoice => TaskContent::MultipleChoice(serde_json::from_value(raw)?),
            TaskType::TextInput      => TaskContent::TextInput(serde_json::from_value(raw)?),
            TaskType::MultipleSelect
            | TaskType::ClozeDeletion
            | TaskType::TrueFalse
            | TaskType::ErrorDetection
            | TaskType::Flashcard
            | TaskType::DragAndDrop  => TaskContent::Opaque(raw),
        })
    }

    /// The type this payload shape belongs to; `None` for opaque payloads.
    pub fn shape(&self) -> Option<TaskType> {
        match self {
            TaskContent::Matching(_)       => Some(TaskType::Matching),
            TaskContent::Ordering(_)       => Some(TaskType::Ordering),
            TaskContent::WordScramble(_)   => Some(TaskType::WordScramble),
            TaskContent::Slider(_)         => Some(TaskType::Slider),
            TaskContent::MultipleChoice(_) => Some(TaskType::MultipleChoice),
            TaskContent::TextInput(_)      => Some(TaskType::TextInput),
            TaskContent::Opaque(_)         => None,
        }
    }
}

impl From<MatchingContent> for TaskContent {
    fn from(c: MatchingContent) -> Self {
        TaskContent::Matching(c)
    }
}

impl From<OrderingContent> for TaskContent {
    fn from(c: OrderingContent) -> Self {
        TaskContent::Ordering(c)
    }
}

impl From<WordScrambleContent> for TaskContent {
    fn from(c: WordScrambleContent) -> Self {
        TaskContent::WordScramble(c)
    }
}

impl From<SliderContent> for TaskContent {
    fn from(c: SliderContent) -> Self {
        TaskContent::Slider(c)
    }
}

impl From<MultipleChoiceContent> for TaskContent {
    fn from(c: MultipleChoiceContent) -> Self {
        TaskContent::MultipleChoice(c)
    }
}

impl From<TextInputContent> for TaskContent {
    fn from(c: TextInputContent) -> Self {
        TaskContent::TextInput(c)
    }
}

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// Passed through untouched; the engine never reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

/// One exercise. Immutable once handed to the engine; advancing to the next
/// exercise replaces it wholesale.
///
/// `content` is expected to match `task_type`, but nothing forces it to when
/// a task is built by hand. Controllers treat a mismatch as "no task".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTask")]
pub struct Task {
    pub id: String,
    pub learning_path_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub content: TaskContent,
    pub metadata: TaskMetadata,
}

impl Task {
    pub fn new(id: impl Into<String>, task_type: TaskType, content: impl Into<TaskContent>) -> Self {
        Task {
            id: id.into(),
            learning_path_id: String::new(),
            template_id: None,
            task_type,
            content: content.into(),
            metadata: TaskMetadata::default(),
        }
    }

    pub fn with_learning_path(mut self, learning_path_id: impl Into<String>) -> Self {
        self.learning_path_id = learning_path_id.into();
        self
    }

    /// True when the payload shape agrees with the type tag.
    /// Opaque payloads agree with every type that has no controller.
    pub fn is_consistent(&self) -> bool {
        match self.content.shape() {
            Some(shape) => shape == self.task_type,
            None        => !self.task_type.is_evaluable(),
        }
    }
}

/// Wire shape of a task before its content is decoded against its type tag.
/// Turned into a [`Task`] with `TryFrom`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTask {
    pub id: String,
    #[serde(default)]
    pub learning_path_id: String,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub metadata: TaskMetadata,
}

impl TryFrom<RawTask> for Task {
    type Error = EngineError;

    fn try_from(raw: RawTask) -> Result<Self, Self::Error> {
        let content = TaskContent::parse(raw.task_type, raw.content).map_err(|e| {
            EngineError::MalformedContent {
                task_id: raw.id.clone(),
                task_type: raw.task_type,
                reason: e.to_string(),
            }
        })?;
        Ok(Task {
            id: raw.id,
            learning_path_id: raw.learning_path_id,
            template_id: raw.template_id,
            task_type: raw.task_type,
            content,
            metadata: raw.metadata,
        })
    }
}

/// A learning-path document: an ordered list of tasks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: String,
    pub title: String,
    pub tasks: Vec<Task>,
}
