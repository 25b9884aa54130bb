//! Task answer evaluation engine.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Task, type tags, per-type content payloads, learning paths |
//! | `shuffle`     | Fisher-Yates permutations for presentation order |
//! | `controller`  | Lifecycle contract, input commands, closed dispatch by type |
//! | `controllers` | One answer-state controller per task type |
//! | `view`        | Mounts a controller, fires answer-change hooks, renders feedback |
//! | `config`      | Randomness source selection |
//! | `loader`      | Learning-path JSON → tasks |
//! | `error`       | Loading errors |

pub mod config;
pub mod controller;
pub mod controllers;
pub mod error;
pub mod loader;
pub mod models;
pub mod shuffle;
pub mod view;

pub use config::EngineConfig;
pub use controller::{AnswerController, AnswerInput, TaskLifecycle};
pub use error::EngineError;
pub use loader::{parse_learning_path, parse_task};
pub use models::{
    LearningPath, MatchingContent, MatchingPair, MultipleChoiceContent, OrderingContent,
    SliderContent, Task, TaskContent, TaskMetadata, TaskType, TextInputContent,
    WordScrambleContent,
};
pub use view::{Rendered, TaskBody, TaskView};
