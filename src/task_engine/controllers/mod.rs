//! One answer controller per task type.
//!
//! | Module            | Task type | Answer state |
//! |-------------------|-----------|--------------|
//! | `matching`        | `matching` | left index → right index, shuffled right column |
//! | `ordering`        | `ordering` | current arrangement, moved by adjacent swaps |
//! | `word_scramble`   | `word-scramble` | typed word |
//! | `slider`          | `slider` | numeric estimate |
//! | `multiple_choice` | `multiple-choice` | selected option |
//! | `text_input`      | `text-input` | typed answer |
//! | `unsupported`     | remaining types | none |

pub mod matching;
pub mod multiple_choice;
pub mod ordering;
pub mod slider;
pub mod text_input;
pub mod unsupported;
pub mod word_scramble;

pub use matching::MatchingController;
pub use multiple_choice::MultipleChoiceController;
pub use ordering::OrderingController;
pub use slider::SliderController;
pub use text_input::TextInputController;
pub use unsupported::UnsupportedController;
pub use word_scramble::WordScrambleController;
