//! Core engine for the horoscope quiz.
//!
//! Loads a content document (questions, zodiac and ascendant pools, text
//! blocks), walks the player through the questions, draws a random
//! zodiac/ascendant pairing per run, and composes a horoscope whose opening
//! and closing blocks are picked deterministically from the answers.

pub mod composer;
pub mod config;
pub mod content;
pub mod error;
pub mod fate;
pub mod flow;
pub mod loader;
pub mod selector;
pub mod session;
pub mod state;

pub use composer::compose;
pub use config::QuizConfig;
pub use content::{AnswerOption, ContentDocument, ContentStore, ContentSummary, Question, Sign};
pub use error::{ContentError, ContentResult};
pub use fate::{Fate, roll_fate};
pub use flow::{FlowAction, Screen, ScreenFlow};
pub use loader::{ContentSource, PendingLoad, spawn_load};
pub use selector::{FragmentSelection, answer_hash};
pub use session::QuizSession;
pub use state::{QuizPhase, QuizState};
