//! Terminal UI for the horoscope quiz.
//!
//! Three screens driven by the quiz session: a start screen, the question
//! wizard, and the composed horoscope.

pub mod app;
pub mod screens;
pub mod shared;
pub mod terminal;
