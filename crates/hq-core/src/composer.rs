//! Horoscope text assembly.

use crate::content::ContentStore;
use crate::selector::FragmentSelection;
use crate::state::QuizState;

/// Compose the horoscope for the current state.
///
/// With both block pools non-empty the layout is:
///
/// ```text
/// {start}
/// {zodiac fragment} {ascendant fragment}
///
/// {answers joined by spaces}
///
/// {end}
/// ```
///
/// If either pool is empty only the joined answers are returned; zodiac and
/// ascendant fragments are dropped in that case even when drawn.
pub fn compose(content: &ContentStore, state: &QuizState) -> String {
    let body = state.answers().join(" ");

    let Some(selection) = FragmentSelection::for_answers(
        state.answers(),
        content.start_blocks().len(),
        content.end_blocks().len(),
    ) else {
        return body;
    };

    let start = &content.start_blocks()[selection.start_index];
    let end = &content.end_blocks()[selection.end_index];
    let zodiac = state
        .zodiac()
        .map(|s| s.horoscope_fragment.as_str())
        .unwrap_or("");
    let ascendant = state
        .ascendant()
        .map(|s| s.horoscope_fragment.as_str())
        .unwrap_or("");

    format!("{start}\n{zodiac} {ascendant}\n\n{body}\n\n{end}")
}
