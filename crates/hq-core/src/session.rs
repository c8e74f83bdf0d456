//! Quiz session management.
//!
//! `QuizSession` is the single owner of loaded content, progression state,
//! and the RNG used for sign draws. All mutation goes through `load`,
//! `submit_answer`/`choose_option`, and `restart`. Derived values (phase,
//! current question, selected blocks, horoscope text) are recomputed from
//! the current state on every call.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::composer::compose;
use crate::config::QuizConfig;
use crate::content::{ContentDocument, ContentStore, Question, Sign};
use crate::error::ContentResult;
use crate::fate::roll_fate;
use crate::selector::FragmentSelection;
use crate::state::{QuizPhase, QuizState};

/// An interactive quiz session.
pub struct QuizSession {
    content: ContentStore,
    state: QuizState,
    rng: StdRng,
}

impl QuizSession {
    /// Create a session with nothing loaded.
    pub fn new(config: &QuizConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            content: ContentStore::new(),
            state: QuizState::new(),
            rng,
        }
    }

    /// Create a session and load `doc` into it.
    pub fn with_content(config: &QuizConfig, doc: ContentDocument) -> Self {
        let mut session = Self::new(config);
        session.load(doc);
        session
    }

    /// Replace the content and start a fresh run.
    pub fn load(&mut self, doc: ContentDocument) {
        self.content = ContentStore::from(doc);
        self.randomize();
        let summary = self.content.summary();
        tracing::info!(
            questions = summary.questions,
            zodiacs = summary.zodiacs,
            ascendants = summary.ascendants,
            start_blocks = summary.start_blocks,
            end_blocks = summary.end_blocks,
            "content loaded"
        );
    }

    /// Apply the outcome of a content fetch.
    ///
    /// A failed fetch is logged and otherwise ignored: the session keeps
    /// whatever it had, which for a first load means an empty store and a
    /// quiz that cannot progress. Returns whether content was loaded.
    pub fn apply_load(&mut self, result: ContentResult<ContentDocument>) -> bool {
        match result {
            Ok(doc) => {
                self.load(doc);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load questions");
                false
            }
        }
    }

    /// Record `fragment` as the answer to the current question.
    ///
    /// Ignored once the quiz is finished or when nothing is loaded.
    pub fn submit_answer(&mut self, fragment: impl Into<String>) -> bool {
        let fragment = fragment.into();
        let total = self.content.question_count();
        let advanced = self.state.advance(fragment, total);
        if advanced {
            tracing::debug!(answered = self.state.current_index(), total, "answer recorded");
        } else {
            tracing::debug!(total, "answer ignored, no question pending");
        }
        advanced
    }

    /// Answer the current question with its option at `index`.
    ///
    /// Returns `false` if there is no current question or no such option.
    pub fn choose_option(&mut self, index: usize) -> bool {
        let Some(fragment) = self
            .current_question()
            .and_then(|q| q.options.get(index))
            .map(|o| o.horoscope_fragment.clone())
        else {
            return false;
        };
        self.submit_answer(fragment)
    }

    /// Start over with the same content and a new zodiac/ascendant draw.
    pub fn restart(&mut self) {
        self.randomize();
        tracing::info!(draws = self.state.draws(), "quiz restarted");
    }

    fn randomize(&mut self) {
        let fate = roll_fate(
            &mut self.rng,
            self.content.zodiacs(),
            self.content.ascendants(),
        );
        self.state.reset(fate);
    }

    /// Loaded content.
    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    /// Progression state.
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> QuizPhase {
        QuizPhase::of(self.state.current_index(), self.content.question_count())
    }

    /// Whether every loaded question has been answered.
    pub fn is_finished(&self) -> bool {
        self.phase() == QuizPhase::Finished
    }

    /// The question awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&Question> {
        self.content.question(self.state.current_index())
    }

    /// Whether the current question is the final one.
    pub fn is_last_question(&self) -> bool {
        let total = self.content.question_count();
        total > 0 && self.state.current_index() == total - 1
    }

    /// 1-based position of the current question and the total, while in progress.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.current_question()
            .map(|_| (self.state.current_index() + 1, self.content.question_count()))
    }

    /// Collected fragments.
    pub fn answers(&self) -> &[String] {
        self.state.answers()
    }

    /// Drawn zodiac.
    pub fn zodiac(&self) -> Option<&Sign> {
        self.state.zodiac()
    }

    /// Drawn ascendant.
    pub fn ascendant(&self) -> Option<&Sign> {
        self.state.ascendant()
    }

    /// Blocks selected for the current answers, if both pools are non-empty.
    pub fn selection(&self) -> Option<FragmentSelection> {
        FragmentSelection::for_answers(
            self.state.answers(),
            self.content.start_blocks().len(),
            self.content.end_blocks().len(),
        )
    }

    /// The horoscope for the current answers.
    pub fn horoscope(&self) -> String {
        compose(&self.content, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::AnswerOption;
    use crate::error::ContentError;

    fn option(label: &str) -> AnswerOption {
        AnswerOption {
            label: label.to_string(),
            value: label.to_lowercase(),
            horoscope_fragment: format!("{label} fragment."),
        }
    }

    fn sign(name: &str) -> Sign {
        Sign {
            name: name.to_string(),
            horoscope_fragment: format!("{name} rules."),
        }
    }

    fn test_doc() -> ContentDocument {
        ContentDocument {
            questions: vec![
                Question {
                    id: 1,
                    text: "Sun or rain?".into(),
                    options: vec![option("Sun"), option("Rain")],
                },
                Question {
                    id: 2,
                    text: "Cats or dogs?".into(),
                    options: vec![option("Cats"), option("Dogs")],
                },
                Question {
                    id: 3,
                    text: "Early or late?".into(),
                    options: vec![option("Early"), option("Late")],
                },
            ],
            zodiacs: vec![sign("Aries"), sign("Taurus"), sign("Gemini")],
            ascendants: vec![sign("Leo"), sign("Virgo")],
            start_blocks: vec!["Begin.".into(), "Start.".into()],
            end_blocks: vec!["End.".into(), "Fin.".into(), "Stop.".into()],
        }
    }

    fn test_session() -> QuizSession {
        QuizSession::with_content(&QuizConfig::default().with_seed(42), test_doc())
    }

    #[test]
    fn new_session_is_loading() {
        let s = QuizSession::new(&QuizConfig::default().with_seed(1));
        assert_eq!(s.phase(), QuizPhase::Loading);
        assert!(!s.is_finished());
        assert!(s.current_question().is_none());
        assert!(s.zodiac().is_none());
    }

    #[test]
    fn load_starts_in_progress_with_signs() {
        let s = test_session();
        assert_eq!(s.phase(), QuizPhase::InProgress);
        assert_eq!(s.state().current_index(), 0);
        assert!(s.answers().is_empty());
        assert!(s.zodiac().is_some());
        assert!(s.ascendant().is_some());
        assert_eq!(s.state().draws(), 1);
        assert_eq!(s.current_question().unwrap().id, 1);
    }

    #[test]
    fn answering_every_question_finishes() {
        let mut s = test_session();
        let total = s.content().question_count();
        for _ in 0..total {
            assert!(!s.is_finished());
            assert!(s.submit_answer("x"));
        }
        assert!(s.is_finished());
        assert_eq!(s.answers().len(), total);
        assert!(s.current_question().is_none());
    }

    #[test]
    fn submit_after_finish_does_not_advance() {
        let mut s = test_session();
        for _ in 0..3 {
            s.submit_answer("x");
        }
        assert!(!s.submit_answer("extra"));
        assert_eq!(s.state().current_index(), 3);
        assert_eq!(s.answers().len(), 3);
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let mut s = QuizSession::new(&QuizConfig::default().with_seed(1));
        assert!(!s.submit_answer("x"));
        assert_eq!(s.state().current_index(), 0);
    }

    #[test]
    fn choose_option_uses_the_fragment() {
        let mut s = test_session();
        assert!(s.choose_option(1));
        assert_eq!(s.answers(), ["Rain fragment."]);
        assert!(!s.choose_option(9));
        assert_eq!(s.answers().len(), 1);
    }

    #[test]
    fn last_question_and_progress() {
        let mut s = test_session();
        assert_eq!(s.progress(), Some((1, 3)));
        assert!(!s.is_last_question());
        s.choose_option(0);
        s.choose_option(0);
        assert_eq!(s.progress(), Some((3, 3)));
        assert!(s.is_last_question());
        s.choose_option(0);
        assert_eq!(s.progress(), None);
        assert!(!s.is_last_question());
    }

    #[test]
    fn restart_resets_and_redraws() {
        let mut s = test_session();
        s.choose_option(0);
        s.choose_option(1);
        s.restart();
        assert_eq!(s.state().current_index(), 0);
        assert!(s.answers().is_empty());
        assert_eq!(s.state().draws(), 2);
        assert_eq!(s.phase(), QuizPhase::InProgress);
        assert_eq!(s.content().question_count(), 3);
    }

    #[test]
    fn restart_from_finished() {
        let mut s = test_session();
        for _ in 0..3 {
            s.choose_option(0);
        }
        assert!(s.is_finished());
        s.restart();
        assert!(!s.is_finished());
        assert_eq!(s.state().draws(), 2);
    }

    #[test]
    fn signs_stay_fixed_within_a_run() {
        let mut s = test_session();
        let zodiac = s.zodiac().cloned();
        let ascendant = s.ascendant().cloned();
        s.choose_option(0);
        s.choose_option(1);
        assert_eq!(s.zodiac().cloned(), zodiac);
        assert_eq!(s.ascendant().cloned(), ascendant);
    }

    #[test]
    fn same_seed_same_draws() {
        let a = test_session();
        let b = test_session();
        assert_eq!(a.zodiac(), b.zodiac());
        assert_eq!(a.ascendant(), b.ascendant());
    }

    #[test]
    fn horoscope_is_deterministic_for_the_same_answers() {
        let mut a = test_session();
        let mut b = test_session();
        for idx in [1, 0, 1] {
            a.choose_option(idx);
            b.choose_option(idx);
        }
        assert_eq!(a.selection(), b.selection());
        assert_eq!(a.horoscope(), b.horoscope());
        assert_eq!(a.horoscope(), a.horoscope());
    }

    #[test]
    fn horoscope_contains_every_piece() {
        let mut s = test_session();
        for idx in [0, 1, 0] {
            s.choose_option(idx);
        }
        let text = s.horoscope();
        assert!(text.contains("Sun fragment. Dogs fragment. Early fragment."));
        assert!(text.contains(&s.zodiac().unwrap().horoscope_fragment));
        assert!(text.contains(&s.ascendant().unwrap().horoscope_fragment));
        let selection = s.selection().unwrap();
        assert!(text.starts_with(&s.content().start_blocks()[selection.start_index]));
        assert!(text.ends_with(&s.content().end_blocks()[selection.end_index]));
    }

    #[test]
    fn failed_load_leaves_session_empty() {
        let mut s = QuizSession::new(&QuizConfig::default().with_seed(1));
        assert!(!s.apply_load(Err(ContentError::Disconnected)));
        assert_eq!(s.phase(), QuizPhase::Loading);
        assert!(s.current_question().is_none());
    }

    #[test]
    fn successful_apply_load() {
        let mut s = QuizSession::new(&QuizConfig::default().with_seed(1));
        assert!(s.apply_load(Ok(test_doc())));
        assert_eq!(s.phase(), QuizPhase::InProgress);
    }

    #[test]
    fn reload_resets_progress() {
        let mut s = test_session();
        s.choose_option(0);
        assert_eq!(s.state().draws(), 1);
        s.load(test_doc());
        assert_eq!(s.state().current_index(), 0);
        assert!(s.answers().is_empty());
        assert_eq!(s.state().draws(), 2);
    }

    #[test]
    fn empty_sign_pools_leave_signs_absent() {
        let doc = ContentDocument {
            zodiacs: Vec::new(),
            ascendants: Vec::new(),
            ..test_doc()
        };
        let s = QuizSession::with_content(&QuizConfig::default().with_seed(3), doc);
        assert!(s.zodiac().is_none());
        assert!(s.ascendant().is_none());
    }
}
