//! Top-level application state: the quiz session, screen flow, and UI cursor.

use hq_core::{
    ContentSource, FlowAction, PendingLoad, QuizConfig, QuizSession, Screen, ScreenFlow,
    spawn_load,
};

/// Main application state for the TUI.
pub struct TuiApp {
    /// The quiz session (content, progress, signs).
    pub session: QuizSession,
    /// Which screen is showing.
    pub flow: ScreenFlow,
    /// Where content is loaded from.
    pub source: ContentSource,
    /// Content fetch in flight, if any.
    pub pending: Option<PendingLoad>,
    /// Whether the most recent fetch failed.
    pub load_failed: bool,
    /// Highlighted option on the wizard screen.
    pub cursor: usize,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl TuiApp {
    /// Create a new app on the start screen.
    pub fn new(config: QuizConfig) -> Self {
        Self {
            session: QuizSession::new(&config),
            flow: ScreenFlow::new(),
            source: config.source,
            pending: None,
            load_failed: false,
            cursor: 0,
            show_help: false,
            should_quit: false,
        }
    }

    /// The active screen.
    pub fn screen(&self) -> Screen {
        self.flow.current()
    }

    /// Whether a content fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Start button: enter the wizard and fetch content.
    pub fn start(&mut self) {
        let action = self.flow.start();
        self.perform(action);
    }

    /// Jump to a screen by address.
    pub fn open(&mut self, path: &str) {
        let action = self.flow.navigate(path);
        self.perform(action);
    }

    fn perform(&mut self, action: FlowAction) {
        if action == FlowAction::Load {
            self.cursor = 0;
            self.load_failed = false;
            tracing::info!(source = %self.source, "loading content");
            // Replacing an in-flight load discards its result.
            self.pending = Some(spawn_load(self.source.clone()));
        }
    }

    /// Pick up a finished content fetch, if any. Returns whether state changed.
    pub fn poll_load(&mut self) -> bool {
        let Some(result) = self.pending.as_ref().and_then(PendingLoad::try_take) else {
            return false;
        };
        if let Some(pending) = self.pending.take() {
            tracing::info!(
                source = %pending.source(),
                ok = result.is_ok(),
                "content load finished"
            );
        }
        self.load_failed = !self.session.apply_load(result);
        self.cursor = 0;
        self.sync();
        true
    }

    /// Answer the current question with option `index`.
    ///
    /// Ignored off the wizard screen and while content is loading.
    pub fn choose(&mut self, index: usize) {
        if self.screen() != Screen::Wizard || self.is_loading() {
            return;
        }
        if self.session.choose_option(index) {
            self.cursor = 0;
            self.sync();
        }
    }

    /// Answer with the highlighted option.
    pub fn choose_highlighted(&mut self) {
        self.choose(self.cursor);
    }

    /// Move the option highlight by `delta`, clamped to the option list.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.is_loading() {
            return;
        }
        let count = self
            .session
            .current_question()
            .map(|q| q.options.len())
            .unwrap_or(0);
        if count == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(count - 1);
    }

    /// Restart button: reset the quiz and go back to the start screen.
    pub fn restart(&mut self) {
        self.flow.restart(&mut self.session);
        self.cursor = 0;
    }

    fn sync(&mut self) {
        self.flow.sync(&self.session);
    }
}
