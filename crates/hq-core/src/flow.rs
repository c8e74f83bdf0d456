//! Screen flow: start, wizard, and result screens.
//!
//! ```text
//! Start --start()--> Wizard --(quiz finished)--> Result --restart()--> Start
//! ```
//!
//! Entering the wizard asks the owner to load content. The wizard switches
//! to the result screen exactly once, the first time [`ScreenFlow::sync`]
//! sees a finished session. Unknown paths fall back to the start screen.

use crate::session::QuizSession;

/// One of the three screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Landing screen with the start button.
    #[default]
    Start,
    /// Question-by-question wizard.
    Wizard,
    /// Composed horoscope.
    Result,
}

impl Screen {
    /// All screens in flow order.
    pub const ALL: [Screen; 3] = [Screen::Start, Screen::Wizard, Screen::Result];

    /// The address of this screen.
    pub fn path(self) -> &'static str {
        match self {
            Screen::Start => "/",
            Screen::Wizard => "/wizard",
            Screen::Result => "/result",
        }
    }

    /// Resolve an address. Anything unrecognized resolves to the start screen.
    pub fn from_path(path: &str) -> Screen {
        match path.trim().trim_end_matches('/') {
            "/wizard" | "wizard" => Screen::Wizard,
            "/result" | "result" => Screen::Result,
            _ => Screen::Start,
        }
    }

    /// Human-readable name.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Start => "Start",
            Screen::Wizard => "Questions",
            Screen::Result => "Your Horoscope",
        }
    }
}

/// Side effect the owner of the flow must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    /// Trigger the content loader.
    Load,
    /// Nothing to do.
    None,
}

/// Tracks the active screen.
#[derive(Debug, Clone, Default)]
pub struct ScreenFlow {
    current: Screen,
}

impl ScreenFlow {
    /// Begin on the start screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active screen.
    pub fn current(&self) -> Screen {
        self.current
    }

    /// The address of the active screen.
    pub fn path(&self) -> &'static str {
        self.current.path()
    }

    /// User-initiated start: go to the wizard and request a content load.
    pub fn start(&mut self) -> FlowAction {
        if self.current != Screen::Start {
            return FlowAction::None;
        }
        self.current = Screen::Wizard;
        tracing::debug!(path = self.path(), "navigated");
        FlowAction::Load
    }

    /// Follow the session: leave the wizard once the quiz is finished.
    ///
    /// Returns `true` on the call that performs the switch.
    pub fn sync(&mut self, session: &QuizSession) -> bool {
        if self.current == Screen::Wizard && session.is_finished() {
            self.current = Screen::Result;
            tracing::debug!(path = self.path(), "navigated");
            true
        } else {
            false
        }
    }

    /// User-initiated restart: reset the session and go back to the start.
    pub fn restart(&mut self, session: &mut QuizSession) {
        session.restart();
        self.current = Screen::Start;
        tracing::debug!(path = self.path(), "navigated");
    }

    /// Programmatic navigation by address.
    ///
    /// Entering the wizard this way also requests a content load.
    pub fn navigate(&mut self, path: &str) -> FlowAction {
        self.current = Screen::from_path(path);
        tracing::debug!(requested = path, path = self.path(), "navigated");
        if self.current == Screen::Wizard {
            FlowAction::Load
        } else {
            FlowAction::None
        }
    }
}
