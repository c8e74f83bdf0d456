//! Screen rendering and the screen bar.

pub mod result;
pub mod start;
pub mod wizard;

use hq_core::Screen;
use ratatui::prelude::*;

use crate::app::TuiApp;

/// Draw the active screen's content.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    match app.screen() {
        Screen::Start => start::draw(frame, app, area),
        Screen::Wizard => wizard::draw(frame, app, area),
        Screen::Result => result::draw(frame, app, area),
    }
}

/// Context-sensitive status bar text for the active screen.
pub fn status_hint(app: &TuiApp) -> &'static str {
    match app.screen() {
        Screen::Start => "Enter:begin  ?:help  q:quit",
        Screen::Wizard if app.is_loading() => "loading...  q:quit",
        Screen::Wizard => "j/k:move  Enter:answer  1-9:pick  ?:help  q:quit",
        Screen::Result => "r:restart  ?:help  q:quit",
    }
}

/// Draw the screen bar with the active screen highlighted.
pub fn draw_screen_bar(frame: &mut Frame, active: Screen, area: Rect) {
    let mut spans = Vec::new();

    for (i, screen) in Screen::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
        }

        let style = if *screen == active {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(screen.title(), style));
    }

    spans.push(Span::styled(
        format!("   {}", active.path()),
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = ratatui::widgets::Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
