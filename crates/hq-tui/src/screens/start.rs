//! Start screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::TuiApp;

/// Draw the start screen.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let block = Block::default()
        .title(" Horoscope Quiz ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "\u{2728} What do the stars say about you? \u{2728}",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from("Answer a handful of questions and receive your personal horoscope."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to begin",
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("content: {}", app.source),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
