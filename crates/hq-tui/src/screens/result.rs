//! Result screen with the composed horoscope.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::TuiApp;

/// Draw the horoscope.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let block = Block::default()
        .title(" Your Horoscope ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !app.session.is_finished() {
        let paragraph = Paragraph::new(Span::styled(
            "Nothing to show yet. Answer the questions first.",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
        return;
    }

    let sign_name = |sign: Option<&hq_core::Sign>| {
        sign.map(|s| s.name.clone())
            .unwrap_or_else(|| "unknown".to_string())
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Zodiac: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                sign_name(app.session.zodiac()),
                Style::default().fg(Color::Yellow).bold(),
            ),
            Span::styled("   Ascendant: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                sign_name(app.session.ascendant()),
                Style::default().fg(Color::Yellow).bold(),
            ),
        ]),
        Line::from(""),
    ];
    lines.extend(
        app.session
            .horoscope()
            .lines()
            .map(|l| Line::from(l.to_string())),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press r to start over",
        Style::default().fg(Color::Green),
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
