//! Question wizard screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap};

use crate::app::TuiApp;

/// Draw the question wizard.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let block = Block::default()
        .title(" Questions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.is_loading() {
        draw_placeholder(frame, app, inner);
        return;
    }
    let (Some(question), Some((position, total))) =
        (app.session.current_question(), app.session.progress())
    else {
        draw_placeholder(frame, app, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // progress
            Constraint::Length(1),
            Constraint::Length(3), // question text
            Constraint::Min(0),    // options
        ])
        .split(inner);

    let label = if app.session.is_last_question() {
        format!("Question {position} of {total} (last one)")
    } else {
        format!("Question {position} of {total}")
    };
    let ratio = (position - 1) as f64 / total as f64;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, chunks[0]);

    let text = Paragraph::new(Span::styled(
        question.text.as_str(),
        Style::default().fg(Color::Yellow).bold(),
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(text, chunks[2]);

    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| ListItem::new(format!(" {}. {}", i + 1, option.label)))
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow).bold())
        .highlight_symbol("\u{25b6}");
    let mut state = ListState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(list, chunks[3], &mut state);
}

/// Shown while content is loading, or when there is nothing to ask.
fn draw_placeholder(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let (text, color) = if app.is_loading() {
        ("Consulting the stars...", Color::Cyan)
    } else if app.load_failed {
        ("The stars are silent. No questions could be loaded.", Color::Red)
    } else {
        ("Nothing to show.", Color::DarkGray)
    };
    let paragraph = Paragraph::new(Span::styled(text, Style::default().fg(color)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
