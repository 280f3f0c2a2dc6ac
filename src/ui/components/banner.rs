//! Submission status banner

use crate::state::SubmissionStatus;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

fn accent(status: SubmissionStatus) -> Color {
    match status {
        SubmissionStatus::Idle => Color::Reset,
        SubmissionStatus::Submitting => Color::Cyan,
        SubmissionStatus::Success => Color::Green,
        SubmissionStatus::Error => Color::Red,
        SubmissionStatus::ValidationError => Color::Yellow,
    }
}

/// One-line banner under a form; empty while idle
pub fn render_status_banner(
    frame: &mut Frame,
    area: Rect,
    status: SubmissionStatus,
    message: Option<&str>,
) {
    let Some(message) = message else {
        return;
    };
    let style = Style::default()
        .fg(accent(status))
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(2);
    if status == SubmissionStatus::Submitting {
        let glyph = SPINNER[frame.count() % SPINNER.len()];
        spans.push(Span::styled(format!("{glyph} "), style));
    }
    spans.push(Span::styled(message, style));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }),
        area,
    );
}
