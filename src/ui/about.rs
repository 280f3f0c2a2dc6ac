//! About page

use super::draw_placeholder;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(about) = &app.content.about else {
        draw_placeholder(frame, area, "About Us");
        return;
    };

    let block = Block::default()
        .title(" About Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(8)])
        .margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(about.paragraph.as_str())
            .wrap(Wrap { trim: true })
            .scroll((app.state.scroll_offset as u16, 0)),
        chunks[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    for (column, items) in columns.iter().zip([&about.why, &about.why2]) {
        let mut lines = vec![Line::from(Span::styled(
            "Why Choose Us?",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        lines.extend(items.iter().map(|item| {
            Line::from(vec![
                Span::styled(" ✓ ", Style::default().fg(Color::Green)),
                Span::raw(item.as_str()),
            ])
        }));
        frame.render_widget(Paragraph::new(lines), *column);
    }
}
