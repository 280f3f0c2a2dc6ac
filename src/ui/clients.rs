//! Client testimonials carousel

use super::components::{indicator_row, render_indicators, wrap_text};
use super::draw_placeholder;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn chunks(main: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Heading
            Constraint::Length(10), // Carousel
            Constraint::Min(0),
        ])
        .split(main);
    [chunks[0], chunks[1], chunks[2]]
}

/// Area of the testimonials carousel inside the main pane
pub fn carousel_area(main: Rect) -> Rect {
    chunks(main)[1]
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if app.content.testimonials.is_none() {
        draw_placeholder(frame, area, "What Our Clients Say");
        return;
    }
    let [heading, carousel, _] = chunks(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "What Our Clients Say",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        Rect {
            y: heading.y + 1,
            height: 1.min(heading.height),
            ..heading
        },
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.clients.is_paused() {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(carousel);
    frame.render_widget(block, carousel);

    let testimonials = app.content.testimonials();
    let Some(testimonial) = testimonials.get(app.clients.current()) else {
        return;
    };

    let width = inner.width.saturating_sub(4).max(10) as usize;
    let mut lines: Vec<Line> = wrap_text(&format!("\"{}\"", testimonial.text), width)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().add_modifier(Modifier::ITALIC))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("- {}", testimonial.name),
        Style::default().fg(Color::Cyan),
    )));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );

    render_indicators(
        frame,
        indicator_row(carousel),
        app.clients.len(),
        app.clients.current(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_carousel_sits_under_heading() {
        assert_eq!(
            carousel_area(Rect::new(20, 0, 100, 39)),
            Rect::new(20, 3, 100, 10)
        );
    }
}
