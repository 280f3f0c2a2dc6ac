//! Slide indicator dots shared by the carousels

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Columns taken by one dot
const DOT_WIDTH: u16 = 3;

/// Row just above the bottom border of a bordered carousel
pub fn indicator_row(carousel: Rect) -> Rect {
    Rect {
        x: carousel.x,
        y: carousel.y + carousel.height.saturating_sub(2),
        width: carousel.width,
        height: 1.min(carousel.height),
    }
}

/// Click targets of each dot, centered in the row
pub fn indicator_areas(row: Rect, count: usize) -> Vec<Rect> {
    let total = DOT_WIDTH.saturating_mul(count as u16);
    let start = row.x + row.width.saturating_sub(total) / 2;
    (0..count as u16)
        .map(|i| Rect {
            x: start + i * DOT_WIDTH,
            y: row.y,
            width: DOT_WIDTH,
            height: row.height,
        })
        .filter(|r| r.right() <= row.right())
        .collect()
}

/// Index of the dot under the pointer
pub fn indicator_at(row: Rect, count: usize, position: Position) -> Option<usize> {
    indicator_areas(row, count)
        .iter()
        .position(|r| r.contains(position))
}

pub fn render_indicators(frame: &mut Frame, row: Rect, count: usize, current: usize) {
    let Some(first) = indicator_areas(row, count).first().copied() else {
        return;
    };
    let spans: Vec<Span> = (0..count)
        .map(|i| {
            if i == current {
                Span::styled(
                    " ● ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(" ○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    let area = Rect {
        x: first.x,
        width: row.right().saturating_sub(first.x),
        ..row
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
