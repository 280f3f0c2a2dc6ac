//! Careers page and the job application modal

use super::components::centered_rect;
use super::draw_placeholder;
use super::forms::{draw_form, FormButtons};
use crate::app::App;
use crate::state::ApplicationModal;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const MODAL_WIDTH: u16 = 76;
const MODAL_HEIGHT: u16 = 34;

/// Area of the application modal on the whole screen
pub fn modal_area(screen: Rect) -> Rect {
    centered_rect(
        screen,
        MODAL_WIDTH.min(screen.width.saturating_sub(4)),
        MODAL_HEIGHT.min(screen.height.saturating_sub(2)),
    )
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(hire) = &app.content.hire else {
        draw_placeholder(frame, area, "Careers");
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Headline and intro
            Constraint::Min(8),    // Positions
            Constraint::Length(3), // Stats
            Constraint::Length(8), // Benefits
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            hire.headline.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hire.intro.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(intro, chunks[0]);

    draw_positions(frame, chunks[1], app);

    let stats: Vec<Span> = hire
        .stats
        .iter()
        .flat_map(|s| {
            [
                Span::styled(
                    format!(" {} ", s.number),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{}   ", s.label), Style::default().fg(Color::Gray)),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(stats)).block(Block::default().borders(Borders::TOP)),
        chunks[2],
    );

    let mut benefits: Vec<Line> = hire
        .benefits
        .iter()
        .map(|b| {
            Line::from(vec![
                Span::styled(
                    format!(" {}: ", b.title),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(b.description.as_str(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    if !hire.contact_email.is_empty() {
        benefits.push(Line::from(Span::styled(
            format!(" Questions? Write to {}", hire.contact_email),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(
        Paragraph::new(benefits)
            .block(Block::default().title(" Why Join Us ").borders(Borders::TOP))
            .scroll((app.state.scroll_offset as u16, 0)),
        chunks[3],
    );
}

fn draw_positions(frame: &mut Frame, area: Rect, app: &App) {
    let positions = app.content.positions();
    let items: Vec<ListItem> = positions
        .iter()
        .map(|p| {
            let mut lines = vec![
                Line::from(Span::styled(
                    p.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("  {}", p.description),
                    Style::default().fg(Color::Gray),
                )),
            ];
            if !p.requirements.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", p.requirements.join(" · ")),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Open Positions ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");
    let mut state = ListState::default();
    if !positions.is_empty() {
        state.select(Some(app.state.selected_position.min(positions.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the application form over the current page
pub fn draw_application_modal(frame: &mut Frame, screen: Rect, modal: &ApplicationModal) {
    let area = modal_area(screen);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Apply for {} ", modal.position()))
        .title_bottom(Line::from(" Esc to close ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    draw_form(
        frame,
        inner,
        &modal.controller,
        FormButtons {
            secondary: "Cancel",
            submit: "Submit Application",
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_modal_is_centered() {
        assert_eq!(
            modal_area(Rect::new(0, 0, 120, 40)),
            Rect::new(22, 3, MODAL_WIDTH, MODAL_HEIGHT)
        );
    }

    #[test]
    fn test_modal_shrinks_on_small_screens() {
        let area = modal_area(Rect::new(0, 0, 60, 20));
        assert_eq!(area, Rect::new(2, 1, 56, 18));
    }
}
