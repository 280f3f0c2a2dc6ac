//! Services page with one tab per discipline

use super::draw_placeholder;
use crate::app::App;
use crate::content::GalleryItem;
use crate::state::ServiceTab;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

fn tab_items(app: &App, tab: ServiceTab) -> Option<&[GalleryItem]> {
    match tab {
        ServiceTab::Hvac => app.content.hvac.as_deref(),
        ServiceTab::Plumbing => app.content.plumber.as_deref(),
        ServiceTab::Electrical => app.content.elv.as_deref(),
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let active = app.state.service_tab;
    let selected = ServiceTab::ALL
        .iter()
        .position(|t| *t == active)
        .unwrap_or(0);
    let tabs = Tabs::new(ServiceTab::ALL.iter().map(|t| t.label()))
        .select(selected)
        .block(
            Block::default()
                .title(" Services ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    let Some(items) = tab_items(app, active) else {
        draw_placeholder(frame, chunks[1], active.label());
        return;
    };

    let lines: Vec<Line> = items
        .iter()
        .flat_map(|item| {
            [
                Line::from(vec![
                    Span::styled(" ■ ", Style::default().fg(Color::Cyan)),
                    Span::styled(
                        item.title.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("   {}", item.small_image),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .scroll((app.state.scroll_offset as u16, 0)),
        chunks[1],
    );
}
