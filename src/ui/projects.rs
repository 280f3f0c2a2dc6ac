//! Project gallery with category filter

use super::draw_placeholder;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(items) = &app.content.gallery else {
        draw_placeholder(frame, area, "Our Projects");
        return;
    };
    let gallery = &app.state.gallery;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter tabs
            Constraint::Min(0),    // Items
            Constraint::Length(3), // Highlighted item
        ])
        .split(area);

    let titles: Vec<String> = gallery
        .categories()
        .iter()
        .map(|c| c.to_uppercase())
        .collect();
    let selected = gallery
        .categories()
        .iter()
        .position(|c| c == gallery.active_category())
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .title(" Our Projects ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, chunks[0]);

    let visible = gallery.visible(items);
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new("No projects found")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );
        return;
    }

    let list_items: Vec<ListItem> = visible
        .iter()
        .map(|item| {
            let category = item.category.as_deref().unwrap_or("-");
            ListItem::new(Line::from(vec![
                Span::raw(item.title.as_str()),
                Span::styled(format!("  ({category})"), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(list_items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    let mut state = ListState::default();
    state.select(gallery.hovered);
    frame.render_stateful_widget(list, chunks[1], &mut state);

    // Overlay of the highlighted project
    if let Some(item) = gallery.hovered.and_then(|i| visible.get(i)) {
        let overlay = Paragraph::new(Line::from(vec![
            Span::styled(
                item.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", item.large_image),
                Style::default().fg(Color::DarkGray),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(overlay, chunks[2]);
    }
}
