//! Home page: hero slides with the footer underneath

use super::components::{indicator_row, render_indicators, wrap_text};
use super::draw_placeholder;
use crate::app::App;
use crate::state::Direction as SlideDirection;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

const HERO_HEIGHT: u16 = 14;
/// Left padding of slide text at rest
const SLIDE_INDENT: u16 = 6;

/// Area of the hero carousel inside the main pane
pub fn hero_area(main: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HERO_HEIGHT), Constraint::Min(0)])
        .split(main)[0]
}

/// Slide text indent while a transition is running
fn slide_indent(direction: SlideDirection, progress: f32) -> u16 {
    let travel = ((1.0 - progress) * f32::from(SLIDE_INDENT)).round() as u16;
    match direction {
        SlideDirection::Forward => SLIDE_INDENT + travel,
        SlideDirection::Backward => SLIDE_INDENT.saturating_sub(travel),
        SlideDirection::Still => SLIDE_INDENT,
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(header) = &app.content.header else {
        draw_placeholder(frame, area, "Home");
        return;
    };

    let hero = hero_area(area);
    let rest = Rect {
        y: hero.bottom(),
        height: area.height.saturating_sub(hero.height),
        ..area
    };

    let title = if app.hero.is_paused() {
        format!(" {} (held) ", header.title)
    } else {
        format!(" {} ", header.title)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.state.hero_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(hero);
    frame.render_widget(block, hero);

    if let Some(slide) = app.content.slides().get(app.hero.current()) {
        let progress = app.hero.transition_progress(Instant::now());
        let indent = slide_indent(app.hero.direction(), progress);
        let pad = " ".repeat(indent as usize);
        let width = inner.width.saturating_sub(indent * 2).max(10) as usize;

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{pad}{}", slide.title),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{pad}{}", slide.subtitle),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(""),
        ];
        lines.extend(wrap_text(&slide.description, width).into_iter().map(|l| {
            Line::from(Span::styled(
                format!("{pad}{l}"),
                Style::default().fg(Color::Gray),
            ))
        }));
        lines.push(Line::from(Span::styled(
            format!("{pad}[{}]", slide.url),
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(Paragraph::new(lines), inner);
    }

    render_indicators(
        frame,
        indicator_row(hero),
        app.hero.len(),
        app.hero.current(),
    );

    draw_intro(frame, rest, app, &header.paragraph);
}

/// Intro paragraph and footer below the hero
fn draw_intro(frame: &mut Frame, area: Rect, app: &App, paragraph: &str) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(paragraph, Style::default().fg(Color::Gray))),
        Line::from(""),
    ];
    match &app.content.footer {
        Some(footer) => {
            lines.push(Line::from(Span::styled(
                footer.about.as_str(),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(Span::styled(
                footer.links.join("  ·  "),
                Style::default().fg(Color::Cyan),
            )));
            lines.push(Line::from(Span::styled(
                footer.copyright.as_str(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        None => lines.push(Line::from(crate::content::LOADING_PLACEHOLDER)),
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((app.state.scroll_offset as u16, 0)),
        area,
    );
}
