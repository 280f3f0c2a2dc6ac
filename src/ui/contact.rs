//! Contact page: enquiry form and office details

use super::forms::{draw_form, FormButtons};
use crate::app::App;
use crate::content::LOADING_PLACEHOLDER;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form
            Constraint::Length(36), // Contact info
        ])
        .split(area);

    let block = Block::default()
        .title(" Get In Touch ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    draw_form(
        frame,
        inner,
        &app.contact,
        FormButtons {
            secondary: "Clear",
            submit: "Send Message",
        },
    );

    draw_info(frame, chunks[1], app);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App) {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::Gray);

    let lines = match &app.content.contact {
        Some(contact) => {
            let mut lines = Vec::new();
            for office in &contact.offices {
                lines.push(Line::from(Span::styled(office.title.as_str(), heading)));
                lines.push(Line::from(Span::styled(office.address.as_str(), muted)));
                lines.push(Line::from(""));
            }
            lines.push(Line::from(vec![
                Span::styled("Phone  ", heading),
                Span::styled(contact.phone.as_str(), muted),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Email  ", heading),
                Span::styled(contact.email.as_str(), Style::default().fg(Color::Cyan)),
            ]));
            if !contact.socials.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    contact.socials.join(" | "),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        }
        None => vec![Line::from(LOADING_PLACEHOLDER)],
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(" Contact Info ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
        area,
    );
}
