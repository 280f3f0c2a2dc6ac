//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SIDEBAR_WIDTH: u16 = 20;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Areas of the navigation buttons, top to bottom
pub fn sidebar_button_areas(area: Rect) -> Vec<Rect> {
    // Brand row, then one button per view
    let mut constraints = vec![Constraint::Length(BUTTON_HEIGHT)];
    constraints.extend(View::NAVIGATION.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    chunks[1..=View::NAVIGATION.len()].to_vec()
}

/// Navigation index of the button under the pointer
pub fn sidebar_item_at(area: Rect, position: Position) -> Option<usize> {
    if !area.contains(position) {
        return None;
    }
    sidebar_button_areas(area)
        .iter()
        .position(|r| r.height > 0 && r.contains(position))
}

/// Draw the brand and the navigation buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let brand = Paragraph::new(vec![
        Line::from(Span::styled(
            " MEPTEQ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Engineering",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(
        brand,
        Rect {
            height: BUTTON_HEIGHT.min(area.height),
            ..area
        },
    );

    for (idx, (view, button)) in View::NAVIGATION
        .iter()
        .zip(sidebar_button_areas(area))
        .enumerate()
    {
        if button.height == 0 {
            continue;
        }
        let is_selected = app.state.current_view == *view;
        render_sidebar_button(frame, button, idx + 1, view.label(), is_selected);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1.min(area.height),
    };

    let mut spans = vec![Span::raw(" ")];

    let hints = if app.application.is_some() {
        format!("Tab:next  {SUBMIT_SHORTCUT}:submit  Esc:close")
    } else {
        get_view_hints(app.state.current_view)
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_width),
        width: quit_width.min(area.width),
        ..status_area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    let nav = "PgUp/PgDn:page";
    match view {
        View::Splash => "Press any key to skip".to_string(),
        View::Home => format!("{nav}  h/l:slide  1-5:jump  Tab:hold  Enter:contact"),
        View::About => format!("{nav}  j/k:scroll  d/u:page"),
        View::Projects => format!("{nav}  h/l:filter  j/k:highlight"),
        View::Services => format!("{nav}  h/l:tab  j/k:scroll"),
        View::Clients => format!("{nav}  h/l:testimonial"),
        View::Careers => format!("{nav}  j/k:position  Enter:apply"),
        View::Contact => {
            format!("Tab:next  {SUBMIT_SHORTCUT}:send  {COPY_SHORTCUT}:copy e-mail  Esc:home")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_layout_reserves_sidebar_and_status_row() {
        let (sidebar, main) = create_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(sidebar, Rect::new(0, 0, 20, 29));
        assert_eq!(main, Rect::new(20, 0, 80, 29));
    }

    #[test]
    fn test_one_button_per_view() {
        let areas = sidebar_button_areas(Rect::new(0, 0, 20, 40));
        assert_eq!(areas.len(), View::NAVIGATION.len());
        assert_eq!(areas[0].y, BUTTON_HEIGHT);
        assert!(areas.iter().all(|r| r.height == BUTTON_HEIGHT));
    }

    #[test]
    fn test_sidebar_hit_testing() {
        let area = Rect::new(0, 0, 20, 40);
        assert_eq!(sidebar_item_at(area, Position::new(5, 0)), None);
        assert_eq!(sidebar_item_at(area, Position::new(5, BUTTON_HEIGHT + 1)), Some(0));
        assert_eq!(
            sidebar_item_at(area, Position::new(5, BUTTON_HEIGHT * 7 + 1)),
            Some(6)
        );
        assert_eq!(sidebar_item_at(area, Position::new(25, BUTTON_HEIGHT + 1)), None);
    }

    #[test]
    fn test_every_view_has_hints() {
        for view in View::NAVIGATION {
            assert!(!get_view_hints(view).is_empty());
        }
    }
}
