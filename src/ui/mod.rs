//! UI module for rendering the TUI

mod about;
pub mod careers;
pub mod clients;
pub mod components;
mod contact;
mod forms;
pub mod home;
pub mod layout;
mod projects;
mod services;
mod splash;

use crate::app::App;
use crate::content::LOADING_PLACEHOLDER;
use crate::state::View;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let (View::Splash, Some(splash)) = (app.state.current_view, &app.splash_state) {
        splash::draw(frame, area, splash);
        return;
    }

    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_view {
        View::Splash | View::Home => home::draw(frame, main_area, app),
        View::About => about::draw(frame, main_area, app),
        View::Projects => projects::draw(frame, main_area, app),
        View::Services => services::draw(frame, main_area, app),
        View::Clients => clients::draw(frame, main_area, app),
        View::Careers => careers::draw(frame, main_area, app),
        View::Contact => contact::draw(frame, main_area, app),
    }

    if let Some(modal) = &app.application {
        careers::draw_application_modal(frame, area, modal);
    }

    layout::draw_status_bar(frame, app);

    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

/// Section whose content has not been loaded
fn draw_placeholder(frame: &mut Frame, area: Rect, title: &str) {
    let placeholder = Paragraph::new(LOADING_PLACEHOLDER)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(placeholder, area);
}
