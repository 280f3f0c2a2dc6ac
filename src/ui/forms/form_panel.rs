//! Form body shared by the contact page and the application modal

use super::field_renderer::{draw_field, field_height};
use crate::state::{Form, SubmissionController, SubmissionStatus, SUBMIT_BUTTON};
use crate::ui::components::{render_action_button, render_status_banner, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

/// Labels of the two buttons under a form
pub struct FormButtons<'a> {
    pub secondary: &'a str,
    pub submit: &'a str,
}

/// Draw the fields, the status banner and the buttons row
pub fn draw_form<F: Form>(
    frame: &mut Frame,
    area: Rect,
    controller: &SubmissionController<F>,
    buttons: FormButtons,
) {
    let form = controller.form();
    let input_count = form.field_count() - 1;

    let mut constraints: Vec<Constraint> = (0..input_count)
        .filter_map(|i| form.get_field(i))
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Length(2)); // Banner
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for index in 0..input_count {
        if let Some(field) = form.get_field(index) {
            let error = controller.errors().get(&field.name);
            draw_field(
                frame,
                chunks[index],
                field,
                form.active_field() == index,
                error,
            );
        }
    }

    render_status_banner(
        frame,
        chunks[input_count],
        controller.status(),
        controller.status_message(),
    );

    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Length(2),
            Constraint::Length(24),
            Constraint::Min(0),
        ])
        .split(chunks[input_count + 1]);

    let on_buttons = form.is_buttons_row_active();
    let submitting = controller.status() == SubmissionStatus::Submitting;
    render_action_button(
        frame,
        button_chunks[0],
        buttons.secondary,
        on_buttons && form.selected_button() != SUBMIT_BUTTON,
        !submitting,
        Color::Gray,
    );
    let submit_label = if submitting { "Sending..." } else { buttons.submit };
    render_action_button(
        frame,
        button_chunks[2],
        submit_label,
        on_buttons && form.selected_button() == SUBMIT_BUTTON,
        controller.can_submit(),
        Color::Green,
    );
}
