//! Reusable UI components

mod banner;
mod button;
mod dialog;
mod indicators;

pub use banner::render_status_banner;
pub use button::{render_action_button, render_sidebar_button, BUTTON_HEIGHT};
pub use dialog::{centered_rect, render_error_dialog, wrap_text};
pub use indicators::{indicator_areas, indicator_at, indicator_row, render_indicators};
