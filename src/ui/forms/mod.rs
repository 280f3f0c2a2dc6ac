//! Form rendering module
//!
//! - `field_renderer`: single field boxes with inline errors
//! - `form_panel`: fields, status banner and buttons row of a whole form

mod field_renderer;
mod form_panel;

pub use form_panel::{draw_form, FormButtons};
