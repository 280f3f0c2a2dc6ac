//! Form domain layer
//!
//! Field models, the pure validator and the two site forms.

mod field;
mod form_state;
mod validation;

pub use field::{FieldName, FormField};
pub use form_state::{ApplicationForm, ContactForm, Form, SUBMIT_BUTTON};
pub use validation::{validate, FieldError, FieldErrors, ValidationRules};
