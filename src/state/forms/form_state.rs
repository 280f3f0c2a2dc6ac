//! Form models for the contact page and the job application modal

use super::field::{FieldName, FormField};
use super::validation::FieldValues;
use crate::relay::TemplateParams;
use chrono::NaiveDateTime;

/// Buttons shown under every form
pub const BUTTON_COUNT: usize = 2;
/// Index of the submit button on the buttons row
pub const SUBMIT_BUTTON: usize = 1;

/// Human-readable submission date, e.g. "Sunday, October 18, 2026"
pub fn format_date(at: &NaiveDateTime) -> String {
    at.format("%A, %B %-d, %Y").to_string()
}

/// Human-readable submission time, e.g. "02:30:15 PM"
pub fn format_time(at: &NaiveDateTime) -> String {
    at.format("%I:%M:%S %p").to_string()
}

/// Trait for common form operations
///
/// Field indices run over the input fields followed by one buttons row.
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField>;

    /// Field being edited, `None` on the buttons row
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field();
        self.get_field_mut(index)
    }

    fn field_by_name_mut(&mut self, name: FieldName) -> Option<&mut FormField> {
        let count = self.field_count();
        let index = (0..count).find(|&i| self.get_field(i).is_some_and(|f| f.name == name))?;
        self.get_field_mut(index)
    }

    fn is_buttons_row_active(&self) -> bool {
        self.active_field() == self.field_count() - 1
    }

    /// Button highlighted on the buttons row
    fn selected_button(&self) -> usize;

    /// Current values keyed by field name
    fn values(&self) -> FieldValues;

    /// Reset every input to its initial value
    fn clear(&mut self);

    /// Parameters handed to the e-mail template
    fn template_params(&self, submitted_at: &NaiveDateTime) -> TemplateParams;
}

fn collect_values(fields: &[&FormField]) -> FieldValues {
    fields
        .iter()
        .map(|f| (f.name, f.as_text().to_string()))
        .collect()
}

fn param(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.trim().to_string())
}

fn cycle_button(selected: usize, forward: bool) -> usize {
    if forward {
        (selected + 1) % BUTTON_COUNT
    } else if selected == 0 {
        BUTTON_COUNT - 1
    } else {
        selected - 1
    }
}

/// General enquiry form on the contact page
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Clear, 1=Send)
    pub selected_button: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text(FieldName::Name, "Full Name", true),
            email: FormField::text(FieldName::Email, "Email", true),
            phone: FormField::text(FieldName::Phone, "Phone", false),
            subject: FormField::text(FieldName::Subject, "Subject", false),
            message: FormField::multiline(FieldName::Message, "Message", true),
            active_field_index: 0,
            selected_button: SUBMIT_BUTTON,
        }
    }

    pub fn next_button(&mut self) {
        self.selected_button = cycle_button(self.selected_button, true);
    }

    pub fn prev_button(&mut self) {
        self.selected_button = cycle_button(self.selected_button, false);
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        6 // name, email, phone, subject, message, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(5);
    }
    fn selected_button(&self) -> usize {
        self.selected_button
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.subject),
            4 => Some(&self.message),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.subject),
            4 => Some(&mut self.message),
            _ => None,
        }
    }
    fn values(&self) -> FieldValues {
        collect_values(&[
            &self.name,
            &self.email,
            &self.phone,
            &self.subject,
            &self.message,
        ])
    }
    fn clear(&mut self) {
        *self = Self::new();
    }
    fn template_params(&self, submitted_at: &NaiveDateTime) -> TemplateParams {
        TemplateParams::from([
            param("from_name", self.name.as_text()),
            param("from_email", self.email.as_text()),
            param("phone", self.phone.as_text()),
            param("subject", self.subject.as_text()),
            param("message", self.message.as_text()),
            ("submitted_date".to_string(), format_date(submitted_at)),
            ("submitted_time".to_string(), format_time(submitted_at)),
        ])
    }
}

/// Job application for one open position
#[derive(Debug, Clone)]
pub struct ApplicationForm {
    /// Role chosen on the careers page before the modal opened
    pub position: String,
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub experience: FormField,
    pub motivation: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Cancel, 1=Submit)
    pub selected_button: usize,
}

impl ApplicationForm {
    pub fn new(position: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            name: FormField::text(FieldName::Name, "Full Name", true),
            email: FormField::text(FieldName::Email, "Email", true),
            phone: FormField::text(FieldName::Phone, "Phone", true),
            experience: FormField::number(FieldName::Experience, "Years of Experience", true),
            motivation: FormField::multiline(
                FieldName::Motivation,
                "Why do you want to join us?",
                true,
            ),
            active_field_index: 0,
            selected_button: SUBMIT_BUTTON,
        }
    }

    pub fn next_button(&mut self) {
        self.selected_button = cycle_button(self.selected_button, true);
    }

    pub fn prev_button(&mut self) {
        self.selected_button = cycle_button(self.selected_button, false);
    }
}

impl Form for ApplicationForm {
    fn field_count(&self) -> usize {
        6 // name, email, phone, experience, motivation, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(5);
    }
    fn selected_button(&self) -> usize {
        self.selected_button
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.experience),
            4 => Some(&self.motivation),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.experience),
            4 => Some(&mut self.motivation),
            _ => None,
        }
    }
    fn values(&self) -> FieldValues {
        let mut values = collect_values(&[
            &self.name,
            &self.email,
            &self.phone,
            &self.experience,
            &self.motivation,
        ]);
        values.insert(FieldName::Position, self.position.clone());
        values
    }
    fn clear(&mut self) {
        let position = std::mem::take(&mut self.position);
        *self = Self::new(position);
    }
    fn template_params(&self, submitted_at: &NaiveDateTime) -> TemplateParams {
        TemplateParams::from([
            param("from_name", self.name.as_text()),
            param("from_email", self.email.as_text()),
            param("phone", self.phone.as_text()),
            param("position", &self.position),
            param("experience", self.experience.as_text()),
            param("motivation", self.motivation.as_text()),
            ("application_date".to_string(), format_date(submitted_at)),
            ("application_time".to_string(), format_time(submitted_at)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn submitted_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(14, 30, 15)
            .unwrap()
    }

    fn type_into(field: &mut FormField, text: &str) {
        for c in text.chars() {
            field.push_char(c);
        }
    }

    #[test]
    fn test_date_and_time_formatting() {
        assert_eq!(format_date(&submitted_at()), "Sunday, October 18, 2026");
        assert_eq!(format_time(&submitted_at()), "02:30:15 PM");
    }

    mod contact_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = ContactForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.selected_button, SUBMIT_BUTTON);
            assert!(form.values().values().all(String::is_empty));
        }

        #[test]
        fn test_next_field_cycles_through_form() {
            let mut form = ContactForm::new();
            for expected in [1, 2, 3, 4, 5, 0] {
                form.next_field();
                assert_eq!(form.active_field(), expected);
            }
        }

        #[test]
        fn test_prev_field_wraps_to_buttons_row() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert!(form.is_buttons_row_active());
            assert!(form.get_active_field_mut().is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 5);
        }

        #[test]
        fn test_buttons_wrap() {
            let mut form = ContactForm::new();
            form.next_button();
            assert_eq!(form.selected_button, 0);
            form.prev_button();
            assert_eq!(form.selected_button, 1);
        }

        #[test]
        fn test_field_by_name() {
            let mut form = ContactForm::new();
            form.field_by_name_mut(FieldName::Subject)
                .unwrap()
                .set_text("Chiller plant");
            assert_eq!(form.subject.as_text(), "Chiller plant");
            assert!(form.field_by_name_mut(FieldName::Motivation).is_none());
        }

        #[test]
        fn test_template_params() {
            let mut form = ContactForm::new();
            type_into(&mut form.name, " Jane Doe ");
            type_into(&mut form.email, "jane@x.com");
            type_into(&mut form.message, "hello");

            let params = form.template_params(&submitted_at());
            assert_eq!(params["from_name"], "Jane Doe");
            assert_eq!(params["from_email"], "jane@x.com");
            assert_eq!(params["phone"], "");
            assert_eq!(params["message"], "hello");
            assert_eq!(params["submitted_date"], "Sunday, October 18, 2026");
            assert_eq!(params["submitted_time"], "02:30:15 PM");
        }

        #[test]
        fn test_clear_resets_everything() {
            let mut form = ContactForm::new();
            type_into(&mut form.message, "hello");
            form.set_active_field(3);
            form.clear();
            assert_eq!(form.message.as_text(), "");
            assert_eq!(form.active_field(), 0);
        }
    }

    mod application_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_values_include_position() {
            let form = ApplicationForm::new("Electrical Draftsmen");
            assert_eq!(
                form.values().get(&FieldName::Position).map(String::as_str),
                Some("Electrical Draftsmen")
            );
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = ApplicationForm::new("Mechanical Draftsmen");
            assert_eq!(form.get_field(0).unwrap().name, FieldName::Name);
            assert_eq!(form.get_field(3).unwrap().name, FieldName::Experience);
            assert_eq!(form.get_field(4).unwrap().name, FieldName::Motivation);
            assert!(form.get_field(5).is_none());
        }

        #[test]
        fn test_template_params_carry_all_values() {
            let mut form = ApplicationForm::new("Mechanical Draftsmen");
            type_into(&mut form.name, "Jane Doe");
            type_into(&mut form.email, "jane@x.com");
            type_into(&mut form.phone, "9876543210");
            type_into(&mut form.experience, "3");
            type_into(
                &mut form.motivation,
                "I want to grow my career in MEP design and drafting.",
            );

            let params = form.template_params(&submitted_at());
            let expected = TemplateParams::from([
                ("from_name".to_string(), "Jane Doe".to_string()),
                ("from_email".to_string(), "jane@x.com".to_string()),
                ("phone".to_string(), "9876543210".to_string()),
                ("position".to_string(), "Mechanical Draftsmen".to_string()),
                ("experience".to_string(), "3".to_string()),
                (
                    "motivation".to_string(),
                    "I want to grow my career in MEP design and drafting.".to_string(),
                ),
                (
                    "application_date".to_string(),
                    "Sunday, October 18, 2026".to_string(),
                ),
                ("application_time".to_string(), "02:30:15 PM".to_string()),
            ]);
            assert_eq!(params, expected);
        }

        #[test]
        fn test_clear_keeps_position() {
            let mut form = ApplicationForm::new("Mechanical Draftsmen");
            type_into(&mut form.name, "Jane");
            form.clear();
            assert_eq!(form.name.as_text(), "");
            assert_eq!(form.position, "Mechanical Draftsmen");
        }
    }
}
