//! Form field value objects

use std::fmt;

/// Names of every field a site form can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Subject,
    Message,
    Experience,
    Motivation,
    Position,
}

impl FieldName {
    /// Stable key used in logs and template parameters
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Subject => "subject",
            FieldName::Message => "message",
            FieldName::Experience => "experience",
            FieldName::Motivation => "motivation",
            FieldName::Position => "position",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How a field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    /// Digits, one decimal point and a leading minus sign
    Number,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub value: String,
    pub kind: FieldKind,
    pub is_required: bool,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(name: FieldName, label: &str, is_required: bool) -> Self {
        Self::new(name, label, FieldKind::Text, is_required)
    }

    pub fn multiline(name: FieldName, label: &str, is_required: bool) -> Self {
        Self::new(name, label, FieldKind::Multiline, is_required)
    }

    pub fn number(name: FieldName, label: &str, is_required: bool) -> Self {
        Self::new(name, label, FieldKind::Number, is_required)
    }

    fn new(name: FieldName, label: &str, kind: FieldKind, is_required: bool) -> Self {
        Self {
            name,
            label: label.to_string(),
            value: String::new(),
            kind,
            is_required,
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    ///
    /// Number fields drop characters that cannot be part of a number.
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            FieldKind::Text => {
                if c != '\n' {
                    self.value.push(c);
                }
            }
            FieldKind::Multiline => self.value.push(c),
            FieldKind::Number => {
                let accepted = c.is_ascii_digit()
                    || (c == '.' && !self.value.contains('.'))
                    || (c == '-' && self.value.is_empty());
                if accepted {
                    self.value.push(c);
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Label with a marker for required fields
    pub fn display_label(&self) -> String {
        if self.is_required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }
}
