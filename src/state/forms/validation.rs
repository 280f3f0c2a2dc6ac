//! Field validation for the site forms
//!
//! [`validate`] is a pure function: it never touches the form it was read from
//! and returns every failing field at once. An empty result means the form can
//! be submitted.

use super::field::FieldName;
use std::collections::BTreeMap;
use std::fmt;

/// Current value of every field of a form
pub type FieldValues = BTreeMap<FieldName, String>;

/// Failing fields; a missing key means the field is valid
pub type FieldErrors = BTreeMap<FieldName, FieldError>;

const PHONE_MIN_DIGITS: usize = 10;
const PHONE_MAX_DIGITS: usize = 15;

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    InvalidPhone,
    InvalidNumber,
    NegativeNumber,
    TooShort { min: usize },
    UnknownPosition,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => f.write_str("required"),
            FieldError::InvalidEmail => f.write_str("invalid format"),
            FieldError::InvalidPhone => f.write_str("invalid phone"),
            FieldError::InvalidNumber => f.write_str("must be a number"),
            FieldError::NegativeNumber => f.write_str("cannot be negative"),
            FieldError::TooShort { min } => write!(f, "too short (at least {min} characters)"),
            FieldError::UnknownPosition => f.write_str("not an open position"),
        }
    }
}

/// Rules of one form variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// Minimum trimmed length of the name
    pub name_min_len: usize,
    pub phone_required: bool,
    pub experience_required: bool,
    /// Field carrying the free-text message
    pub message_field: FieldName,
    pub message_min_len: usize,
    /// Roles an applicant may pick; `Some` makes the position required
    pub open_positions: Option<Vec<String>>,
}

impl ValidationRules {
    /// Rules of the general contact form
    pub fn contact(message_min_len: usize) -> Self {
        Self {
            name_min_len: 1,
            phone_required: false,
            experience_required: false,
            message_field: FieldName::Message,
            message_min_len,
            open_positions: None,
        }
    }

    /// Rules of the job application form
    pub fn application(motivation_min_len: usize, open_positions: Vec<String>) -> Self {
        Self {
            name_min_len: 2,
            phone_required: true,
            experience_required: true,
            message_field: FieldName::Motivation,
            message_min_len: motivation_min_len,
            open_positions: Some(open_positions),
        }
    }
}

/// Validate a set of field values against the rules of a form
pub fn validate(values: &FieldValues, rules: &ValidationRules) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let value = |name: FieldName| values.get(&name).map(|v| v.trim()).unwrap_or("");

    let name = value(FieldName::Name);
    if name.is_empty() {
        errors.insert(FieldName::Name, FieldError::Required);
    } else if name.chars().count() < rules.name_min_len {
        errors.insert(
            FieldName::Name,
            FieldError::TooShort {
                min: rules.name_min_len,
            },
        );
    }

    let email = value(FieldName::Email);
    if email.is_empty() {
        errors.insert(FieldName::Email, FieldError::Required);
    } else if !is_valid_email(email) {
        errors.insert(FieldName::Email, FieldError::InvalidEmail);
    }

    let phone = value(FieldName::Phone);
    if phone.is_empty() {
        if rules.phone_required {
            errors.insert(FieldName::Phone, FieldError::Required);
        }
    } else if !is_valid_phone(phone) {
        errors.insert(FieldName::Phone, FieldError::InvalidPhone);
    }

    let experience = value(FieldName::Experience);
    if experience.is_empty() {
        if rules.experience_required {
            errors.insert(FieldName::Experience, FieldError::Required);
        }
    } else if let Some(err) = check_experience(experience) {
        errors.insert(FieldName::Experience, err);
    }

    let message = value(rules.message_field);
    if message.is_empty() {
        errors.insert(rules.message_field, FieldError::Required);
    } else if message.chars().count() < rules.message_min_len {
        errors.insert(
            rules.message_field,
            FieldError::TooShort {
                min: rules.message_min_len,
            },
        );
    }

    if let Some(open_positions) = &rules.open_positions {
        let position = value(FieldName::Position);
        if position.is_empty() {
            errors.insert(FieldName::Position, FieldError::Required);
        } else if !open_positions.iter().any(|p| p == position) {
            errors.insert(FieldName::Position, FieldError::UnknownPosition);
        }
    }

    errors
}

/// `local@domain.tld` with a single `@` and no whitespace
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Between 10 and 15 digits once common separators are removed
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '(' | ')' | '-' | '.' | '+'))
        .collect();
    digits.chars().all(|c| c.is_ascii_digit())
        && (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits.len())
}

fn check_experience(raw: &str) -> Option<FieldError> {
    match raw.parse::<f64>() {
        Ok(years) if !years.is_finite() => Some(FieldError::InvalidNumber),
        Ok(years) if years < 0.0 => Some(FieldError::NegativeNumber),
        Ok(_) => None,
        Err(_) => Some(FieldError::InvalidNumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(pairs: &[(FieldName, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(name, value)| (*name, value.to_string()))
            .collect()
    }

    fn positions() -> Vec<String> {
        vec![
            "Mechanical Draftsmen".to_string(),
            "Electrical Draftsmen".to_string(),
        ]
    }

    #[test]
    fn test_contact_missing_name_is_the_only_error() {
        let fields = values(&[
            (FieldName::Name, ""),
            (FieldName::Email, "a@b.com"),
            (FieldName::Message, "hello"),
        ]);
        let errors = validate(&fields, &ValidationRules::contact(1));
        assert_eq!(errors, FieldErrors::from([(FieldName::Name, FieldError::Required)]));
        assert_eq!(errors[&FieldName::Name].to_string(), "required");
    }

    #[test]
    fn test_complete_application_is_valid() {
        let fields = values(&[
            (FieldName::Name, "Jane Doe"),
            (FieldName::Email, "jane@x.com"),
            (FieldName::Phone, "9876543210"),
            (FieldName::Experience, "3"),
            (
                FieldName::Motivation,
                "I want to grow my career in MEP design and drafting.",
            ),
            (FieldName::Position, "Mechanical Draftsmen"),
        ]);
        let errors = validate(&fields, &ValidationRules::application(50, positions()));
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_validation_is_deterministic() {
        let fields = values(&[(FieldName::Email, "nope")]);
        let rules = ValidationRules::application(50, positions());
        assert_eq!(validate(&fields, &rules), validate(&fields, &rules));
    }

    #[test]
    fn test_empty_application_reports_every_required_field() {
        let errors = validate(&FieldValues::new(), &ValidationRules::application(50, positions()));
        let expected = FieldErrors::from([
            (FieldName::Name, FieldError::Required),
            (FieldName::Email, FieldError::Required),
            (FieldName::Phone, FieldError::Required),
            (FieldName::Experience, FieldError::Required),
            (FieldName::Motivation, FieldError::Required),
            (FieldName::Position, FieldError::Required),
        ]);
        assert_eq!(errors, expected);
    }

    #[test]
    fn test_whitespace_only_name_is_required() {
        let fields = values(&[(FieldName::Name, "   ")]);
        let errors = validate(&fields, &ValidationRules::contact(1));
        assert_eq!(errors.get(&FieldName::Name), Some(&FieldError::Required));
    }

    #[test]
    fn test_application_name_minimum_length() {
        let fields = values(&[(FieldName::Name, "J")]);
        let errors = validate(&fields, &ValidationRules::application(50, positions()));
        assert_eq!(
            errors.get(&FieldName::Name),
            Some(&FieldError::TooShort { min: 2 })
        );
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@x"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("jane@@x.com"));
        assert!(!is_valid_email("jane@x.com@y.com"));
        assert!(!is_valid_email("jane doe@x.com"));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane@x."));
    }

    #[test]
    fn test_invalid_email_message() {
        let fields = values(&[(FieldName::Email, "not-an-email")]);
        let errors = validate(&fields, &ValidationRules::contact(1));
        assert_eq!(errors[&FieldName::Email].to_string(), "invalid format");
    }

    #[test]
    fn test_phone_digits() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("+91 (987) 654-3210"));
        assert!(is_valid_phone("987.654.3210"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("98765abc43210"));
        assert!(!is_valid_phone("1234567890123456"));
    }

    #[test]
    fn test_phone_optional_on_contact_but_checked_when_present() {
        let rules = ValidationRules::contact(1);
        let without = values(&[(FieldName::Phone, "")]);
        assert!(!validate(&without, &rules).contains_key(&FieldName::Phone));

        let short = values(&[(FieldName::Phone, "555-1234")]);
        assert_eq!(
            validate(&short, &rules).get(&FieldName::Phone),
            Some(&FieldError::InvalidPhone)
        );
    }

    #[test]
    fn test_experience_must_be_non_negative_number() {
        let rules = ValidationRules::application(50, positions());
        let check = |raw: &str| validate(&values(&[(FieldName::Experience, raw)]), &rules)
            .get(&FieldName::Experience)
            .cloned();

        assert_eq!(check("0"), None);
        assert_eq!(check("2.5"), None);
        assert_eq!(check("-1"), Some(FieldError::NegativeNumber));
        assert_eq!(check("three"), Some(FieldError::InvalidNumber));
        assert_eq!(check("inf"), Some(FieldError::InvalidNumber));
        assert_eq!(check("NaN"), Some(FieldError::InvalidNumber));
    }

    #[test]
    fn test_motivation_threshold() {
        let rules = ValidationRules::application(50, positions());
        let fields = values(&[(FieldName::Motivation, "I like drafting.")]);
        assert_eq!(
            validate(&fields, &rules).get(&FieldName::Motivation),
            Some(&FieldError::TooShort { min: 50 })
        );

        let relaxed = ValidationRules::application(10, positions());
        assert!(!validate(&fields, &relaxed).contains_key(&FieldName::Motivation));
    }

    #[test]
    fn test_position_must_be_open() {
        let rules = ValidationRules::application(50, positions());
        let fields = values(&[(FieldName::Position, "Astronaut")]);
        assert_eq!(
            validate(&fields, &rules).get(&FieldName::Position),
            Some(&FieldError::UnknownPosition)
        );
    }

    #[test]
    fn test_contact_ignores_position() {
        let fields = values(&[(FieldName::Position, "Astronaut")]);
        assert!(!validate(&fields, &ValidationRules::contact(1)).contains_key(&FieldName::Position));
    }
}
