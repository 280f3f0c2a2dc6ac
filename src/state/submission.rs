//! Submission life cycle of a site form
//!
//! A [`SubmissionController`] moves a form through
//! `Idle -> Submitting -> Success | Error`, or to `ValidationError` when the
//! validator rejects the fields. The network call itself happens outside the
//! controller: [`SubmissionController::begin_submit`] hands out a tagged
//! [`MailRequest`] and [`SubmissionController::finish`] accepts the outcome
//! for that tag only, so a late reply to an abandoned attempt is dropped.

use super::forms::{validate, FieldErrors, FieldName, Form, ValidationRules};
use crate::relay::{deliver, MailRelay, MailRequest, RelayError, RelayReceipt};
use chrono::NaiveDateTime;
use std::time::{Duration, Instant};
use thiserror::Error;
use uuid::Uuid;

/// Banner text shown for any transport failure
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Failed to send. Check your connection and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
    ValidationError,
}

/// Relay service and template a form is delivered through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailTarget {
    pub service_id: String,
    pub template_id: String,
}

/// Reasons a submit request does not reach the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
}

/// Drives one form instance through validation, delivery and reset
#[derive(Debug)]
pub struct SubmissionController<F: Form> {
    form: F,
    rules: ValidationRules,
    target: MailTarget,
    errors: FieldErrors,
    status: SubmissionStatus,
    auto_close_delay: Duration,
    auto_close_at: Option<Instant>,
    in_flight: Option<Uuid>,
    last_failure: Option<RelayError>,
}

impl<F: Form> SubmissionController<F> {
    pub fn new(
        form: F,
        rules: ValidationRules,
        target: MailTarget,
        auto_close_delay: Duration,
    ) -> Self {
        Self {
            form,
            rules,
            target,
            errors: FieldErrors::new(),
            status: SubmissionStatus::Idle,
            auto_close_delay,
            auto_close_at: None,
            in_flight: None,
            last_failure: None,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Mutable access for navigation; field edits go through the edit methods
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn last_failure(&self) -> Option<&RelayError> {
        self.last_failure.as_ref()
    }

    pub fn auto_close_at(&self) -> Option<Instant> {
        self.auto_close_at
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Submitting
    }

    /// Replace a field's value
    #[allow(dead_code)]
    pub fn update_field(&mut self, name: FieldName, value: &str) {
        if !self.can_submit() {
            return;
        }
        if let Some(field) = self.form.field_by_name_mut(name) {
            field.set_text(value);
            self.field_edited(name);
        }
    }

    /// Type one character into the active field
    pub fn input_char(&mut self, c: char) {
        if !self.can_submit() {
            return;
        }
        if let Some(field) = self.form.get_active_field_mut() {
            field.push_char(c);
            let name = field.name;
            self.field_edited(name);
        }
    }

    pub fn backspace(&mut self) {
        if !self.can_submit() {
            return;
        }
        if let Some(field) = self.form.get_active_field_mut() {
            field.pop_char();
            let name = field.name;
            self.field_edited(name);
        }
    }

    fn field_edited(&mut self, name: FieldName) {
        self.errors.remove(&name);
        if self.status == SubmissionStatus::ValidationError && self.errors.is_empty() {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Validate and, when the form is clean, start a new attempt
    pub fn begin_submit(&mut self, submitted_at: NaiveDateTime) -> Result<MailRequest, SubmitRejected> {
        if self.status == SubmissionStatus::Submitting {
            tracing::debug!("submit ignored while a submission is in flight");
            return Err(SubmitRejected::InFlight);
        }

        let errors = validate(&self.form.values(), &self.rules);
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "form failed validation");
            self.errors = errors.clone();
            self.status = SubmissionStatus::ValidationError;
            return Err(SubmitRejected::Invalid(errors));
        }

        let attempt = Uuid::new_v4();
        self.errors.clear();
        self.status = SubmissionStatus::Submitting;
        self.in_flight = Some(attempt);
        self.auto_close_at = None;
        self.last_failure = None;

        tracing::info!(%attempt, template = %self.target.template_id, "submitting form");
        Ok(MailRequest {
            attempt,
            service_id: self.target.service_id.clone(),
            template_id: self.target.template_id.clone(),
            params: self.form.template_params(&submitted_at),
        })
    }

    /// Apply the outcome of an attempt; returns false for stale attempts
    pub fn finish(
        &mut self,
        attempt: Uuid,
        outcome: Result<RelayReceipt, RelayError>,
        now: Instant,
    ) -> bool {
        if self.in_flight != Some(attempt) {
            tracing::debug!(%attempt, "ignoring outcome of a stale submission");
            return false;
        }
        self.in_flight = None;

        let outcome = outcome.and_then(|receipt| {
            if receipt.is_success() {
                Ok(receipt)
            } else {
                Err(RelayError::Status {
                    code: receipt.status,
                    text: receipt.text,
                })
            }
        });

        match outcome {
            Ok(receipt) => {
                tracing::info!(%attempt, text = %receipt.text, "form delivered");
                self.form.clear();
                self.errors.clear();
                self.status = SubmissionStatus::Success;
                self.auto_close_at = Some(now + self.auto_close_delay);
            }
            Err(err) => {
                tracing::warn!(%attempt, error = %err, status = ?err.status_code(), "form delivery failed");
                self.status = SubmissionStatus::Error;
                self.last_failure = Some(err);
            }
        }
        true
    }

    /// Reset once the auto-close deadline has passed; returns true if it fired
    pub fn poll_auto_close(&mut self, now: Instant) -> bool {
        match self.auto_close_at {
            Some(deadline) if now >= deadline => {
                tracing::debug!("auto-closing submitted form");
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// Return to an empty Idle form; refused while an attempt is in flight
    pub fn reset(&mut self) -> bool {
        if self.status == SubmissionStatus::Submitting {
            tracing::debug!("reset ignored while a submission is in flight");
            return false;
        }
        self.form.clear();
        self.errors.clear();
        self.status = SubmissionStatus::Idle;
        self.auto_close_at = None;
        self.in_flight = None;
        self.last_failure = None;
        true
    }

    /// Run one complete attempt against the relay
    #[allow(dead_code)]
    pub async fn submit(
        &mut self,
        relay: &dyn MailRelay,
        timeout: Duration,
        submitted_at: NaiveDateTime,
    ) -> SubmissionStatus {
        let request = match self.begin_submit(submitted_at) {
            Ok(request) => request,
            Err(_) => return self.status,
        };
        let outcome = deliver(relay, &request, timeout).await;
        self.finish(request.attempt, outcome, Instant::now());
        self.status
    }

    /// Banner text for the current status
    pub fn status_message(&self) -> Option<&'static str> {
        match self.status {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Submitting => Some("Sending..."),
            SubmissionStatus::Success => Some("Thank you! Your message has been sent."),
            SubmissionStatus::Error => Some(TRANSPORT_FAILURE_MESSAGE),
            SubmissionStatus::ValidationError => Some("Please fix the highlighted fields."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::MockMailRelay;
    use crate::state::forms::{ApplicationForm, ContactForm, FieldError};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    const MOTIVATION: &str = "I want to grow my career in MEP design and drafting.";

    fn submitted_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    fn target() -> MailTarget {
        MailTarget {
            service_id: "service_zr7oaba".to_string(),
            template_id: "template_1epmvcf".to_string(),
        }
    }

    fn contact() -> SubmissionController<ContactForm> {
        SubmissionController::new(
            ContactForm::new(),
            ValidationRules::contact(1),
            target(),
            Duration::from_millis(3000),
        )
    }

    fn application() -> SubmissionController<ApplicationForm> {
        SubmissionController::new(
            ApplicationForm::new("Mechanical Draftsmen"),
            ValidationRules::application(
                50,
                vec![
                    "Mechanical Draftsmen".to_string(),
                    "Electrical Draftsmen".to_string(),
                ],
            ),
            target(),
            Duration::from_millis(3000),
        )
    }

    fn filled_application() -> SubmissionController<ApplicationForm> {
        let mut controller = application();
        controller.update_field(FieldName::Name, "Jane Doe");
        controller.update_field(FieldName::Email, "jane@x.com");
        controller.update_field(FieldName::Phone, "9876543210");
        controller.update_field(FieldName::Experience, "3");
        controller.update_field(FieldName::Motivation, MOTIVATION);
        controller
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_the_network() {
        let mut relay = MockMailRelay::new();
        relay.expect_send().times(0);

        let mut controller = contact();
        controller.update_field(FieldName::Email, "a@b.com");
        controller.update_field(FieldName::Message, "hello");

        let status = controller
            .submit(&relay, Duration::from_secs(5), submitted_at())
            .await;

        assert_eq!(status, SubmissionStatus::ValidationError);
        assert_eq!(
            controller.errors(),
            &FieldErrors::from([(FieldName::Name, FieldError::Required)])
        );
        // Fields are kept for correction
        assert_eq!(controller.form().email.as_text(), "a@b.com");
    }

    #[tokio::test]
    async fn test_valid_application_sends_all_values() {
        let mut relay = MockMailRelay::new();
        relay
            .expect_send()
            .withf(|service, template, params| {
                service == "service_zr7oaba"
                    && template == "template_1epmvcf"
                    && params["from_name"] == "Jane Doe"
                    && params["from_email"] == "jane@x.com"
                    && params["phone"] == "9876543210"
                    && params["experience"] == "3"
                    && params["motivation"] == MOTIVATION
                    && params["application_date"] == "Sunday, October 18, 2026"
                    && params["application_time"] == "09:05:00 AM"
            })
            .times(1)
            .returning(|_, _, _| Ok(RelayReceipt::accepted()));

        let mut controller = filled_application();
        let status = controller
            .submit(&relay, Duration::from_secs(5), submitted_at())
            .await;

        assert_eq!(status, SubmissionStatus::Success);
        assert!(controller.errors().is_empty());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut controller = filled_application();
        let first = controller.begin_submit(submitted_at());
        assert!(first.is_ok());
        assert_eq!(controller.status(), SubmissionStatus::Submitting);
        assert!(!controller.can_submit());

        let second = controller.begin_submit(submitted_at());
        assert_eq!(second, Err(SubmitRejected::InFlight));
    }

    #[test]
    fn test_success_clears_fields_and_schedules_auto_close() {
        let mut controller = filled_application();
        let request = controller.begin_submit(submitted_at()).unwrap();
        let now = Instant::now();

        assert!(controller.finish(request.attempt, Ok(RelayReceipt::accepted()), now));

        assert_eq!(controller.status(), SubmissionStatus::Success);
        assert_eq!(controller.form().name.as_text(), "");
        assert_eq!(controller.form().motivation.as_text(), "");
        assert_eq!(
            controller.auto_close_at(),
            Some(now + Duration::from_millis(3000))
        );
    }

    #[test]
    fn test_failure_preserves_fields_and_allows_retry() {
        let mut controller = filled_application();
        let request = controller.begin_submit(submitted_at()).unwrap();
        let failure = RelayError::Network("connection refused".to_string());

        controller.finish(request.attempt, Err(failure.clone()), Instant::now());

        assert_eq!(controller.status(), SubmissionStatus::Error);
        assert_eq!(controller.last_failure(), Some(&failure));
        assert_eq!(controller.form().name.as_text(), "Jane Doe");
        assert_eq!(controller.status_message(), Some(TRANSPORT_FAILURE_MESSAGE));

        let retry = controller.begin_submit(submitted_at()).unwrap();
        assert_eq!(retry.params, request.params);
        assert_ne!(retry.attempt, request.attempt);
    }

    #[test]
    fn test_non_200_receipt_is_a_failure() {
        let mut controller = filled_application();
        let request = controller.begin_submit(submitted_at()).unwrap();
        let receipt = RelayReceipt {
            status: 202,
            text: "Accepted".to_string(),
        };

        controller.finish(request.attempt, Ok(receipt), Instant::now());

        assert_eq!(controller.status(), SubmissionStatus::Error);
        assert_eq!(controller.last_failure().and_then(RelayError::status_code), Some(202));
    }

    #[test]
    fn test_reset_is_refused_while_submitting() {
        let mut controller = filled_application();
        let request = controller.begin_submit(submitted_at()).unwrap();

        assert!(!controller.reset());
        assert_eq!(controller.status(), SubmissionStatus::Submitting);
        assert_eq!(controller.form().name.as_text(), "Jane Doe");
        assert!(!controller.can_submit());

        assert!(controller.finish(request.attempt, Ok(RelayReceipt::accepted()), Instant::now()));
        assert_eq!(controller.status(), SubmissionStatus::Success);
    }

    #[test]
    fn test_outcome_for_unknown_attempt_is_ignored() {
        let mut controller = filled_application();
        controller.begin_submit(submitted_at()).unwrap();

        assert!(!controller.finish(Uuid::new_v4(), Ok(RelayReceipt::accepted()), Instant::now()));
        assert_eq!(controller.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn test_auto_close_fires_after_delay() {
        let mut controller = filled_application();
        let request = controller.begin_submit(submitted_at()).unwrap();
        let now = Instant::now();
        controller.finish(request.attempt, Ok(RelayReceipt::accepted()), now);

        assert!(!controller.poll_auto_close(now + Duration::from_millis(2999)));
        assert_eq!(controller.status(), SubmissionStatus::Success);

        assert!(controller.poll_auto_close(now + Duration::from_millis(3000)));
        assert_eq!(controller.status(), SubmissionStatus::Idle);
        assert!(controller.auto_close_at().is_none());
    }

    #[test]
    fn test_edits_are_ignored_while_submitting() {
        let mut controller = filled_application();
        controller.begin_submit(submitted_at()).unwrap();

        controller.update_field(FieldName::Name, "Someone Else");
        controller.input_char('x');
        controller.backspace();

        assert_eq!(controller.form().name.as_text(), "Jane Doe");
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut controller = application();
        let _ = controller.begin_submit(submitted_at());
        assert!(controller.errors().contains_key(&FieldName::Name));

        controller.input_char('J');

        assert!(!controller.errors().contains_key(&FieldName::Name));
        assert!(controller.errors().contains_key(&FieldName::Email));
        assert_eq!(controller.status(), SubmissionStatus::ValidationError);
    }

    #[test]
    fn test_clearing_last_error_returns_to_idle() {
        let mut controller = filled_application();
        controller.update_field(FieldName::Email, "broken");
        let _ = controller.begin_submit(submitted_at());
        assert_eq!(controller.status(), SubmissionStatus::ValidationError);

        controller.update_field(FieldName::Email, "jane@x.com");
        assert_eq!(controller.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_relay_error_sets_error_status() {
        let mut relay = MockMailRelay::new();
        relay.expect_send().times(1).returning(|_, _, _| {
            Err(RelayError::Status {
                code: 400,
                text: "The service ID is invalid".to_string(),
            })
        });

        let mut controller = filled_application();
        let status = controller
            .submit(&relay, Duration::from_secs(5), submitted_at())
            .await;

        assert_eq!(status, SubmissionStatus::Error);
        assert_eq!(controller.form().email.as_text(), "jane@x.com");
    }

    #[test]
    fn test_submit_blocking_success_clears_form() {
        let mut relay = MockMailRelay::new();
        relay
            .expect_send()
            .times(1)
            .returning(|_, _, _| Ok(RelayReceipt::accepted()));

        let mut controller = filled_application();
        let status = tokio_test::block_on(controller.submit(
            &relay,
            Duration::from_secs(5),
            submitted_at(),
        ));

        assert_eq!(status, SubmissionStatus::Success);
        assert_eq!(controller.form().name.as_text(), "");
        assert_eq!(controller.form().position, "Mechanical Draftsmen");
    }
}
