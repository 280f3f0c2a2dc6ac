//! Job application modal

use super::forms::{ApplicationForm, ValidationRules};
use super::scroll_lock::{ScrollLock, ScrollLockGuard};
use super::submission::{MailTarget, SubmissionController};
use std::time::Duration;

/// Open application modal; holds the scroll lock for as long as it exists
#[derive(Debug)]
pub struct ApplicationModal {
    pub controller: SubmissionController<ApplicationForm>,
    _guard: ScrollLockGuard,
}

impl ApplicationModal {
    pub fn open(
        position: &str,
        open_positions: Vec<String>,
        motivation_min_len: usize,
        target: MailTarget,
        auto_close_delay: Duration,
        lock: &ScrollLock,
    ) -> Self {
        tracing::info!(position, "opening application form");
        Self {
            controller: SubmissionController::new(
                ApplicationForm::new(position),
                ValidationRules::application(motivation_min_len, open_positions),
                target,
                auto_close_delay,
            ),
            _guard: lock.acquire(),
        }
    }

    pub fn position(&self) -> &str {
        &self.controller.form().position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::submission::SubmissionStatus;

    fn open(lock: &ScrollLock) -> ApplicationModal {
        ApplicationModal::open(
            "Electrical Draftsmen",
            vec!["Electrical Draftsmen".to_string()],
            50,
            MailTarget {
                service_id: "service".to_string(),
                template_id: "template".to_string(),
            },
            Duration::from_millis(3000),
            lock,
        )
    }

    #[test]
    fn test_open_acquires_scroll_lock() {
        let lock = ScrollLock::new();
        let modal = open(&lock);
        assert!(lock.is_locked());
        assert_eq!(modal.position(), "Electrical Draftsmen");
        assert_eq!(modal.controller.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_drop_releases_scroll_lock() {
        let lock = ScrollLock::new();
        let modal = open(&lock);
        drop(modal);
        assert!(!lock.is_locked());
    }
}
