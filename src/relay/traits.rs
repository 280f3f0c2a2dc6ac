//! Trait abstraction for the mail relay to enable mocking in tests

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Key/value pairs substituted into the relay's e-mail template
pub type TemplateParams = BTreeMap<String, String>;

/// Response of a relay call that reached the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReceipt {
    pub status: u16,
    pub text: String,
}

impl RelayReceipt {
    /// The only status treated as a delivered message
    pub const SUCCESS_STATUS: u16 = 200;

    /// Receipt the provider returns for an accepted message
    pub fn accepted() -> Self {
        Self {
            status: Self::SUCCESS_STATUS,
            text: "OK".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Self::SUCCESS_STATUS
    }
}

/// Failure of an outbound relay call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("relay responded with status {code}: {text}")]
    Status { code: u16, text: String },
    #[error("no response from relay after {0:?}")]
    Timeout(Duration),
    #[error("malformed relay response: {0}")]
    Malformed(String),
}

impl RelayError {
    /// HTTP-like status code carried by the error, if the provider answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// One outbound message, tagged with the submission attempt it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRequest {
    pub attempt: Uuid,
    pub service_id: String,
    pub template_id: String,
    pub params: TemplateParams,
}

/// Transactional e-mail provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailRelay: Send + Sync {
    /// Deliver one templated message
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<RelayReceipt, RelayError>;
}

/// Send a request through the relay, giving up after `timeout`
pub async fn deliver(
    relay: &dyn MailRelay,
    request: &MailRequest,
    timeout: Duration,
) -> Result<RelayReceipt, RelayError> {
    let send = relay.send(&request.service_id, &request.template_id, &request.params);
    match tokio::time::timeout(timeout, send).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(attempt = %request.attempt, ?timeout, "mail relay timed out");
            Err(RelayError::Timeout(timeout))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> MailRequest {
        MailRequest {
            attempt: Uuid::new_v4(),
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            params: TemplateParams::from([("from_name".to_string(), "Jane".to_string())]),
        }
    }

    #[test]
    fn test_receipt_success_is_status_200_only() {
        assert!(RelayReceipt::accepted().is_success());
        let created = RelayReceipt {
            status: 201,
            text: "OK".to_string(),
        };
        assert!(!created.is_success());
    }

    #[test]
    fn test_status_code_only_for_status_errors() {
        let err = RelayError::Status {
            code: 412,
            text: "bad template".to_string(),
        };
        assert_eq!(err.status_code(), Some(412));
        assert_eq!(RelayError::Network("down".to_string()).status_code(), None);
        assert_eq!(
            RelayError::Timeout(Duration::from_secs(1)).status_code(),
            None
        );
    }

    #[tokio::test]
    async fn test_deliver_passes_request_to_relay() {
        let mut relay = MockMailRelay::new();
        relay
            .expect_send()
            .withf(|service, template, params| {
                service == "service_x"
                    && template == "template_y"
                    && params.get("from_name").map(String::as_str) == Some("Jane")
            })
            .times(1)
            .returning(|_, _, _| Ok(RelayReceipt::accepted()));

        let result = deliver(&relay, &request(), Duration::from_secs(5)).await;
        assert_eq!(result, Ok(RelayReceipt::accepted()));
    }

    #[tokio::test]
    async fn test_deliver_propagates_relay_error() {
        let mut relay = MockMailRelay::new();
        relay.expect_send().times(1).returning(|_, _, _| {
            Err(RelayError::Status {
                code: 500,
                text: "oops".to_string(),
            })
        });

        let result = deliver(&relay, &request(), Duration::from_secs(5)).await;
        assert_eq!(result.unwrap_err().status_code(), Some(500));
    }

    struct StalledRelay;

    #[async_trait]
    impl MailRelay for StalledRelay {
        async fn send(
            &self,
            _service_id: &str,
            _template_id: &str,
            _params: &TemplateParams,
        ) -> Result<RelayReceipt, RelayError> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_deliver_times_out_on_stalled_relay() {
        let timeout = Duration::from_secs(15);
        let result = deliver(&StalledRelay, &request(), timeout).await;
        assert_eq!(result, Err(RelayError::Timeout(timeout)));
    }
}
