//! HTTP client for the EmailJS transactional e-mail API
//!
//! Messages are posted as JSON to the provider's REST endpoint. The provider
//! answers `200 OK` with the body text `OK` for an accepted message and a
//! non-2xx status with a plain-text reason otherwise.

use super::traits::{MailRelay, RelayError, RelayReceipt, TemplateParams};
use crate::config::SiteConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Mail relay backed by the EmailJS REST API
pub struct EmailJsRelay {
    /// The HTTP client
    http: Client,
    /// Full URL of the send endpoint
    endpoint: String,
    /// Public key identifying the account
    public_key: String,
}

impl EmailJsRelay {
    /// Create a relay with a default HTTP client
    pub fn new(endpoint: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint, public_key)
    }

    pub fn with_client(
        http: Client,
        endpoint: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            public_key: public_key.into(),
        }
    }

    /// Create a relay from the resolved site configuration
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.relay_endpoint(), config.relay_public_key())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MailRelay for EmailJsRelay {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<RelayReceipt, RelayError> {
        let body = SendRequest {
            service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RelayError::Malformed(e.to_string()))?;

        if !status.is_success() {
            return Err(RelayError::Status {
                code: status.as_u16(),
                text,
            });
        }

        tracing::debug!(status = status.as_u16(), %text, "mail relay accepted message");
        Ok(RelayReceipt {
            status: status.as_u16(),
            text,
        })
    }
}
