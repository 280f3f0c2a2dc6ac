//! Configuration handling for the site

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the relay public key
pub const ENV_PUBLIC_KEY: &str = "MEPTEQ_EMAILJS_PUBLIC_KEY";
/// Environment variable overriding the relay endpoint
pub const ENV_RELAY_ENDPOINT: &str = "MEPTEQ_RELAY_ENDPOINT";

const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_PUBLIC_KEY: &str = "38Wr0pXGcLDRtVP9o";
const DEFAULT_SERVICE_ID: &str = "service_zr7oaba";
const DEFAULT_APPLICATION_TEMPLATE_ID: &str = "template_1epmvcf";
const DEFAULT_CONTACT_TEMPLATE_ID: &str = "template_contact";

const DEFAULT_SUBMIT_TIMEOUT_MS: u64 = 15_000;
const DEFAULT_AUTO_CLOSE_MS: u64 = 3_000;
const DEFAULT_HERO_INTERVAL_MS: u64 = 9_000;
const DEFAULT_TESTIMONIAL_INTERVAL_MS: u64 = 7_000;
const DEFAULT_MOTIVATION_MIN_LEN: usize = 50;
const DEFAULT_CONTACT_MESSAGE_MIN_LEN: usize = 1;

/// User configuration for the site
///
/// Every field is optional; the accessor methods resolve the effective value.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Mail relay send endpoint
    pub relay_endpoint: Option<String>,
    /// Mail relay public key
    pub relay_public_key: Option<String>,
    /// Mail relay service identifier
    pub relay_service_id: Option<String>,
    /// Template used for job applications
    pub application_template_id: Option<String>,
    /// Template used for contact messages
    pub contact_template_id: Option<String>,
    /// Upper bound on a single relay call
    pub submit_timeout_ms: Option<u64>,
    /// Delay before a successful form closes itself
    pub auto_close_ms: Option<u64>,
    /// Hero carousel auto-advance period
    pub hero_interval_ms: Option<u64>,
    /// Client testimonial carousel auto-advance period
    pub testimonial_interval_ms: Option<u64>,
    /// Minimum motivation length on the job application
    pub motivation_min_len: Option<usize>,
    /// Minimum message length on the contact form
    pub contact_message_min_len: Option<usize>,
    /// Content document replacing the embedded one
    pub content_path: Option<PathBuf>,
}

impl SiteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "mepteq", "mepteq-site")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: SiteConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded site config");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn relay_endpoint(&self) -> String {
        resolve(
            std::env::var(ENV_RELAY_ENDPOINT).ok(),
            self.relay_endpoint.as_deref(),
            DEFAULT_RELAY_ENDPOINT,
        )
    }

    pub fn relay_public_key(&self) -> String {
        resolve(
            std::env::var(ENV_PUBLIC_KEY).ok(),
            self.relay_public_key.as_deref(),
            DEFAULT_PUBLIC_KEY,
        )
    }

    pub fn relay_service_id(&self) -> String {
        resolve(None, self.relay_service_id.as_deref(), DEFAULT_SERVICE_ID)
    }

    pub fn application_template_id(&self) -> String {
        resolve(
            None,
            self.application_template_id.as_deref(),
            DEFAULT_APPLICATION_TEMPLATE_ID,
        )
    }

    pub fn contact_template_id(&self) -> String {
        resolve(
            None,
            self.contact_template_id.as_deref(),
            DEFAULT_CONTACT_TEMPLATE_ID,
        )
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms.unwrap_or(DEFAULT_SUBMIT_TIMEOUT_MS))
    }

    pub fn auto_close_delay(&self) -> Duration {
        Duration::from_millis(self.auto_close_ms.unwrap_or(DEFAULT_AUTO_CLOSE_MS))
    }

    pub fn hero_interval(&self) -> Duration {
        Duration::from_millis(self.hero_interval_ms.unwrap_or(DEFAULT_HERO_INTERVAL_MS))
    }

    pub fn testimonial_interval(&self) -> Duration {
        Duration::from_millis(
            self.testimonial_interval_ms
                .unwrap_or(DEFAULT_TESTIMONIAL_INTERVAL_MS),
        )
    }

    pub fn motivation_min_len(&self) -> usize {
        self.motivation_min_len.unwrap_or(DEFAULT_MOTIVATION_MIN_LEN)
    }

    pub fn contact_message_min_len(&self) -> usize {
        self.contact_message_min_len
            .unwrap_or(DEFAULT_CONTACT_MESSAGE_MIN_LEN)
    }
}

/// Pick the environment value, then the configured value, then the default.
/// Blank values count as unset.
fn resolve(env: Option<String>, configured: Option<&str>, default: &str) -> String {
    env.filter(|v| !v.trim().is_empty())
        .or_else(|| {
            configured
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| default.to_string())
}
