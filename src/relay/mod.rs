//! Mail relay module for delivering form submissions as e-mail

mod client;
mod traits;

pub use client::EmailJsRelay;
pub use traits::{deliver, MailRelay, MailRequest, RelayError, RelayReceipt, TemplateParams};

#[cfg(test)]
pub use traits::MockMailRelay;
