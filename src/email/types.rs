use std::time::Duration;

use lettre::{address::AddressError, message::Mailbox};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
  pub from_name: String,
  #[serde(default)]
  pub timeout: Option<Duration>,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
      from_email: "".to_string(),
      from_name: "Coffee Stay".to_string(),
      timeout: None,
    }
  }
}

impl SmtpConfig {
  /// Sender identity, e.g. `"Coffee Stay" <noreply@coffeestay.vn>`.
  pub fn sender(&self) -> Result<Mailbox, AddressError> {
    Ok(Mailbox::new(Some(self.from_name.clone()), self.from_email.parse()?))
  }
}

/// A single HTML message handed to a [`MailTransport`](super::MailTransport).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
  pub from: String,
  pub to: String,
  pub subject: String,
  pub html: String,
}

impl EmailMessage {
  pub fn new(from: String, to: String, subject: String, html: String) -> Self {
    EmailMessage { from, to, subject, html }
  }
}

/// Acknowledgment returned by a transport after the relay accepted a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
  pub message_id: String,
  pub accepted: Vec<String>,
  pub rejected: Vec<String>,
  pub response: String,
}
