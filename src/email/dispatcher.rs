use std::sync::Arc;

use super::{
  template::{build_verification_url, render_verification_html, VERIFICATION_SUBJECT},
  transport::MailTransport,
  types::{DeliveryReceipt, EmailMessage},
};
use crate::error::TransportError;

/// Sends account verification links through an injected [`MailTransport`].
///
/// The token is never inspected: expiry and single use are enforced by the
/// endpoint the link points at.
pub struct VerificationDispatcher<T: MailTransport + ?Sized> {
  transport: Arc<T>,
  base_url: String,
  sender: String,
}

impl<T: MailTransport + ?Sized> VerificationDispatcher<T> {
  pub fn new(transport: Arc<T>, base_url: impl Into<String>, sender: impl Into<String>) -> Self {
    Self {
      transport,
      base_url: base_url.into(),
      sender: sender.into(),
    }
  }

  pub fn verification_url(&self, token: &str) -> String {
    build_verification_url(&self.base_url, token)
  }

  pub fn build_message(&self, recipient: &str, token: &str) -> EmailMessage {
    let html = render_verification_html(&self.verification_url(token));
    EmailMessage::new(
      self.sender.clone(),
      recipient.to_string(),
      VERIFICATION_SUBJECT.to_string(),
      html,
    )
  }

  pub async fn send_verification_email(&self, recipient: &str, token: &str) -> Result<DeliveryReceipt, TransportError> {
    let message = self.build_message(recipient, token);

    match self.transport.send(&message).await {
      Ok(receipt) => {
        tracing::info!("Verification email sent to {} ({})", recipient, receipt.message_id);
        Ok(receipt)
      }
      Err(e) => {
        tracing::error!("Failed to send verification email to {}: {}", recipient, e);
        Err(e)
      }
    }
  }
}
