use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;

use super::types::{DeliveryReceipt, EmailMessage};
use crate::error::TransportError;

/// Outbound mail delivery.
#[async_trait]
pub trait MailTransport: Send + Sync {
  async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, TransportError>;

  /// Checks that the relay is reachable and accepts the credentials.
  async fn verify(&self) -> Result<(), TransportError>;
}

/// Runs [`MailTransport::verify`] in the background and logs the outcome.
/// Startup does not wait on it and a failure is not retried.
pub fn spawn_connectivity_probe(transport: Arc<dyn MailTransport>) -> JoinHandle<()> {
  tokio::spawn(async move {
    match transport.verify().await {
      Ok(()) => tracing::info!("Mail transport is ready to send messages"),
      Err(e) => tracing::error!("Mail transport connectivity check failed: {}", e),
    }
  })
}
