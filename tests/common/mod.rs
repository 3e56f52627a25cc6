use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use coffee_stay_mailer::email::{DeliveryReceipt, EmailMessage, MailTransport, VerificationDispatcher};
use coffee_stay_mailer::TransportError;

/// Records accepted messages, or fails every send with a fixed error.
#[derive(Default)]
pub struct FakeTransport {
  pub sent: Mutex<Vec<EmailMessage>>,
  pub failure: Option<TransportError>,
}

#[async_trait]
impl MailTransport for FakeTransport {
  async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, TransportError> {
    if let Some(error) = &self.failure {
      return Err(error.clone());
    }

    self.sent.lock().unwrap().push(message.clone());
    Ok(DeliveryReceipt {
      message_id: "<fake@coffeestay.vn>".to_string(),
      accepted: vec![message.to.clone()],
      rejected: vec![],
      response: "250 OK".to_string(),
    })
  }

  async fn verify(&self) -> Result<(), TransportError> {
    Ok(())
  }
}

#[allow(dead_code)]
pub fn dispatcher(transport: Arc<FakeTransport>) -> VerificationDispatcher<dyn MailTransport> {
  let transport: Arc<dyn MailTransport> = transport;
  VerificationDispatcher::new(transport, "https://example.com", "\"Coffee Stay\" <noreply@coffeestay.vn>")
}
