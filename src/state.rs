use std::sync::Arc;

use crate::{
  domains::verification::model::SendVerificationRequest,
  email::{DeliveryReceipt, MailTransport, VerificationDispatcher},
  error::TransportError,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_verification_email(
    &self,
    req: SendVerificationRequest,
  ) -> impl std::future::Future<Output = Result<DeliveryReceipt, TransportError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub dispatcher: Arc<VerificationDispatcher<dyn MailTransport>>,
}

impl SharedAppState {
  pub fn new(dispatcher: VerificationDispatcher<dyn MailTransport>) -> Self {
    Self {
      dispatcher: Arc::new(dispatcher),
    }
  }
}

impl AppState for SharedAppState {
  async fn send_verification_email(&self, req: SendVerificationRequest) -> Result<DeliveryReceipt, TransportError> {
    self.dispatcher.send_verification_email(&req.email, &req.token).await
  }
}
