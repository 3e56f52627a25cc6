use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  email::{DeliveryReceipt, EmailMessage, MailTransport, VerificationDispatcher},
  error::TransportError,
  state::SharedAppState,
};

pub const TEST_BASE_URL: &str = "https://example.com";
pub const TEST_SENDER: &str = "\"Coffee Stay\" <noreply@coffeestay.vn>";

/// Keeps every accepted message in memory, or fails every send with a fixed error.
#[derive(Default)]
pub struct RecordingTransport {
  sent: Mutex<Vec<EmailMessage>>,
  failure: Option<TransportError>,
}

impl RecordingTransport {
  pub fn failing(error: TransportError) -> Self {
    Self {
      sent: Mutex::new(Vec::new()),
      failure: Some(error),
    }
  }

  pub fn sent(&self) -> Vec<EmailMessage> {
    self.sent.lock().unwrap().clone()
  }
}

#[async_trait]
impl MailTransport for RecordingTransport {
  async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, TransportError> {
    if let Some(error) = &self.failure {
      return Err(error.clone());
    }

    let mut sent = self.sent.lock().unwrap();
    sent.push(message.clone());
    Ok(DeliveryReceipt {
      message_id: format!("<{}@coffeestay.vn>", sent.len()),
      accepted: vec![message.to.clone()],
      rejected: vec![],
      response: "250 OK".to_string(),
    })
  }

  async fn verify(&self) -> Result<(), TransportError> {
    match &self.failure {
      Some(error) => Err(error.clone()),
      None => Ok(()),
    }
  }
}

pub fn app_with_transport(transport: Arc<dyn MailTransport>) -> Router {
  let dispatcher = VerificationDispatcher::new(transport, TEST_BASE_URL, TEST_SENDER);
  create_app(SharedAppState::new(dispatcher))
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
