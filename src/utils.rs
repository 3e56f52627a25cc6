use crate::config::AppConfig;
use crate::email::{spawn_connectivity_probe, MailTransport, SmtpMailTransport, VerificationDispatcher};
use std::sync::Arc;

pub mod error;

/// Builds the process-wide SMTP transport, starts its connectivity probe, and
/// wires it into a dispatcher. Must run inside a tokio runtime.
pub async fn init_verification_dispatcher(
  config: &AppConfig,
) -> anyhow::Result<VerificationDispatcher<dyn MailTransport>> {
  let sender = config.smtp.sender()?;

  let transport: Arc<dyn MailTransport> = Arc::new(SmtpMailTransport::new(config.smtp.clone())?);
  spawn_connectivity_probe(transport.clone());

  Ok(VerificationDispatcher::new(
    transport,
    config.server_url.clone(),
    sender.to_string(),
  ))
}
