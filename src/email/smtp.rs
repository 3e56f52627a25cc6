use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Mailbox},
  transport::smtp::authentication::Credentials,
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use uuid::Uuid;

use super::{
  transport::MailTransport,
  types::{DeliveryReceipt, EmailMessage, SmtpConfig},
};
use crate::error::TransportError;

const IMPLICIT_TLS_PORT: u16 = 465;

pub struct SmtpMailTransport {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self, TransportError> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let builder = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
    } else if smtp_config.port == IMPLICIT_TLS_PORT {
      AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp_config.host)?
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
    };

    let mut builder = builder.credentials(creds).port(smtp_config.port);
    if let Some(timeout) = smtp_config.timeout {
      builder = builder.timeout(Some(timeout));
    }

    Ok(SmtpMailTransport {
      transporter: builder.build(),
      smtp_config,
    })
  }

  pub fn config(&self) -> &SmtpConfig {
    &self.smtp_config
  }
}

fn build_message(message: &EmailMessage) -> Result<Message, TransportError> {
  let from: Mailbox = message.from.parse()?;
  let to: Mailbox = message.to.parse()?;
  let message_id = format!("<{}@{}>", Uuid::new_v4(), from.email.domain());

  let email = Message::builder()
    .from(from)
    .to(to)
    .subject(message.subject.as_str())
    .message_id(Some(message_id))
    .header(ContentType::TEXT_HTML)
    .body(message.html.clone())?;

  Ok(email)
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
  async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, TransportError> {
    let email = build_message(message)?;

    let message_id = email
      .headers()
      .get_raw("Message-ID")
      .map(str::to_string)
      .unwrap_or_default();
    let accepted = email.envelope().to().iter().map(|addr| addr.to_string()).collect();

    let response = self.transporter.send(email).await?;
    let response = format!("{} {}", response.code(), response.message().collect::<Vec<_>>().join(" "));

    Ok(DeliveryReceipt {
      message_id,
      accepted,
      rejected: Vec::new(),
      response,
    })
  }

  async fn verify(&self) -> Result<(), TransportError> {
    if self.transporter.test_connection().await? {
      Ok(())
    } else {
      Err(TransportError::connection(format!(
        "SMTP server {}:{} did not respond",
        self.smtp_config.host, self.smtp_config.port
      )))
    }
  }
}
