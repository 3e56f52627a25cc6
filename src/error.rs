use thiserror::Error;

/// Classification of a failed delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
  /// The relay refused the configured credentials.
  Authentication,
  /// The relay could not be reached, TLS failed, or the session timed out.
  Connection,
  /// The relay (or the transport's own message builder) refused the message.
  Rejected,
}

/// The single failure type of outbound delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?} transport error: {message}")]
pub struct TransportError {
  pub kind: TransportErrorKind,
  pub message: String,
}

impl TransportError {
  pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
    Self {
      kind,
      message: message.into(),
    }
  }

  pub fn authentication(message: impl Into<String>) -> Self {
    Self::new(TransportErrorKind::Authentication, message)
  }

  pub fn connection(message: impl Into<String>) -> Self {
    Self::new(TransportErrorKind::Connection, message)
  }

  pub fn rejected(message: impl Into<String>) -> Self {
    Self::new(TransportErrorKind::Rejected, message)
  }

  pub fn is_authentication(&self) -> bool {
    self.kind == TransportErrorKind::Authentication
  }
}

/// Classifies a failed SMTP exchange from its reply code and text.
///
/// 534/535 always mean refused credentials. 530 is only an authentication
/// failure when the relay says so; `530 5.7.0 Must issue a STARTTLS command
/// first` is a TLS setup problem and counts as a connection failure.
pub(crate) fn classify_smtp_failure(status: Option<&str>, text: &str, is_reply: bool) -> TransportErrorKind {
  match status {
    Some("534" | "535") => TransportErrorKind::Authentication,
    Some("530") => {
      let text = text.to_ascii_lowercase();
      if text.contains("starttls") || !text.contains("auth") {
        TransportErrorKind::Connection
      } else {
        TransportErrorKind::Authentication
      }
    }
    _ if is_reply => TransportErrorKind::Rejected,
    _ => TransportErrorKind::Connection,
  }
}

impl From<lettre::transport::smtp::Error> for TransportError {
  fn from(err: lettre::transport::smtp::Error) -> Self {
    let status = err.status().map(|code| code.to_string());
    let message = err.to_string();
    let kind = classify_smtp_failure(status.as_deref(), &message, err.is_permanent() || err.is_transient());
    TransportError::new(kind, message)
  }
}

impl From<lettre::address::AddressError> for TransportError {
  fn from(err: lettre::address::AddressError) -> Self {
    TransportError::rejected(format!("Invalid address: {}", err))
  }
}

impl From<lettre::error::Error> for TransportError {
  fn from(err: lettre::error::Error) -> Self {
    TransportError::rejected(format!("Failed to build message: {}", err))
  }
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("{0} environment variable must be set")]
  Missing(&'static str),

  #[error("{name} has an invalid value: {value}")]
  Invalid { name: &'static str, value: String },
}
