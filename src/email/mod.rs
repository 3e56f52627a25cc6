//! Verification email delivery
//!
//! Messages are built by [`VerificationDispatcher`] and handed to a
//! [`MailTransport`]. [`SmtpMailTransport`] is the production transport and is
//! backed by lettre's pooled async SMTP client.

mod dispatcher;
mod smtp;
mod template;
mod transport;
mod types;

pub use dispatcher::VerificationDispatcher;
pub use smtp::SmtpMailTransport;
pub use template::{build_verification_url, render_verification_html, VERIFICATION_SUBJECT};
pub use transport::{spawn_connectivity_probe, MailTransport};
pub use types::{DeliveryReceipt, EmailMessage, SmtpConfig};
