use std::env;
use std::time::Duration;

use crate::email::SmtpConfig;
use crate::error::ConfigError;

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_FROM_NAME: &str = "Coffee Stay";
const DEFAULT_HTTP_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Base of the verification link, used verbatim.
  pub server_url: String,
  pub smtp: SmtpConfig,
  pub http_port: u16,
}

impl AppConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let server_url = required("SERVER_URL")?;
    let username = required("EMAIL_USER")?;
    let password = required("EMAIL_PASS")?;

    let smtp = SmtpConfig {
      host: env::var("SMTP_HOST").unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_string()),
      port: parsed("SMTP_PORT")?.unwrap_or(DEFAULT_SMTP_PORT),
      from_email: username.clone(),
      from_name: env::var("EMAIL_FROM_NAME").unwrap_or_else(|_| DEFAULT_FROM_NAME.to_string()),
      username,
      password,
      timeout: parsed::<u64>("SMTP_TIMEOUT_SECS")?.map(Duration::from_secs),
    };

    Ok(Self {
      server_url,
      smtp,
      http_port: parsed("PORT")?.unwrap_or(DEFAULT_HTTP_PORT),
    })
  }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
  match env::var(name) {
    Ok(value) if !value.is_empty() => Ok(value),
    _ => Err(ConfigError::Missing(name)),
  }
}

fn parsed<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
  match env::var(name) {
    Ok(value) => value
      .parse()
      .map(Some)
      .map_err(|_| ConfigError::Invalid { name, value }),
    Err(_) => Ok(None),
  }
}
