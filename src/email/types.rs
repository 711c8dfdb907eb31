use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  /// The provider used by the site presents a certificate that does not
  /// always validate; relaxed checking is the documented default and can be
  /// turned off with SMTP_ACCEPT_INVALID_CERTS=false.
  pub accept_invalid_certs: bool,
}

impl SmtpConfig {
  pub fn from_env() -> Result<Self> {
    let host = env::var("SMTP_HOST").context("SMTP_HOST not set")?;
    let port = env::var("SMTP_PORT")
      .unwrap_or_else(|_| "465".to_string())
      .parse()
      .context("SMTP_PORT must be a port number")?;
    let username = env::var("SMTP_USERNAME").context("SMTP_USERNAME not set")?;
    let password = env::var("SMTP_PASSWORD").context("SMTP_PASSWORD not set")?;
    let accept_invalid_certs = env::var("SMTP_ACCEPT_INVALID_CERTS")
      .map(|v| v == "true" || v == "1")
      .unwrap_or(true);

    Ok(SmtpConfig {
      host,
      port,
      username,
      password,
      accept_invalid_certs,
    })
  }

  /// The mailbox the relay both sends from and delivers to.
  pub fn account_address(&self) -> &str {
    &self.username
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingEmail {
  pub subject: String,
  pub body: String,
  pub attachments: Vec<EmailAttachment>,
}

impl OutgoingEmail {
  pub fn new(subject: String, body: String, attachments: Vec<EmailAttachment>) -> Self {
    OutgoingEmail {
      subject,
      body,
      attachments,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAttachment {
  pub filename: String,
  pub content: Vec<u8>,
}
