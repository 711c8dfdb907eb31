use crate::email::types::{OutgoingEmail, SmtpConfig};
use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Attachment, MultiPart, SinglePart},
  transport::smtp::{
    authentication::Credentials,
    client::{Tls, TlsParameters},
  },
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// SMTP connection, authentication, or send rejection, carrying the
/// underlying description for the error-status response.
#[derive(Debug)]
pub struct TransportError(pub String);

impl std::fmt::Display for TransportError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl std::error::Error for TransportError {}

impl TransportError {
  fn from_err(e: impl std::fmt::Display) -> Self {
    TransportError(e.to_string())
  }
}

#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, email: &OutgoingEmail) -> Result<(), TransportError>;
}

pub struct SmtpMailer {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      // Implicit TLS on port 465, the only mode the provider accepts.
      let tls = TlsParameters::builder(smtp_config.host.clone())
        .dangerous_accept_invalid_certs(smtp_config.accept_invalid_certs)
        .build()?;

      AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .tls(Tls::Wrapper(tls))
        .build()
    };

    Ok(SmtpMailer {
      smtp_config,
      transporter,
    })
  }

  fn build_message(&self, email: &OutgoingEmail) -> Result<Message, TransportError> {
    let account = self.smtp_config.account_address();
    let builder = Message::builder()
      .from(account.parse().map_err(TransportError::from_err)?)
      .to(account.parse().map_err(TransportError::from_err)?)
      .subject(&email.subject);

    if email.attachments.is_empty() {
      return builder
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())
        .map_err(TransportError::from_err);
    }

    let octet_stream = ContentType::parse("application/octet-stream").map_err(TransportError::from_err)?;
    let mut multipart = MultiPart::mixed().singlepart(SinglePart::plain(email.body.clone()));
    for attachment in &email.attachments {
      multipart = multipart.singlepart(
        Attachment::new(attachment.filename.clone()).body(attachment.content.clone(), octet_stream.clone()),
      );
    }

    builder.multipart(multipart).map_err(TransportError::from_err)
  }
}

#[async_trait]
impl Mailer for SmtpMailer {
  async fn send(&self, email: &OutgoingEmail) -> Result<(), TransportError> {
    let message = self.build_message(email)?;
    self.transporter.send(message).await.map_err(TransportError::from_err)?;
    Ok(())
  }
}
