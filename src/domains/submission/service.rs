use std::error::Error;
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::model::{FileAttachment, SubmissionRequest};
use crate::email::{EmailAttachment, Mailer, OutgoingEmail};

/// Every relayed submission goes out under the same subject line.
pub const SUBMISSION_SUBJECT: &str = "New inquiry from the website";

#[derive(Debug)]
pub enum RelayError {
  Attachment(String),
  Transport(String),
}

impl Error for RelayError {}

impl std::fmt::Display for RelayError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      RelayError::Attachment(msg) => write!(f, "{}", msg),
      RelayError::Transport(msg) => write!(f, "{}", msg),
    }
  }
}

pub struct SubmissionService {
  mailer: Arc<dyn Mailer>,
}

impl SubmissionService {
  pub fn new(mailer: Arc<dyn Mailer>) -> Self {
    Self { mailer }
  }

  /// Relays one submission as a single outbound email: the whole call
  /// succeeds or the whole call fails, never a partial send.
  pub async fn relay(&self, req: SubmissionRequest) -> Result<(), RelayError> {
    let attachments = decode_attachments(&req.files)?;
    let email = OutgoingEmail::new(SUBMISSION_SUBJECT.to_string(), compose_body(&req), attachments);

    self.mailer.send(&email).await.map_err(|e| {
      tracing::error!("Failed to relay submission: {}", e);
      RelayError::Transport(e.to_string())
    })
  }
}

/// Plain text, field values interpolated verbatim. The mailbox this lands in
/// is the site owner's own, so no escaping is applied.
fn compose_body(req: &SubmissionRequest) -> String {
  format!(
    "Name: {}\n\nPhone: {}\n\nE-mail: {}\n\nPractice: {}\n\nComment: {}\n",
    req.name, req.phone, req.email, req.practic, req.comment
  )
}

fn decode_attachments(files: &[Option<FileAttachment>]) -> Result<Vec<EmailAttachment>, RelayError> {
  let mut attachments = Vec::new();

  for file in files.iter().flatten() {
    let content = STANDARD
      .decode(file.content.as_bytes())
      .map_err(|e| RelayError::Attachment(format!("Invalid base64 content for file '{}': {}", file.name, e)))?;

    attachments.push(EmailAttachment {
      filename: file.name.clone(),
      content,
    });
  }

  Ok(attachments)
}
