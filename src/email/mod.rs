//! Outbound email via an external SMTP provider.
//!
//! The `Mailer` trait is the seam between the submission domain and the
//! transport; `SmtpMailer` is the lettre-backed implementation used in
//! production.

mod service;
mod types;

pub use service::{Mailer, SmtpMailer, TransportError};
pub use types::{EmailAttachment, OutgoingEmail, SmtpConfig};
