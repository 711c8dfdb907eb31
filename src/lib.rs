pub mod app;
pub mod domains;
pub mod email;
pub mod state;

#[cfg(test)]
mod test_support;

pub use email::{Mailer, SmtpConfig, SmtpMailer};
