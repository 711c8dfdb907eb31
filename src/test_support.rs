use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  email::{Mailer, OutgoingEmail, TransportError},
  state::SharedAppState,
};

/// Recording stand-in for the SMTP transport.
pub struct MockMailer {
  fail_with: Option<String>,
  sent: Mutex<Vec<OutgoingEmail>>,
}

impl MockMailer {
  pub fn succeeding() -> Self {
    Self {
      fail_with: None,
      sent: Mutex::new(Vec::new()),
    }
  }

  pub fn failing(message: &str) -> Self {
    Self {
      fail_with: Some(message.to_string()),
      sent: Mutex::new(Vec::new()),
    }
  }

  pub fn sent(&self) -> Vec<OutgoingEmail> {
    self.sent.lock().expect("lock sent emails").clone()
  }
}

#[async_trait]
impl Mailer for MockMailer {
  async fn send(&self, email: &OutgoingEmail) -> Result<(), TransportError> {
    if let Some(message) = &self.fail_with {
      return Err(TransportError(message.clone()));
    }

    self.sent.lock().expect("lock sent emails").push(email.clone());
    Ok(())
  }
}

pub fn app_with_mailer(mailer: Arc<dyn Mailer>) -> Router {
  let state = SharedAppState::new(mailer);
  create_app(state)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
