use std::sync::Arc;

use crate::domains::submission::{
  model::SubmissionRequest,
  service::{RelayError, SubmissionService},
};
use crate::email::Mailer;

pub trait AppState: Clone + Send + Sync + 'static {
  fn relay_submission(
    &self,
    req: SubmissionRequest,
  ) -> impl std::future::Future<Output = Result<(), RelayError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub submission_service: Arc<SubmissionService>,
}

impl SharedAppState {
  pub fn new(mailer: Arc<dyn Mailer>) -> Self {
    let submission_service = Arc::new(SubmissionService::new(mailer));

    Self { submission_service }
  }
}

impl AppState for SharedAppState {
  async fn relay_submission(&self, req: SubmissionRequest) -> Result<(), RelayError> {
    self.submission_service.relay(req).await
  }
}
