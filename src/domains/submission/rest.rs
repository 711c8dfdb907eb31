use axum::{
  extract::{Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{RelayResponse, SubmissionRequest};
use crate::state::{AppState, SharedAppState};

pub fn submission_routes() -> Router<SharedAppState> {
  Router::new().route("/send-email", post(send_email_handler))
}

/// Always responds 200; the outcome is carried in the JSON `status` field,
/// which is the only contract the form front end relies on.
pub async fn send_email_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<SubmissionRequest>,
) -> JsonResponse<RelayResponse> {
  match state.relay_submission(payload).await {
    Ok(()) => JsonResponse(RelayResponse::success()),
    Err(e) => JsonResponse(RelayResponse::error(e.to_string())),
  }
}
