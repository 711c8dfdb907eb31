use axum::{response::Html, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{domains::submission::rest::submission_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  // The form is posted from a static site on a different origin, and the
  // endpoint carries no credentials, so permissive CORS is enough.
  Router::new()
    .route("/", get(hello_world_handler))
    .nest("/api", submission_routes())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

pub async fn hello_world_handler() -> Html<String> {
  Html("<h1>Contact relay is running</h1>".to_string())
}
