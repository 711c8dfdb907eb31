use std::sync::Arc;

use tokio::signal;

use dotenvy::dotenv;

use contact_relay_api::app::create_app;
use contact_relay_api::state::SharedAppState;
use contact_relay_api::{SmtpConfig, SmtpMailer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt::init();

  let mailer = Arc::new(SmtpMailer::new(SmtpConfig::from_env()?)?);
  let app_state = SharedAppState::new(mailer);
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;

  println!("Server running on http://0.0.0.0:8000");

  axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  println!("Received termination signal, shutting down gracefully...");
}
