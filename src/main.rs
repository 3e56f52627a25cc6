use tokio::signal;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use coffee_stay_mailer::app::create_app;
use coffee_stay_mailer::config::AppConfig;
use coffee_stay_mailer::state::SharedAppState;
use coffee_stay_mailer::utils::init_verification_dispatcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = AppConfig::from_env()?;

  let dispatcher = init_verification_dispatcher(&config).await?;
  let app_state = SharedAppState::new(dispatcher);
  let app = create_app(app_state);

  let addr = format!("0.0.0.0:{}", config.http_port);
  let listener = tokio::net::TcpListener::bind(&addr).await?;

  tracing::info!("Server running on http://{}", addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

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

  tracing::info!("Received termination signal, shutting down gracefully...");
}
