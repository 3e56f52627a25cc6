use axum::{response::Html, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{domains::verification::rest::verification_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/", get(health_handler))
    .nest("/api/v1", verification_routes())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

pub async fn health_handler() -> Html<String> {
  Html("<h1>Coffee Stay mailer is running</h1>".to_string())
}
