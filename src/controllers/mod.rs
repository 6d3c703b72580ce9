pub mod availability;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

/// Маршруты под `/api`.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(availability::routes())
}

/// Полный роутер приложения со слоями трассировки и CORS.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Show Availability API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
