//! availability.rs
//!
//! HTTP-обработчики запросов доступности мест:
//! - `GET /api/shows/{show_id}/availability` - полный отчет по сеансу.
//! - `GET /api/shows/{show_id}/availability/{category}` - одна категория мест.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::error::AvailabilityError;
use crate::models::{AvailabilityReport, SeatStats};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/shows/{show_id}/availability", get(get_show_availability))
        .route("/shows/{show_id}/availability/{category}", get(get_category_availability))
}

async fn get_show_availability(
    State(state): State<Arc<AppState>>,
    Path(show_id): Path<i32>,
) -> Result<Json<AvailabilityReport>, AvailabilityError> {
    let report = state.availability.get_availability(show_id).await?;
    Ok(Json(report))
}

async fn get_category_availability(
    State(state): State<Arc<AppState>>,
    Path((show_id, category)): Path<(i32, String)>,
) -> Result<Json<SeatStats>, AvailabilityError> {
    let stats = state
        .availability
        .get_category_availability(show_id, &category)
        .await?;
    Ok(Json(stats))
}
