use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Через сколько секунд клиенту стоит повторить запрос при 503.
const RETRY_AFTER_SECONDS: &str = "5";

#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Подробности сбоя только для логов, клиенту уходит общее сообщение.
    #[error("data source unavailable")]
    DataSourceUnavailable(String),
}

impl AvailabilityError {
    pub fn show_not_found(id: i32) -> Self {
        Self::NotFound { entity: "Show", id: id.to_string() }
    }

    pub fn screen_not_found(id: i32) -> Self {
        Self::NotFound { entity: "Screen", id: id.to_string() }
    }

    pub fn category_not_found(label: &str) -> Self {
        Self::NotFound { entity: "Seat category", id: label.to_string() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DataSourceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<sqlx::Error> for AvailabilityError {
    fn from(err: sqlx::Error) -> Self {
        Self::DataSourceUnavailable(err.to_string())
    }
}

impl IntoResponse for AvailabilityError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));

        match self {
            Self::DataSourceUnavailable(detail) => {
                tracing::error!("Responding 503: {}", detail);
                (status, [(header::RETRY_AFTER, RETRY_AFTER_SECONDS)], body).into_response()
            }
            Self::NotFound { .. } => (status, body).into_response(),
        }
    }
}

pub type AvailabilityResult<T> = Result<T, AvailabilityError>;
