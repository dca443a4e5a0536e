use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

use crate::error::PulseError;
use crate::gauge;
use crate::models::PulseResult;
use crate::pulse::PulseService;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub async fn run(service: Arc<PulseService>, port: u16) -> anyhow::Result<()> {
    let app = router(service);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", port);
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn router(service: Arc<PulseService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_router(service))
        .fallback_service(ServeDir::new("static"))
        .layer(cors)
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
}

fn api_router(service: Arc<PulseService>) -> Router {
    Router::new()
        .route("/pulse", get(get_pulse))
        .route("/gauge.svg", get(get_gauge))
        .with_state(service)
}

#[derive(Deserialize)]
struct PulseParams {
    city: Option<String>,
}

async fn get_pulse(
    State(service): State<Arc<PulseService>>,
    Query(params): Query<PulseParams>,
) -> Result<Json<PulseResult>, PulseError> {
    let city = params.city.unwrap_or_default();
    if city.trim().is_empty() {
        return Err(PulseError::Validation("City is required.".to_string()));
    }

    let result = service.check(&city).await?;
    Ok(Json(result))
}

#[derive(Deserialize)]
struct GaugeParams {
    value: Option<u32>,
}

async fn get_gauge(Query(params): Query<GaugeParams>) -> Response {
    let Some(value) = params.value else {
        return PulseError::Validation("Gauge value is required.".to_string()).into_response();
    };

    (
        [(header::CONTENT_TYPE, "image/svg+xml")],
        gauge::render_svg(value),
    )
        .into_response()
}

impl IntoResponse for PulseError {
    fn into_response(self) -> Response {
        // The original surface keeps two user-visible statuses: 400 for bad
        // input, 500 for every fatal pipeline failure.
        let status = match &self {
            PulseError::Validation(_) => StatusCode::BAD_REQUEST,
            PulseError::NotFound(_)
            | PulseError::Upstream { .. }
            | PulseError::Network(_)
            | PulseError::AllSourcesFailed(_)
            | PulseError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (
                PulseError::Validation("City is required.".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                PulseError::NotFound("Nowhere".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                PulseError::Config("missing key".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                PulseError::AllSourcesFailed("Paris".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
