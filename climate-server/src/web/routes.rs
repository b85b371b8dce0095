//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::store::{StoreError, TemperatureSummary};

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/:start", get(summary_from))
        .route("/api/v1.0/:start/:end", get(summary_between))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page listing the API routes.
///
/// Rendered through `askama_axum`, which answers 500 if the template fails.
async fn index_page() -> impl askama_axum::IntoResponse {
    debug!("serving home page");
    IndexTemplate::default()
}

/// Average precipitation per date over the last twelve months of data.
async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<PrecipitationResponse>, AppError> {
    debug!("serving precipitation");
    let by_date = state.store.last_year_precipitation().await?;
    Ok(Json(by_date))
}

/// Stations that have measurements.
async fn stations(State(state): State<AppState>) -> Result<Json<StationsResponse>, AppError> {
    debug!("serving stations");
    let stations = state.store.stations().await?;
    Ok(Json(stations))
}

/// Last twelve months of temperatures at the most-observed station.
async fn tobs(State(state): State<AppState>) -> Result<Json<TobsResponse>, AppError> {
    debug!("serving tobs");
    let by_date = state.store.busiest_station_last_year_temperatures().await?;
    Ok(Json([by_date]))
}

/// Temperature summary from `start` onwards.
async fn summary_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureSummary>, AppError> {
    debug!(%start, "serving temperature summary");
    let summary = state.store.temperature_summary(start, None).await?;
    Ok(Json(summary))
}

/// Temperature summary between `start` and `end`, inclusive.
async fn summary_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureSummary>, AppError> {
    debug!(%start, %end, "serving temperature summary");
    let summary = state.store.temperature_summary(start, Some(end)).await?;
    Ok(Json(summary))
}

async fn not_found() -> AppError {
    AppError::NotFound {
        message: "no such route".to_string(),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
