//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use chrono::Local;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domain::City;
use crate::hebcal::{HebcalError, extract_times, parse_items};

use super::dto::*;
use super::error::AppError;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/test", get(self_test))
        .route("/api/cities", get(list_cities))
        .route("/api/shabbat", get(shabbat_times))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Public, unauthenticated API: any origin, method and header, with
/// credentials. Wildcards cannot be combined with credentials, so the
/// request's own origin, method and headers are mirrored back.
fn cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Root status message.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Shabbat Times API is running",
    })
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Deployment smoke check. Always reports healthy; there is no store to probe.
async fn self_test(State(state): State<AppState>) -> Json<SelfTestResponse> {
    Json(SelfTestResponse {
        backend: "✅ Running",
        cities_count: state.catalog.len(),
        example_city: state.catalog.first(),
    })
}

/// List every city in the catalog.
async fn list_cities(State(state): State<AppState>) -> Json<&'static [City]> {
    Json(state.catalog.list())
}

/// This week's Shabbat times for one city.
async fn shabbat_times(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ShabbatTimes>, AppError> {
    let Query(pairs) = query.map_err(|e| AppError::Validation {
        message: e.body_text(),
    })?;

    let slug = ShabbatQuery::from_pairs(pairs).city.ok_or_else(|| AppError::Validation {
        message: "Missing required query parameter: city".to_string(),
    })?;

    let city = state.catalog.find(&slug)?;

    let raw = state.hebcal.fetch_shabbat(city).await?;
    let items = parse_items(&raw).map_err(HebcalError::from)?;
    let times = extract_times(&items);

    tracing::debug!(
        city = city.slug,
        candle_lighting = ?times.candle_lighting,
        havdalah = ?times.havdalah,
        "resolved shabbat times"
    );

    let today = Local::now().date_naive();

    Ok(Json(ShabbatTimes::new(city, today, times, raw)))
}
