//! Router assembly.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    index, last_year_temperatures, precipitation, stations, stats_for_range, stats_from_date,
    ApiState,
};

/// Build the service router.
///
/// Static segments win over the `:start` capture, so the fixed listings
/// are not shadowed by the date routes.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(last_year_temperatures))
        .route("/api/v1.0/:start", get(stats_from_date))
        .route("/api/v1.0/:start/:end", get(stats_for_range))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
