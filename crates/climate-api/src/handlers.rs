//! Request handlers for the query endpoints.

use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use climate_store::{
    ClimateStore, DailyTemperature, PrecipitationReading, Station, TemperatureReading,
};
use tracing::debug;

use crate::dates;
use crate::error::ApiError;

/// Shared state for the router. Clones share one connection pool.
#[derive(Clone)]
pub struct ApiState {
    pub store: ClimateStore,
}

/// `GET /` — HTML listing of the available API routes.
pub async fn index() -> Html<&'static str> {
    Html(
        "<h1>Available Routes:</h1>\
         <ul>\
         <li>/api/v1.0/precipitation</li>\
         <li>/api/v1.0/stations</li>\
         <li>/api/v1.0/tobs</li>\
         <li>/api/v1.0/2017-08-23</li>\
         <li>/api/v1.0/2017-08-23/2017-08-30</li>\
         </ul>",
    )
}

/// `GET /api/v1.0/precipitation` — every (date, prcp) pair, table order.
pub async fn precipitation(
    State(state): State<ApiState>,
) -> Result<Json<Vec<PrecipitationReading>>, ApiError> {
    let readings = state.store.precipitation().await?;
    Ok(Json(readings))
}

/// `GET /api/v1.0/stations` — every station row, all columns.
pub async fn stations(State(state): State<ApiState>) -> Result<Json<Vec<Station>>, ApiError> {
    let stations = state.store.stations().await?;
    Ok(Json(stations))
}

/// `GET /api/v1.0/tobs` — temperature observations of the most active
/// station over the trailing calendar year.
pub async fn last_year_temperatures(
    State(state): State<ApiState>,
) -> Result<Json<Vec<TemperatureReading>>, ApiError> {
    let latest = state
        .store
        .most_recent_date()
        .await?
        .ok_or(ApiError::NoRecords)?;

    let latest = dates::parse_date(&latest).ok_or_else(|| {
        ApiError::BadData(format!("most recent measurement date is not a date: {latest}"))
    })?;
    let cutoff = dates::to_iso(dates::one_year_before(latest));

    let station = state
        .store
        .busiest_station()
        .await?
        .ok_or(ApiError::NoRecords)?;

    debug!(%station, %cutoff, "querying trailing-year observations");
    let readings = state
        .store
        .temperature_observations(&station, &cutoff)
        .await?;
    Ok(Json(readings))
}

/// `GET /api/v1.0/:start` — per-date MIN/AVG/MAX temperature statistics
/// from the given date onwards.
pub async fn stats_from_date(
    State(state): State<ApiState>,
    Path(start): Path<String>,
) -> Result<Json<Vec<DailyTemperature>>, ApiError> {
    let start = dates::parse_date(&start).ok_or(ApiError::InvalidDate(start))?;

    let stats = state
        .store
        .daily_temperature_stats(&dates::to_iso(start), None)
        .await?;

    if stats.is_empty() {
        return Err(ApiError::NoRecords);
    }
    Ok(Json(stats))
}

/// `GET /api/v1.0/:start/:end` — the same statistics over an inclusive
/// date range.
pub async fn stats_for_range(
    State(state): State<ApiState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<DailyTemperature>>, ApiError> {
    let start = dates::parse_date(&start).ok_or(ApiError::InvalidDate(start))?;
    let end = dates::parse_date(&end).ok_or(ApiError::InvalidDate(end))?;

    // Reject before touching the store.
    if start > end {
        return Err(ApiError::InvalidRange { start, end });
    }

    let stats = state
        .store
        .daily_temperature_stats(&dates::to_iso(start), Some(&dates::to_iso(end)))
        .await?;

    if stats.is_empty() {
        return Err(ApiError::NoRecords);
    }
    Ok(Json(stats))
}
