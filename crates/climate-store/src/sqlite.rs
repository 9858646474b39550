//! SQLite-backed climate store.
//!
//! Every method borrows a pooled connection for the duration of one read
//! query; the pool returns it on every exit path, including errors.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::models::{DailyTemperature, PrecipitationReading, Station, TemperatureReading};

/// Handle to the climate observation database.
///
/// Cheap to clone; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ClimateStore {
    pool: SqlitePool,
}

impl ClimateStore {
    /// Open a connection pool against the given SQLite URL.
    pub async fn connect(url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(StoreError::Connect)?;

        info!(url, "connected to climate database");
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Every `(date, prcp)` pair in table-scan order.
    pub async fn precipitation(&self) -> StoreResult<Vec<PrecipitationReading>> {
        let readings = sqlx::query_as::<_, PrecipitationReading>(
            "SELECT date, prcp FROM measurement",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = readings.len(), "fetched precipitation readings");
        Ok(readings)
    }

    /// Every station row, table order.
    pub async fn stations(&self) -> StoreResult<Vec<Station>> {
        let stations = sqlx::query_as::<_, Station>(
            "SELECT id, station, name, latitude, longitude, elevation FROM station",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(stations)
    }

    /// Most recent observation date, or `None` for an empty table.
    pub async fn most_recent_date(&self) -> StoreResult<Option<String>> {
        let date = sqlx::query_scalar::<_, Option<String>>("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;

        Ok(date)
    }

    /// Station id with the highest observation count. Ties break to the
    /// lexicographically lowest station id so the result is deterministic.
    pub async fn busiest_station(&self) -> StoreResult<Option<String>> {
        let station = sqlx::query_scalar::<_, String>(
            "SELECT station FROM measurement \
             GROUP BY station \
             ORDER BY COUNT(*) DESC, station ASC \
             LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(station)
    }

    /// Temperature observations for one station from `from` onwards,
    /// ascending by date.
    pub async fn temperature_observations(
        &self,
        station: &str,
        from: &str,
    ) -> StoreResult<Vec<TemperatureReading>> {
        let readings = sqlx::query_as::<_, TemperatureReading>(
            "SELECT date, tobs FROM measurement \
             WHERE station = ?1 AND date >= ?2 \
             ORDER BY date ASC",
        )
        .bind(station)
        .bind(from)
        .fetch_all(&self.pool)
        .await?;

        Ok(readings)
    }

    /// Per-date MIN/AVG/MAX of temperature observations with
    /// `date >= from` (and `date <= to` when given), ascending by date.
    /// Averages are rounded to 2 decimal places.
    pub async fn daily_temperature_stats(
        &self,
        from: &str,
        to: Option<&str>,
    ) -> StoreResult<Vec<DailyTemperature>> {
        let mut stats = match to {
            Some(to) => {
                sqlx::query_as::<_, DailyTemperature>(
                    "SELECT date, \
                            MIN(tobs) AS min_temp, \
                            AVG(tobs) AS avg_temp, \
                            MAX(tobs) AS max_temp \
                     FROM measurement \
                     WHERE date >= ?1 AND date <= ?2 \
                     GROUP BY date \
                     ORDER BY date ASC",
                )
                .bind(from)
                .bind(to)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, DailyTemperature>(
                    "SELECT date, \
                            MIN(tobs) AS min_temp, \
                            AVG(tobs) AS avg_temp, \
                            MAX(tobs) AS max_temp \
                     FROM measurement \
                     WHERE date >= ?1 \
                     GROUP BY date \
                     ORDER BY date ASC",
                )
                .bind(from)
                .fetch_all(&self.pool)
                .await?
            }
        };

        for record in &mut stats {
            record.avg_temp = round2(record.avg_temp);
        }

        Ok(stats)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
