//! Row models for the two dataset tables.
//!
//! Dates are ISO-8601 `YYYY-MM-DD` strings throughout; the dataset relies
//! on lexicographic order coinciding with chronological order, so they are
//! kept as strings rather than parsed into date types.

use serde::Serialize;
use sqlx::FromRow;

/// One `(date, prcp)` pair from the measurement table. Precipitation is
/// nullable in the source data.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

/// A full row of the station table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Station {
    pub id: i64,
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// One `(date, tobs)` temperature observation.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TemperatureReading {
    pub date: String,
    pub tobs: f64,
}

/// Per-date temperature aggregate. Serialized key order is part of the
/// response contract: date, Min_Temp, Avg_Temp, Max_Temp.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct DailyTemperature {
    pub date: String,
    #[serde(rename = "Min_Temp")]
    pub min_temp: f64,
    #[serde(rename = "Avg_Temp")]
    pub avg_temp: f64,
    #[serde(rename = "Max_Temp")]
    pub max_temp: f64,
}
