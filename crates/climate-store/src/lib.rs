//! Read-only access to the climate observation dataset.
//!
//! The schema is declared statically: two tables, `measurement` and
//! `station`, owned and populated by an external pipeline. This crate
//! only ever reads them.

pub mod error;
pub mod models;
pub mod sqlite;

pub use error::StoreError;
pub use models::{DailyTemperature, PrecipitationReading, Station, TemperatureReading};
pub use sqlite::ClimateStore;
