//! API error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chrono::NaiveDate;
use climate_store::StoreError;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the query endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller supplied a date string no accepted format matches.
    #[error("unrecognized date: {0}")]
    InvalidDate(String),

    /// Range query with start strictly after end.
    #[error("start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Valid request, but nothing in the dataset matches.
    #[error("no matching records")]
    NoRecords,

    /// Database fault; details go to the log, not the response.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Dataset content the service cannot work with.
    #[error("{0}")]
    BadData(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidDate(input) => (
                StatusCode::BAD_REQUEST,
                format!(
                    "<h3>Could not parse date '{}'. Please use the YYYY-MM-DD format.</h3>",
                    escape_html(input)
                ),
            ),
            ApiError::InvalidRange { start, end } => (
                StatusCode::BAD_REQUEST,
                format!(
                    "<h3>Invalid range: start date {} is after end date {}.</h3>",
                    start, end
                ),
            ),
            ApiError::NoRecords => (
                StatusCode::NOT_FOUND,
                "<h3>No records found for the requested dates.</h3>".to_string(),
            ),
            ApiError::Store(e) => {
                error!(error = %e, "store query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "<h3>Internal server error.</h3>".to_string(),
                )
            }
            ApiError::BadData(message) => {
                error!(message, "unusable dataset content");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "<h3>Internal server error.</h3>".to_string(),
                )
            }
        };

        (status, Html(body)).into_response()
    }
}

/// The invalid-date message echoes caller input.
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
