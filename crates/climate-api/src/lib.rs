//! HTTP query endpoints over the climate observation dataset.
//!
//! Six GET routes: an HTML index, three fixed listings (precipitation,
//! stations, trailing-year temperature observations) and two date-filtered
//! temperature statistics endpoints.

pub mod dates;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use handlers::ApiState;
pub use routes::create_router;
pub use server::{serve, ServeError};
