//! End-to-end tests driving the router against an in-memory SQLite
//! database.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use climate_api::{create_router, ApiState};
use climate_store::ClimateStore;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

/// Two stations; USC00519281 is the most active. Most recent date in the
/// dataset is 2017-08-25, so the trailing-year cutoff is 2016-08-25.
async fn app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::raw_sql(
        "CREATE TABLE measurement (
             id INTEGER PRIMARY KEY,
             station TEXT NOT NULL,
             date TEXT NOT NULL,
             prcp REAL,
             tobs REAL NOT NULL
         );
         CREATE TABLE station (
             id INTEGER PRIMARY KEY,
             station TEXT NOT NULL,
             name TEXT NOT NULL,
             latitude REAL NOT NULL,
             longitude REAL NOT NULL,
             elevation REAL NOT NULL
         );
         INSERT INTO measurement (station, date, prcp, tobs) VALUES
             ('USC00519281', '2016-05-01', NULL, 70.0),
             ('USC00519281', '2017-08-23', 0.45, 80.0),
             ('USC00519281', '2017-08-24', 0.00, 82.0),
             ('USC00519281', '2017-08-25', 0.08, 78.0),
             ('USC00519397', '2016-09-01', 0.02, 71.0),
             ('USC00519397', '2017-08-23', 0.05, 76.0);
         INSERT INTO station (station, name, latitude, longitude, elevation) VALUES
             ('USC00519281', 'WAIHEE 837.5, HI US', 21.4517, -157.8489, 32.9),
             ('USC00519397', 'WAIKIKI 717.2, HI US', 21.2716, -157.8168, 3.0);",
    )
    .execute(&pool)
    .await
    .unwrap();

    create_router(ApiState {
        store: ClimateStore::from_pool(pool),
    })
}

async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn index_lists_routes() {
    let (status, body) = get(app().await, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/api/v1.0/precipitation"));
    assert!(body.contains("/api/v1.0/tobs"));
}

#[tokio::test]
async fn precipitation_returns_all_pairs_in_table_order() {
    let (status, body) = get(app().await, "/api/v1.0/precipitation").await;
    assert_eq!(status, StatusCode::OK);

    let records: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(records.len(), 6);
    assert_eq!(records[0]["date"], "2016-05-01");
    assert!(records[0]["prcp"].is_null());
    assert_eq!(records[1]["prcp"], 0.45);
}

#[tokio::test]
async fn stations_returns_every_column() {
    let (status, body) = get(app().await, "/api/v1.0/stations").await;
    assert_eq!(status, StatusCode::OK);

    let records: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(records.len(), 2);
    let first = &records[0];
    for key in ["id", "station", "name", "latitude", "longitude", "elevation"] {
        assert!(first.get(key).is_some(), "missing column {key}");
    }
    assert_eq!(first["name"], "WAIHEE 837.5, HI US");
}

#[tokio::test]
async fn tobs_returns_top_station_trailing_year_only() {
    let (status, body) = get(app().await, "/api/v1.0/tobs").await;
    assert_eq!(status, StatusCode::OK);

    let records: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    // Cutoff 2016-08-25 excludes the 2016-05-01 row; the other station's
    // 2016-09-01 row is inside the window but belongs to the wrong station.
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["date"], "2017-08-23");
    assert_eq!(records[0]["tobs"], 80.0);
    assert_eq!(records[2]["date"], "2017-08-25");
}

#[tokio::test]
async fn stats_from_date_excludes_earlier_days() {
    // Worked example: requesting from 2017-08-24 drops the 08-23 group.
    let (status, body) = get(app().await, "/api/v1.0/2017-08-24").await;
    assert_eq!(status, StatusCode::OK);

    let records: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["date"], "2017-08-24");
    assert_eq!(records[0]["Min_Temp"], 82.0);
    assert_eq!(records[0]["Avg_Temp"], 82.0);
    assert_eq!(records[0]["Max_Temp"], 82.0);
    assert_eq!(records[1]["date"], "2017-08-25");
}

#[tokio::test]
async fn stats_records_keep_contract_key_order() {
    let (_, body) = get(app().await, "/api/v1.0/2017-08-24").await;

    let date = body.find("\"date\"").unwrap();
    let min = body.find("\"Min_Temp\"").unwrap();
    let avg = body.find("\"Avg_Temp\"").unwrap();
    let max = body.find("\"Max_Temp\"").unwrap();
    assert!(date < min && min < avg && avg < max);
}

#[tokio::test]
async fn stats_aggregate_across_stations() {
    let (status, body) = get(app().await, "/api/v1.0/2017-08-23").await;
    assert_eq!(status, StatusCode::OK);

    let records: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    // 2017-08-23 has tobs 80.0 and 76.0 across the two stations.
    assert_eq!(records[0]["date"], "2017-08-23");
    assert_eq!(records[0]["Min_Temp"], 76.0);
    assert_eq!(records[0]["Avg_Temp"], 78.0);
    assert_eq!(records[0]["Max_Temp"], 80.0);
}

#[tokio::test]
async fn stats_accept_fallback_date_format() {
    let (status, body) = get(app().await, "/api/v1.0/20170824").await;
    assert_eq!(status, StatusCode::OK);

    let records: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn range_is_inclusive_at_both_ends() {
    let (status, body) = get(app().await, "/api/v1.0/2017-08-23/2017-08-24").await;
    assert_eq!(status, StatusCode::OK);

    let records: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["date"], "2017-08-23");
    assert_eq!(records[1]["date"], "2017-08-24");
}

#[tokio::test]
async fn malformed_date_returns_format_hint() {
    let (status, body) = get(app().await, "/api/v1.0/not-a-date").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("YYYY-MM-DD"));
}

#[tokio::test]
async fn malformed_range_date_returns_format_hint() {
    let (status, body) = get(app().await, "/api/v1.0/2017-08-23/never").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("YYYY-MM-DD"));
}

#[tokio::test]
async fn inverted_range_is_rejected() {
    let (status, body) = get(app().await, "/api/v1.0/2018-01-01/2017-01-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Invalid range"));
    assert!(body.contains("2018-01-01"));
    assert!(body.contains("2017-01-01"));
}

#[tokio::test]
async fn empty_result_is_distinct_from_validation_errors() {
    let (status, body) = get(app().await, "/api/v1.0/2020-01-01").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("No records"));
    assert!(!body.contains("YYYY-MM-DD"));
}

#[tokio::test]
async fn empty_range_result_is_no_records() {
    let (status, body) = get(app().await, "/api/v1.0/2019-01-01/2019-12-31").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("No records"));
}
