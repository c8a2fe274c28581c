//! Shared fixtures for the integration tests.

// Each test file is its own crate; not every file uses every helper.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use biztime::{app, bootstrap_schema, AppState};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

/// apple owns invoices 1, 2 and 3 (3 is paid on 2018-01-01); ibm owns invoice 4.
pub const SEED_SQL: &str = include_str!("../../db/seed.sql");

pub const BODY_LIMIT: usize = 64 * 1024;

/// Create the tables, load the seed rows and build the router over `pool`.
pub async fn seeded_app(pool: &PgPool) -> Router {
    bootstrap_schema(pool).await.unwrap();
    sqlx::raw_sql(SEED_SQL).execute(pool).await.unwrap();
    app(AppState::new(pool.clone()), BODY_LIMIT)
}

pub fn request(method: Method, uri: &str, body: Option<&Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send one request and decode the JSON response body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request(method, uri, body.as_ref()))
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
