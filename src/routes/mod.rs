//! Router assembly: operational routes, both resources, a JSON 404 fallback, and the request layers.

mod common;
mod company;
mod invoice;

pub use common::common_routes_with_ready;
pub use company::company_routes;
pub use invoice::invoice_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, http::Uri, Router};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

/// Full application router. Bodies larger than `body_limit` bytes are rejected with 413.
/// axum's own 2 MiB extractor cap is disabled so `body_limit` is the only limit.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(company_routes(state.clone()))
        .merge(invoice_routes(state))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
}
