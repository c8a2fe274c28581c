//! Company CRUD routes.

use crate::handlers::company::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn company_routes(state: AppState) -> Router {
    Router::new()
        .route("/companies", get(list).post(create))
        .route("/companies/:code", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
