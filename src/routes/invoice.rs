//! Invoice CRUD routes.

use crate::handlers::invoice::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn invoice_routes(state: AppState) -> Router {
    Router::new()
        .route("/invoices", get(list).post(create))
        .route("/invoices/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
