//! Invoice handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::{ApiJson, InvoiceId};
use crate::model::{InvoiceChanges, NewInvoice};
use crate::response;
use crate::service::{InvoiceService, RequestValidator};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = InvoiceService::list(&state.pool).await?;
    Ok(response::invoices(rows))
}

pub async fn read(
    State(state): State<AppState>,
    InvoiceId(id): InvoiceId,
) -> Result<impl IntoResponse, AppError> {
    let invoice = InvoiceService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("invoice {}", id)))?;
    Ok(response::invoice(invoice))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewInvoice>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::require(&[("comp_code", body.comp_code.as_str())])?;
    let invoice = InvoiceService::create(&state.pool, &body)
        .await?
        .ok_or_else(|| AppError::BadRequest("invoice not created".into()))?;
    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");
    Ok(response::invoice(invoice))
}

pub async fn update(
    State(state): State<AppState>,
    InvoiceId(id): InvoiceId,
    ApiJson(body): ApiJson<InvoiceChanges>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = InvoiceService::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("invoice {}", id)))?;
    Ok(response::invoice(invoice))
}

pub async fn delete(
    State(state): State<AppState>,
    InvoiceId(id): InvoiceId,
) -> Result<impl IntoResponse, AppError> {
    InvoiceService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("invoice {}", id)))?;
    tracing::info!(id, "invoice deleted");
    Ok(response::deleted())
}
