//! Extract the invoice id path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Invoice id from `/invoices/:id`. A segment that is not an integer can never name an invoice, so it is a 404.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvoiceId(pub i32);

/// Only the plain decimal form names an invoice: no sign prefix, no surrounding whitespace.
pub fn parse_invoice_id(raw: &str) -> Option<i32> {
    if raw.starts_with('+') {
        return None;
    }
    raw.parse().ok()
}

#[async_trait]
impl<S> FromRequestParts<S> for InvoiceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        parse_invoice_id(&raw)
            .map(InvoiceId)
            .ok_or_else(|| AppError::NotFound(format!("invoice {}", raw)))
    }
}
