//! Query execution for invoices.

use crate::error::AppError;
use crate::model::{Invoice, InvoiceChanges, InvoiceCompanyRow, InvoiceDetail, InvoiceSummary, NewInvoice};
use crate::sql::invoice as sql;
use sqlx::PgPool;

pub struct InvoiceService;

impl InvoiceService {
    /// All invoices, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<InvoiceSummary>, AppError> {
        tracing::debug!(sql = %sql::LIST, "query");
        let rows = sqlx::query_as::<_, InvoiceSummary>(sql::LIST)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// One invoice with its company nested. None when the id is unknown.
    pub async fn read(pool: &PgPool, id: i32) -> Result<Option<InvoiceDetail>, AppError> {
        tracing::debug!(sql = %sql::SELECT_WITH_COMPANY, id, "query");
        let row = sqlx::query_as::<_, InvoiceCompanyRow>(sql::SELECT_WITH_COMPANY)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(InvoiceDetail::from))
    }

    /// Insert one invoice; `paid` and `add_date` take their column defaults.
    pub async fn create(pool: &PgPool, body: &NewInvoice) -> Result<Option<Invoice>, AppError> {
        tracing::debug!(sql = %sql::INSERT, comp_code = %body.comp_code, "query");
        let row = sqlx::query_as::<_, Invoice>(sql::INSERT)
            .bind(&body.comp_code)
            .bind(body.amt)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn update(
        pool: &PgPool,
        id: i32,
        changes: &InvoiceChanges,
    ) -> Result<Option<Invoice>, AppError> {
        tracing::debug!(sql = %sql::UPDATE, id, "query");
        let row = sqlx::query_as::<_, Invoice>(sql::UPDATE)
            .bind(id)
            .bind(changes.amt)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Delete by id. Returns the deleted id, or None when nothing matched.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<Option<i32>, AppError> {
        tracing::debug!(sql = %sql::DELETE, id, "query");
        let deleted = sqlx::query_scalar::<_, i32>(sql::DELETE)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(deleted)
    }
}
