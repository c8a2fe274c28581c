//! Query execution for companies.

use crate::error::AppError;
use crate::model::{Company, CompanyChanges, CompanyDetail, CompanyInvoiceRow, CompanySummary, NewCompany};
use crate::sql::company as sql;
use sqlx::PgPool;

pub struct CompanyService;

impl CompanyService {
    /// All companies, ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<CompanySummary>, AppError> {
        tracing::debug!(sql = %sql::LIST, "query");
        let rows = sqlx::query_as::<_, CompanySummary>(sql::LIST)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// One company with the ids of its invoices. None when the code is unknown.
    pub async fn read(pool: &PgPool, code: &str) -> Result<Option<CompanyDetail>, AppError> {
        tracing::debug!(sql = %sql::SELECT_WITH_INVOICES, code, "query");
        let rows = sqlx::query_as::<_, CompanyInvoiceRow>(sql::SELECT_WITH_INVOICES)
            .bind(code)
            .fetch_all(pool)
            .await?;
        Ok(CompanyDetail::from_rows(rows))
    }

    /// Insert one company. None only if the insert returned no row.
    pub async fn create(pool: &PgPool, body: &NewCompany) -> Result<Option<Company>, AppError> {
        tracing::debug!(sql = %sql::INSERT, code = %body.code, "query");
        let row = sqlx::query_as::<_, Company>(sql::INSERT)
            .bind(&body.code)
            .bind(&body.name)
            .bind(&body.description)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Replace name and description. None when the code is unknown.
    pub async fn update(
        pool: &PgPool,
        code: &str,
        changes: &CompanyChanges,
    ) -> Result<Option<Company>, AppError> {
        tracing::debug!(sql = %sql::UPDATE, code, "query");
        let row = sqlx::query_as::<_, Company>(sql::UPDATE)
            .bind(code)
            .bind(&changes.name)
            .bind(&changes.description)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Delete by code. Returns the deleted code, or None when nothing matched.
    pub async fn delete(pool: &PgPool, code: &str) -> Result<Option<String>, AppError> {
        tracing::debug!(sql = %sql::DELETE, code, "query");
        let deleted = sqlx::query_scalar::<_, String>(sql::DELETE)
            .bind(code)
            .fetch_optional(pool)
            .await?;
        Ok(deleted)
    }
}
