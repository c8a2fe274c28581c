//! Company rows and request bodies.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `GET /companies`.
#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// A company together with the ids of the invoices it owns.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<i32>,
}

/// One row of the company/invoice left join. `invoice_id` is NULL when the company has no invoices.
#[derive(Clone, Debug, FromRow)]
pub struct CompanyInvoiceRow {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoice_id: Option<i32>,
}

impl CompanyDetail {
    /// Fold join rows (all for the same company) into one detail. Returns None for an empty result.
    pub fn from_rows(rows: Vec<CompanyInvoiceRow>) -> Option<Self> {
        let mut rows = rows.into_iter();
        let first = rows.next()?;
        let invoices = std::iter::once(first.invoice_id)
            .chain(rows.map(|r| r.invoice_id))
            .flatten()
            .collect();
        Some(CompanyDetail {
            code: first.code,
            name: first.name,
            description: first.description,
            invoices,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCompany {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `PUT /companies/:code`. The code itself is never changed.
#[derive(Clone, Debug, Deserialize)]
pub struct CompanyChanges {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
