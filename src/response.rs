//! Response envelopes. Each resource is wrapped under its own key: `{companies: [...]}`, `{invoice: {...}}`.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct CompanyList<T> {
    pub companies: Vec<T>,
}

#[derive(Serialize)]
pub struct CompanyBody<T> {
    pub company: T,
}

#[derive(Serialize)]
pub struct InvoiceList<T> {
    pub invoices: Vec<T>,
}

#[derive(Serialize)]
pub struct InvoiceBody<T> {
    pub invoice: T,
}

#[derive(Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

pub fn companies<T: Serialize>(companies: Vec<T>) -> Json<CompanyList<T>> {
    Json(CompanyList { companies })
}

pub fn company<T: Serialize>(company: T) -> Json<CompanyBody<T>> {
    Json(CompanyBody { company })
}

/// An empty list is still `{invoices: []}`.
pub fn invoices<T: Serialize>(invoices: Vec<T>) -> Json<InvoiceList<T>> {
    Json(InvoiceList { invoices })
}

pub fn invoice<T: Serialize>(invoice: T) -> Json<InvoiceBody<T>> {
    Json(InvoiceBody { invoice })
}

pub fn deleted() -> Json<StatusBody> {
    Json(StatusBody { status: "deleted" })
}
