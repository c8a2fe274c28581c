//! HTTP handlers for companies and invoices.

pub mod company;
pub mod invoice;
