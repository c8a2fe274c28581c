//! Request extractors that reject with `AppError`.

mod invoice_id;
mod json;
pub use invoice_id::{parse_invoice_id, InvoiceId};
pub use json::ApiJson;
