//! Services: one unit struct per table, each method a single parameterized statement.

mod company;
mod invoice;
mod validation;
pub use company::CompanyService;
pub use invoice::InvoiceService;
pub use validation::RequestValidator;
