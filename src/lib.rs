//! biztime: REST API over companies and their invoices, backed by PostgreSQL.

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;

pub use config::{AppConfig, DatabaseConfig};
pub use db::{bootstrap_schema, connect};
pub use error::{AppError, ConfigError};
pub use routes::{app, common_routes_with_ready, company_routes, invoice_routes};
pub use service::{CompanyService, InvoiceService};
pub use state::AppState;
