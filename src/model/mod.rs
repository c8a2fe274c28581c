//! Row types read from the database and request bodies written to it.

mod company;
mod invoice;

pub use company::*;
pub use invoice::*;
