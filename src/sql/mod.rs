//! Parameterized statements, one module per table. Values are always bound, never interpolated.

pub mod company;
pub mod invoice;
