//! Presence checks on request bodies. Anything beyond "is it there" is left to the database.

use crate::error::AppError;

pub struct RequestValidator;

impl RequestValidator {
    /// Every named field must be non-blank. Reports the first blank one.
    pub fn require(fields: &[(&str, &str)]) -> Result<(), AppError> {
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!("{} is required", name)));
            }
        }
        Ok(())
    }
}
