use rust_decimal::Decimal;

use crate::domain::VehicleCategory;
use crate::shared::errors::DomainError;

/// Returned by [`parse_selection`] for anything that is not an integer.
pub const INVALID_SELECTION: i32 = -1;

/// Trim a typed registration number and reject blank input.
pub fn validate_registration_number(raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation("Invalid input provided".to_string()));
    }
    Ok(trimmed.to_string())
}

pub fn parse_selection(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(INVALID_SELECTION)
}

/// Reject hourly rates that are zero or negative.
pub fn validate_hourly_rate(category: VehicleCategory, rate: Decimal) -> Result<(), DomainError> {
    if rate <= Decimal::ZERO {
        return Err(DomainError::Validation(format!(
            "Hourly rate for {} must be positive, got {}",
            category, rate
        )));
    }
    Ok(())
}
