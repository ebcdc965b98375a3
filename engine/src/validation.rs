//! Input validation for caller-supplied values
//!
//! Range and sanity checks applied at the input boundary by the host
//! application. The pure calculations never call these: an out-of-range
//! value that reaches them is the caller's bug, and an absent value is
//! handled by the `Option` propagation rules instead.

use crate::profile::DurationUnit;
use thiserror::Error;

/// Validation failure for a caller-supplied value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("goal duration must be between 1 and {max} {unit}")]
    DurationOutOfRange { max: u32, unit: &'static str },

    #[error("goal rate must be a positive amount")]
    NonPositiveRate,
}

fn check_finite(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if value.is_nan() || value.is_infinite() {
        return Err(ValidationError::NotFinite { field });
    }
    Ok(())
}

fn check_range(
    value: f64,
    min: f64,
    max: f64,
    field: &'static str,
) -> Result<(), ValidationError> {
    check_finite(value, field)?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(())
}

/// Validate a body weight in kilograms
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), ValidationError> {
    check_range(weight_kg, 20.0, 500.0, "weight")
}

/// Validate a height in centimeters
pub fn validate_height_cm(height_cm: f64) -> Result<(), ValidationError> {
    check_range(height_cm, 50.0, 280.0, "height")
}

/// Validate a body fat percentage
pub fn validate_body_fat_percent(percent: f64) -> Result<(), ValidationError> {
    check_range(percent, 1.0, 70.0, "body fat percentage")
}

/// Validate a macro percentage split value
///
/// Individual values only; splits are not required to sum to 100.
pub fn validate_percentage(percent: f64) -> Result<(), ValidationError> {
    check_range(percent, 0.0, 100.0, "percentage")
}

/// Validate a goal rate amount (positive magnitude in the selected unit)
pub fn validate_goal_rate(amount: f64) -> Result<(), ValidationError> {
    check_finite(amount, "goal rate")?;
    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveRate);
    }
    Ok(())
}

/// Validate a goal duration: 1-104 weeks or 1-24 months
pub fn validate_goal_duration(value: u32, unit: DurationUnit) -> Result<(), ValidationError> {
    let (max, label) = match unit {
        DurationUnit::Weeks => (104, "weeks"),
        DurationUnit::Months => (24, "months"),
    };
    if value < 1 || value > max {
        return Err(ValidationError::DurationOutOfRange { max, unit: label });
    }
    Ok(())
}
