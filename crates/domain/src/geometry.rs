//! Circle geometry.

use crate::error::{InvalidArgumentError, PrimerError};

/// Area of a circle with the given radius.
///
/// # Errors
///
/// Returns [`PrimerError::InvalidArgument`] when `radius` is negative.
pub fn circle_area(radius: f64) -> Result<f64, PrimerError> {
    if radius < 0.0 {
        return Err(InvalidArgumentError::NegativeRadius.into());
    }
    Ok(std::f64::consts::PI * radius * radius)
}
