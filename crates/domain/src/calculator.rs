//! Calculator — stateless arithmetic operations.

use crate::error::{InvalidArgumentError, PrimerError};

/// Basic arithmetic over `f64`. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Create a calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Add two numbers.
    #[must_use]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    /// Subtract `b` from `a`.
    #[must_use]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    /// Multiply two numbers.
    #[must_use]
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Divide `a` by `b`.
    ///
    /// # Errors
    ///
    /// Returns [`PrimerError::InvalidArgument`] when `b` is exactly zero.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, PrimerError> {
        if b == 0.0 {
            return Err(InvalidArgumentError::ZeroDivisor.into());
        }
        Ok(a / b)
    }
}
