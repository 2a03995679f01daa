//! Common error types used across the workspace.
//!
//! Every fallible domain operation fails with [`PrimerError`]. There is a
//! single error kind today — invalid arguments — defined as its own typed
//! enum and converted via `#[from]`.

/// Top-level error for the workspace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimerError {
    /// An argument failed validation.
    ///
    /// Transparent: the inner message is the user-facing message.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),
}

/// An argument that fails an operation's validation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgumentError {
    /// Division with a divisor of exactly zero.
    #[error("Cannot divide by zero.")]
    ZeroDivisor,
    /// Circle area with a radius below zero.
    #[error("Radius cannot be negative.")]
    NegativeRadius,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_exact_zero_divisor_message() {
        let err = PrimerError::from(InvalidArgumentError::ZeroDivisor);
        assert_eq!(err.to_string(), "Cannot divide by zero.");
    }

    #[test]
    fn should_display_exact_negative_radius_message() {
        let err = PrimerError::from(InvalidArgumentError::NegativeRadius);
        assert_eq!(err.to_string(), "Radius cannot be negative.");
    }

    #[test]
    fn should_convert_invalid_argument_into_top_level_error() {
        let err: PrimerError = InvalidArgumentError::ZeroDivisor.into();
        assert!(matches!(
            err,
            PrimerError::InvalidArgument(InvalidArgumentError::ZeroDivisor)
        ));
    }
}
