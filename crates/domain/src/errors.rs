//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("station reference must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Validation failed: station reference must not be empty"
        );
    }
}
