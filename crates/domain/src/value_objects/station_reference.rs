//! Station reference value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Provider-specific identifier for a forecast location
///
/// Obtained from a lookup and only meaningful to the provider that issued
/// it. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationReference(String);

impl StationReference {
    /// Create a station reference from a provider token
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the token is empty or
    /// whitespace only.
    pub fn new(token: impl Into<String>) -> Result<Self, DomainError> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationError(
                "station reference must not be empty".to_string(),
            ));
        }
        if trimmed.len() == token.len() {
            Ok(Self(token))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Get the raw token
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for StationReference {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StationReference> for String {
    fn from(station: StationReference) -> Self {
        station.0
    }
}

impl AsRef<str> for StationReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_grid_token() {
        let station = StationReference::new("TOP/31,80").expect("valid");
        assert_eq!(station.as_str(), "TOP/31,80");
        assert_eq!(station.to_string(), "TOP/31,80");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let station = StationReference::new("  ON123 ").expect("valid");
        assert_eq!(station.as_str(), "ON123");
    }

    #[test]
    fn rejects_empty() {
        assert!(StationReference::new("").is_err());
        assert!(StationReference::new("   ").is_err());
    }

    #[test]
    fn serde_goes_through_validation() {
        let parsed: StationReference = serde_json::from_str("\"ON123\"").expect("valid");
        assert_eq!(parsed.as_str(), "ON123");

        let rejected: Result<StationReference, _> = serde_json::from_str("\"\"");
        assert!(rejected.is_err());
    }
}
