//! Application-level errors
//!
//! One error type per pipeline stage, so callers can tell which lookup
//! failed without inspecting messages.

use thiserror::Error;

/// Coordinate to station lookup failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The lookup request could not be sent or completed
    #[error("lookup request failed: {0}")]
    Request(String),

    /// The lookup did not finish within the request timeout
    #[error("lookup timed out")]
    Timeout,

    /// The lookup endpoint answered with a non-success status
    #[error("lookup returned HTTP {0}")]
    Status(u16),

    /// The lookup body could not be parsed
    #[error("lookup response could not be parsed: {0}")]
    MalformedPayload(String),

    /// The lookup body has no usable station identifier
    #[error("lookup response has no station identifier ({0})")]
    MissingStation(String),
}

/// Station to forecast lookup failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The forecast request could not be sent or completed
    #[error("forecast request failed: {0}")]
    Request(String),

    /// The forecast request did not finish within the request timeout
    #[error("forecast request timed out")]
    Timeout,

    /// The forecast endpoint answered with a non-success status
    #[error("forecast endpoint returned HTTP {0}")]
    Status(u16),

    /// The forecast body could not be parsed or has no period list
    #[error("forecast response could not be parsed: {0}")]
    MalformedPayload(String),

    /// A period in the forecast body lacks a required field
    #[error("forecast period {index} is missing its {field}")]
    MalformedPeriod {
        /// Zero-based position in the upstream period list
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },
}

/// Errors that can occur while answering a forecast request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Station resolution failed
    #[error("Unable to resolve a forecast station for this location: {0}")]
    Resolution(#[from] ResolutionError),

    /// Forecast retrieval failed
    #[error("Unable to fetch forecast data: {0}")]
    Fetch(#[from] FetchError),
}

impl ApplicationError {
    /// Short name of the failing stage, for logs
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Resolution(_) => "resolve",
            Self::Fetch(_) => "fetch",
        }
    }
}
