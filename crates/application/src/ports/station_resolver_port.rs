//! Station resolver port
//!
//! Translates coordinates into the provider's station reference.

use async_trait::async_trait;
use domain::{GeoLocation, StationReference};
#[cfg(test)]
use mockall::automock;

use crate::error::ResolutionError;

/// Port for coordinate to station resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StationResolverPort: Send + Sync {
    /// Resolve a location into a station reference
    ///
    /// Makes a single upstream attempt. The location is passed through
    /// without range checks.
    async fn resolve_station(
        &self,
        location: &GeoLocation,
    ) -> Result<StationReference, ResolutionError>;
}
