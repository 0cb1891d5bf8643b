//! Forecast port
//!
//! Fetches the ordered forecast periods for a resolved station.

use async_trait::async_trait;
use domain::{ForecastPeriod, StationReference};
#[cfg(test)]
use mockall::automock;

use crate::error::FetchError;

/// Port for station to forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch all forecast periods for a station, in upstream order
    ///
    /// An empty list is a valid answer.
    async fn fetch_periods(
        &self,
        station: &StationReference,
    ) -> Result<Vec<ForecastPeriod>, FetchError>;
}
