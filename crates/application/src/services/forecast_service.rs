//! Forecast service
//!
//! Resolves coordinates to a station, fetches that station's forecast and
//! renders the report. Every call is independent; the service holds only
//! the two injected ports.

use std::fmt;
use std::sync::Arc;

use domain::{ForecastReport, GeoLocation};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{ForecastPort, StationResolverPort};

/// Coordinates-to-report pipeline
#[derive(Clone)]
pub struct ForecastService {
    resolver: Arc<dyn StationResolverPort>,
    forecasts: Arc<dyn ForecastPort>,
}

impl fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastService").finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a service over the given resolver and forecast ports
    pub fn new(resolver: Arc<dyn StationResolverPort>, forecasts: Arc<dyn ForecastPort>) -> Self {
        Self {
            resolver,
            forecasts,
        }
    }

    /// Resolve, fetch and build the report
    ///
    /// A resolution failure returns before any forecast request is made.
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    pub async fn try_get_forecast(
        &self,
        location: GeoLocation,
    ) -> Result<ForecastReport, ApplicationError> {
        if !location.is_in_range() {
            warn!("Coordinates outside nominal range, passing through to provider");
        }

        let station = self.resolver.resolve_station(&location).await?;
        debug!(station = %station, "Resolved forecast station");

        let periods = self.forecasts.fetch_periods(&station).await?;
        let available = periods.len();
        let report = ForecastReport::from_periods(periods);

        info!(
            station = %station,
            available,
            rendered = report.len(),
            "Forecast report ready"
        );
        Ok(report)
    }

    /// Forecast text for a coordinate pair, tagged by outcome
    ///
    /// `Ok` holds the rendered report and `Err` the descriptive failure
    /// message. Both are the exact text handed back to callers.
    pub async fn forecast_text(&self, latitude: f64, longitude: f64) -> Result<String, String> {
        self.try_get_forecast(GeoLocation::new(latitude, longitude))
            .await
            .map(|report| report.render())
            .map_err(|e| {
                warn!(stage = e.stage(), error = %e, "Forecast request failed");
                e.to_string()
            })
    }

    /// Produce the forecast text for a coordinate pair
    ///
    /// Failures are folded into a descriptive message; this never errors.
    pub async fn get_forecast(&self, latitude: f64, longitude: f64) -> String {
        self.forecast_text(latitude, longitude)
            .await
            .unwrap_or_else(|message| message)
    }
}
