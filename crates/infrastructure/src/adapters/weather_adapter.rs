//! Weather adapter - Implements the forecast ports using integration_weather

use std::sync::Arc;

use application::error::{FetchError, ResolutionError};
use application::ports::{ForecastPort, StationResolverPort};
use async_trait::async_trait;
use domain::{ForecastPeriod, GeoLocation, StationReference};
use integration_weather::{
    ForecastPeriod as IntegrationPeriod, NwsClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for the National Weather Service API
///
/// One adapter serves both lookups; it holds only the shared client.
#[derive(Clone)]
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"dyn WeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter backed by an [`NwsClient`]
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = NwsClient::new(config)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter over any client implementation
    #[must_use]
    pub fn with_client(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map a client error raised during the points lookup
    fn map_resolution_error(err: WeatherError) -> ResolutionError {
        match err {
            WeatherError::ConnectionFailed(e) | WeatherError::RequestFailed(e) => {
                ResolutionError::Request(e)
            },
            WeatherError::Timeout => ResolutionError::Timeout,
            WeatherError::UnexpectedStatus(code) => ResolutionError::Status(code),
            WeatherError::ParseError(e) => ResolutionError::MalformedPayload(e),
            WeatherError::MissingField(field) => ResolutionError::MissingStation(field.to_string()),
            e @ WeatherError::MalformedPeriod { .. } => {
                ResolutionError::MalformedPayload(e.to_string())
            },
        }
    }

    /// Map a client error raised during the forecast lookup
    fn map_fetch_error(err: WeatherError) -> FetchError {
        match err {
            WeatherError::ConnectionFailed(e) | WeatherError::RequestFailed(e) => {
                FetchError::Request(e)
            },
            WeatherError::Timeout => FetchError::Timeout,
            WeatherError::UnexpectedStatus(code) => FetchError::Status(code),
            WeatherError::ParseError(e) => FetchError::MalformedPayload(e),
            WeatherError::MissingField(field) => {
                FetchError::MalformedPayload(format!("missing {field}"))
            },
            WeatherError::MalformedPeriod { index, field } => {
                FetchError::MalformedPeriod { index, field }
            },
        }
    }

    /// Convert an integration period into the domain period
    fn map_period(period: IntegrationPeriod) -> ForecastPeriod {
        let domain_period = ForecastPeriod::new(period.name, period.summary);
        match (period.temperature, period.temperature_unit) {
            (Some(value), Some(unit)) => domain_period.with_temperature(value, unit),
            _ => domain_period,
        }
    }
}

#[async_trait]
impl StationResolverPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn resolve_station(
        &self,
        location: &GeoLocation,
    ) -> Result<StationReference, ResolutionError> {
        let result = self
            .client
            .get_point(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_resolution_error);

        match &result {
            Ok(point) => {
                debug!(station = %point.station_id(), "Mapped grid point to station");
            },
            Err(e) => {
                debug!(error = %e, "Failed to resolve station");
            },
        }

        let point = result?;
        StationReference::new(point.station_id())
            .map_err(|e| ResolutionError::MissingStation(e.to_string()))
    }
}

#[async_trait]
impl ForecastPort for WeatherAdapter {
    #[instrument(skip(self), fields(station = %station))]
    async fn fetch_periods(
        &self,
        station: &StationReference,
    ) -> Result<Vec<ForecastPeriod>, FetchError> {
        let result = self
            .client
            .get_forecast(station.as_str())
            .await
            .map_err(Self::map_fetch_error);

        match &result {
            Ok(periods) => {
                debug!(periods = periods.len(), "Retrieved forecast periods");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get forecast periods");
            },
        }

        result.map(|periods| periods.into_iter().map(Self::map_period).collect())
    }
}
