//! National Weather Service client
//!
//! HTTP client for the NWS API (<https://www.weather.gov/documentation/services-web-api>).

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ForecastPeriod, ForecastResponse, GridPoint, PeriodData, PointsResponse};

/// Media type the NWS API serves by default
const GEO_JSON: &str = "application/geo+json";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The weather service answered with a non-success status
    #[error("Unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A required field is absent from the response
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A forecast period lacks a required field
    #[error("Period {index} is missing {field}")]
    MalformedPeriod {
        /// Zero-based position in the period list
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },
}

impl WeatherError {
    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::ParseError(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// NWS API base URL (default: <https://api.weather.gov>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent header; NWS rejects requests without one
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.weather.gov".to_string()
}

fn default_user_agent() -> String {
    concat!("weather-mcp/", env!("CARGO_PKG_VERSION")).to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for the two forecast lookups
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Resolve coordinates into a forecast grid point
    async fn get_point(&self, latitude: f64, longitude: f64) -> Result<GridPoint, WeatherError>;

    /// Get the forecast periods for a station token, in upstream order
    async fn get_forecast(&self, station_id: &str) -> Result<Vec<ForecastPeriod>, WeatherError>;
}

/// NWS HTTP client implementation
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: Client,
    config: WeatherConfig,
}

impl NwsClient {
    /// Create a new NWS client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// Build the points lookup URL
    fn build_points_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/points/{},{}",
            self.base_url(),
            format_coordinate(latitude),
            format_coordinate(longitude)
        )
    }

    /// Build the gridpoint forecast URL
    fn build_forecast_url(&self, station_id: &str) -> String {
        format!("{}/gridpoints/{}/forecast", self.base_url(), station_id)
    }

    /// GET a URL and decode its JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        let started = Instant::now();

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, GEO_JSON)
            .send()
            .await
            .map_err(|e| WeatherError::from_reqwest(&e))?;

        let status = response.status();
        debug!(
            url = %url,
            status = status.as_u16(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Weather API responded"
        );

        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Weather API returned error status");
            return Err(WeatherError::UnexpectedStatus(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::from_reqwest(&e))
    }

    /// Validate a points payload into a grid point
    fn parse_point(response: PointsResponse) -> Result<GridPoint, WeatherError> {
        let props = response
            .properties
            .ok_or(WeatherError::MissingField("properties"))?;

        let grid_id = props
            .grid_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or(WeatherError::MissingField("gridId"))?;
        let grid_x = props.grid_x.ok_or(WeatherError::MissingField("gridX"))?;
        let grid_y = props.grid_y.ok_or(WeatherError::MissingField("gridY"))?;

        let place = props.relative_location.and_then(|r| r.properties);
        let (city, state) = place.map_or((None, None), |p| (p.city, p.state));

        Ok(GridPoint {
            grid_id,
            grid_x,
            grid_y,
            city,
            state,
        })
    }

    /// Validate a forecast payload into periods
    ///
    /// A period without a name, or without any forecast text, rejects the
    /// whole payload.
    fn parse_periods(response: ForecastResponse) -> Result<Vec<ForecastPeriod>, WeatherError> {
        let periods = response
            .properties
            .ok_or(WeatherError::MissingField("properties"))?
            .periods
            .ok_or(WeatherError::MissingField("periods"))?;

        periods
            .into_iter()
            .enumerate()
            .map(|(index, period)| Self::parse_period(index, period))
            .collect()
    }

    fn parse_period(index: usize, data: PeriodData) -> Result<ForecastPeriod, WeatherError> {
        let name = non_blank(data.name).ok_or(WeatherError::MalformedPeriod {
            index,
            field: "name",
        })?;
        let summary = non_blank(data.detailed_forecast)
            .or_else(|| non_blank(data.short_forecast))
            .ok_or(WeatherError::MalformedPeriod {
                index,
                field: "forecast text",
            })?;

        Ok(ForecastPeriod {
            name,
            summary,
            temperature: data.temperature,
            temperature_unit: data.temperature_unit,
        })
    }
}

/// Format a coordinate with at most four decimals and no trailing zeros
///
/// NWS redirects requests with more precision than that.
fn format_coordinate(value: f64) -> String {
    let formatted = format!("{value:.4}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[async_trait]
impl WeatherClient for NwsClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_point(&self, latitude: f64, longitude: f64) -> Result<GridPoint, WeatherError> {
        let url = self.build_points_url(latitude, longitude);
        debug!(url = %url, "Resolving forecast grid point");

        let response: PointsResponse = self.get_json(&url).await?;
        let point = Self::parse_point(response)?;

        debug!(
            station = %point.station_id(),
            city = point.city.as_deref().unwrap_or("-"),
            state = point.state.as_deref().unwrap_or("-"),
            "Resolved grid point"
        );
        Ok(point)
    }

    #[instrument(skip(self))]
    async fn get_forecast(&self, station_id: &str) -> Result<Vec<ForecastPeriod>, WeatherError> {
        let url = self.build_forecast_url(station_id);
        debug!(url = %url, "Fetching gridpoint forecast");

        let response: ForecastResponse = self.get_json(&url).await?;
        let periods = Self::parse_periods(response)?;

        debug!(periods = periods.len(), "Parsed forecast periods");
        Ok(periods)
    }
}
