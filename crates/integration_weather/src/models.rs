//! Weather data models
//!
//! Raw payloads from the National Weather Service API and the validated
//! types the client hands out.

use serde::{Deserialize, Serialize};

/// A resolved forecast grid point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPoint {
    /// Forecast office identifier (e.g. "TOP")
    pub grid_id: String,
    /// Grid X coordinate within the office's grid
    pub grid_x: u32,
    /// Grid Y coordinate within the office's grid
    pub grid_y: u32,
    /// Nearest named place, when the provider reports one
    pub city: Option<String>,
    /// State of the nearest named place
    pub state: Option<String>,
}

impl GridPoint {
    /// Station token used to address the gridpoint forecast
    ///
    /// Shaped `"{grid_id}/{grid_x},{grid_y}"`, e.g. `"TOP/31,80"`.
    #[must_use]
    pub fn station_id(&self) -> String {
        format!("{}/{},{}", self.grid_id, self.grid_x, self.grid_y)
    }
}

/// One validated forecast period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// Period name, e.g. "Tonight"
    pub name: String,
    /// Detailed forecast text, or the short forecast when no detail is given
    pub summary: String,
    /// Temperature value
    pub temperature: Option<f64>,
    /// Temperature unit ("F" or "C")
    pub temperature_unit: Option<String>,
}

/// Raw `/points/{lat},{lon}` response
#[derive(Debug, Clone, Deserialize)]
pub struct PointsResponse {
    #[serde(default)]
    pub properties: Option<PointProperties>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointProperties {
    #[serde(default)]
    pub grid_id: Option<String>,
    #[serde(default)]
    pub grid_x: Option<u32>,
    #[serde(default)]
    pub grid_y: Option<u32>,
    #[serde(default)]
    pub relative_location: Option<RelativeLocation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelativeLocation {
    #[serde(default)]
    pub properties: Option<RelativeLocationProperties>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelativeLocationProperties {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Raw `/gridpoints/{station}/forecast` response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub properties: Option<ForecastProperties>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastProperties {
    #[serde(default)]
    pub periods: Option<Vec<PeriodData>>,
}

/// Raw period entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub temperature_unit: Option<String>,
    #[serde(default)]
    pub short_forecast: Option<String>,
    #[serde(default)]
    pub detailed_forecast: Option<String>,
}
