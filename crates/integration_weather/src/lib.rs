//! National Weather Service integration
//!
//! Client for the NWS API (<https://api.weather.gov>). Resolves coordinates to
//! a forecast grid point and fetches that point's period forecast. No API key
//! is required, but every request must carry a User-Agent.

pub mod client;
mod models;

pub use client::{NwsClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{ForecastPeriod, GridPoint};
