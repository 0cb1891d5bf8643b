//! Weather MCP presentation layer
//!
//! Exposes the forecast pipeline as a single MCP tool.

pub mod server;

pub use server::{ForecastRequest, WeatherMcpServer};
