//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and owns process-wide
//! concerns: configuration loading and log setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::AppConfig;
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_logging};
