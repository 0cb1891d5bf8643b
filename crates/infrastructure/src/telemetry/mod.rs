//! Logging initialisation
//!
//! All log output goes to stderr; stdout carries the MCP transport.

mod subscriber;

pub use subscriber::{LogFormat, LoggingConfig, TelemetryError, init_logging};
