//! Domain layer for weather-mcp
//!
//! Contains the forecast vocabulary: locations, station references,
//! forecast periods and the rendered report. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
