//! Application layer - Use cases and orchestration
//!
//! Defines the ports for the two upstream lookups and the service that
//! chains them into a forecast report.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, FetchError, ResolutionError};
pub use ports::*;
pub use services::*;
