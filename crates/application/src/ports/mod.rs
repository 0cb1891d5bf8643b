//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod forecast_port;
mod station_resolver_port;

pub use forecast_port::ForecastPort;
#[cfg(test)]
pub use forecast_port::MockForecastPort;
#[cfg(test)]
pub use station_resolver_port::MockStationResolverPort;
pub use station_resolver_port::StationResolverPort;
