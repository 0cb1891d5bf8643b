//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod station_reference;

pub use geo_location::GeoLocation;
pub use station_reference::StationReference;
