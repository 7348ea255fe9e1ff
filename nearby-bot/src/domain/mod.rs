//! Domain types for the nearby-station bot.
//!
//! Everything here is plain data and pure functions: no I/O, no shared
//! state. Values live for a single webhook event.

mod geo;
mod station;

pub use geo::{EARTH_RADIUS_M, GeoPoint, distance};
pub use station::{RankedStation, StationRecord};
