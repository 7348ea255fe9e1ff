//! Nearby station ranking.
//!
//! Given a user's position and a dataset snapshot, selects the closest
//! stations by great-circle distance.

mod config;
mod rank;

pub use config::{MAX_TOP_K, MissingCoordinatePolicy, RankConfig};
pub use rank::rank;
