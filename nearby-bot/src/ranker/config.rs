//! Ranking configuration.

/// Largest number of results a single reply can carry.
///
/// LINE rejects carousels with more than 10 bubbles.
pub const MAX_TOP_K: usize = 10;

/// What to do with dataset records that lack usable coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingCoordinatePolicy {
    /// Treat a missing or unparseable coordinate as 0.
    ///
    /// Such records land far from any real user in Taiwan, so genuine
    /// nearby stations push them out of the top results.
    #[default]
    ZeroFallback,

    /// Drop the record entirely.
    Exclude,
}

/// Configuration parameters for station ranking.
#[derive(Debug, Clone)]
pub struct RankConfig {
    /// Maximum number of stations to return.
    pub top_k: usize,

    /// Handling of records without coordinates.
    pub missing_coordinates: MissingCoordinatePolicy,
}

impl RankConfig {
    /// Create a configuration. `top_k` is clamped to [`MAX_TOP_K`].
    pub fn new(top_k: usize, missing_coordinates: MissingCoordinatePolicy) -> Self {
        Self {
            top_k: top_k.min(MAX_TOP_K),
            missing_coordinates,
        }
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            top_k: MAX_TOP_K,
            missing_coordinates: MissingCoordinatePolicy::ZeroFallback,
        }
    }
}
