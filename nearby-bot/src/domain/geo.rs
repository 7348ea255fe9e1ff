//! Geographic points and great-circle distance.

use std::fmt;

/// Earth radius used for distance calculations, in meters.
///
/// This is the WGS-84 equatorial radius. A spherical model is accurate
/// enough at city scale.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// A latitude/longitude pair in decimal degrees.
///
/// Values are not range-checked. Non-finite coordinates produce NaN
/// distances rather than errors; use [`GeoPoint::is_finite`] to check
/// before ranking if that matters to the caller.
///
/// # Examples
///
/// ```
/// use nearby_bot::domain::GeoPoint;
///
/// let taipei_101 = GeoPoint::new(25.0330, 121.5654);
/// assert_eq!(taipei_101.distance_to(&taipei_101), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Great-circle distance to another point, in meters.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance(*self, *other)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Haversine distance between two points, in meters.
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}
