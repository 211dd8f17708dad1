use std::fmt;

/// Mean Earth radius in nautical miles, the scale factor for great-circle distances.
pub const EARTH_RADIUS_NM: f64 = 3440.07;

/// Meters per nautical mile, for converting simulator-local displacements.
pub const METERS_PER_NM: f64 = 1852.0;

/// A geographic position in degrees, latitude north-positive, longitude east-positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    ///
    /// Values are taken as-is; the host is trusted to deliver positions inside
    /// the usual ranges.
    pub const fn new(lat: f64, lon: f64) -> Self { Self { lat, lon } }

    /// Returns the latitude in degrees.
    pub const fn lat(&self) -> f64 { self.lat }

    /// Returns the longitude in degrees.
    pub const fn lon(&self) -> f64 { self.lon }

    /// Whether this is the host's "no position" slot value, exactly (0, 0).
    pub fn is_unset(&self) -> bool { self.lat == 0.0 && self.lon == 0.0 }

    /// Computes the great-circle distance to `other` using the haversine formula.
    ///
    /// # Arguments
    /// * `other` - The coordinate to measure against.
    ///
    /// # Returns
    /// The distance in nautical miles. Zero for identical coordinates, always
    /// finite for finite input.
    pub fn distance_nm(&self, other: &Self) -> f64 {
        let rad_lat1 = self.lat.to_radians();
        let rad_lat2 = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lon = (other.lon - self.lon).to_radians();

        let s_lat = (delta_lat / 2.0).sin();
        let s_lon = (delta_lon / 2.0).sin();
        let a = s_lat * s_lat + rad_lat1.cos() * rad_lat2.cos() * s_lon * s_lon;
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_NM * c
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Creates a `Coordinate` from a `(lat, lon)` tuple in degrees.
    fn from(tuple: (f64, f64)) -> Self { Self::new(tuple.0, tuple.1) }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
