//! Geographic coordinate produced by the GPS decoder

use std::fmt;

/// A decoded photo location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Signed decimal latitude, positive north
    pub latitude: f64,
    /// Signed decimal longitude, positive east
    pub longitude: f64,
    /// Altitude in metres, negative below sea level
    pub altitude: Option<f64>,
}

impl GeoCoordinate {
    /// Create a new 2D coordinate
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoCoordinate { latitude, longitude, altitude: None }
    }

    /// Create a new coordinate with altitude
    pub fn with_altitude(latitude: f64, longitude: f64, altitude: f64) -> Self {
        GeoCoordinate { latitude, longitude, altitude: Some(altitude) }
    }

    /// Check if this coordinate has an altitude
    pub fn has_altitude(&self) -> bool {
        self.altitude.is_some()
    }

    /// Whether latitude and longitude lie inside the WGS84 ranges
    ///
    /// The decoder does not reject out-of-range values, since some writers
    /// store garbage degrees; callers decide what to do with them.
    pub fn is_within_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Formats latitude and longitude with the given number of decimals
    pub fn format_lat_lon(&self, precision: usize) -> String {
        format!("{:.*}, {:.*}", precision, self.latitude, precision, self.longitude)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_lat_lon(6))?;
        if let Some(altitude) = self.altitude {
            write!(f, " ({:.1} m)", altitude)?;
        }
        Ok(())
    }
}
