//! Coordinate handling for decoded GPS data
//!
//! This module provides the output coordinate type and the conversion
//! from EXIF degree/minute/second rationals to decimal degrees.

mod dms;
mod point;

// Re-export key types
pub use self::dms::{to_decimal_degrees, Hemisphere, Rational};
pub use self::point::GeoCoordinate;
