pub mod io;
pub mod exif;
pub mod coordinate;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::GeoTagKit;

pub use config::{OutputFormat, ScanConfig};
pub use coordinate::{GeoCoordinate, Hemisphere, Rational};
pub use exif::{read_gps, FormatError, GeoTagError, GpsReader, GpsReaderBuilder, ParseObserver, TraceEvent};
