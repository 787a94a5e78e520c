//! EXIF GPS parsing module
//!
//! This module provides the stages that take a JPEG byte buffer to a
//! decoded GPS position: marker scanning, TIFF/IFD walking and GPS IFD
//! decoding.

pub mod errors;
pub(crate) mod constants;
pub mod jpeg;
pub mod ifd;
pub mod gps;
pub mod reader;
pub mod tags;
pub mod trace;
#[cfg(test)]
pub(crate) mod tests;

pub use crate::io::byte_order::{BigEndianHandler, ByteOrder, ByteOrderHandler, LittleEndianHandler};
pub use errors::{ExifResult, FormatError, GeoTagError, GeoTagResult};
pub use gps::GpsFields;
pub use ifd::{IfdEntry, TiffHeader};
pub use jpeg::TiffBlock;
pub use reader::{read_gps, GpsReader, GpsReaderBuilder};
pub use tags::gps_tag_name;
pub use trace::{LogObserver, NoopObserver, ParseObserver, TraceEvent};
