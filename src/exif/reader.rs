//! GPS location reader
//!
//! Chains the parsing stages: JPEG scan, TIFF header, IFD walk, GPS IFD
//! decode and coordinate conversion. A reader holds only configuration;
//! every call is a pure function of the input buffer.

use crate::coordinate::GeoCoordinate;
use crate::exif::constants::header;
use crate::exif::errors::ExifResult;
use crate::exif::gps;
use crate::exif::ifd::{self, TiffHeader};
use crate::exif::jpeg;
use crate::exif::trace::{NoopObserver, ParseObserver, TraceEvent};

/// Builder for GpsReader
///
/// Provides a clean way to construct a GpsReader with various configurations.
pub struct GpsReaderBuilder<'a> {
    /// Maximum number of IFDs followed in a chain
    max_ifd_depth: usize,
    /// Receiver of trace events
    observer: &'a dyn ParseObserver,
}

impl GpsReaderBuilder<'static> {
    /// Create a new GpsReaderBuilder with default settings
    pub fn new() -> Self {
        GpsReaderBuilder {
            max_ifd_depth: header::DEFAULT_MAX_IFD_DEPTH,
            observer: &NoopObserver,
        }
    }
}

impl Default for GpsReaderBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> GpsReaderBuilder<'a> {
    /// Set the IFD chain depth limit
    pub fn max_ifd_depth(mut self, depth: usize) -> Self {
        self.max_ifd_depth = depth;
        self
    }

    /// Set the observer that receives trace events
    pub fn observer<'b>(self, observer: &'b dyn ParseObserver) -> GpsReaderBuilder<'b> {
        GpsReaderBuilder {
            max_ifd_depth: self.max_ifd_depth,
            observer,
        }
    }

    /// Build the GpsReader
    pub fn build(self) -> GpsReader<'a> {
        GpsReader {
            max_ifd_depth: self.max_ifd_depth,
            observer: self.observer,
        }
    }
}

/// Reader that extracts the GPS location from EXIF data
pub struct GpsReader<'a> {
    max_ifd_depth: usize,
    observer: &'a dyn ParseObserver,
}

impl<'a> GpsReader<'a> {
    /// Reads the location from the start of a JPEG file
    ///
    /// `data` only needs to hold the header area of the file; the first
    /// 128 KiB are enough for any well-formed JPEG.
    ///
    /// # Returns
    /// * `Ok(Some(coord))` - GPS position found
    /// * `Ok(None)` - no EXIF segment, no GPS IFD, or a GPS IFD lacking an axis
    /// * `Err(_)` - the bytes are structurally malformed
    pub fn read(&self, data: &[u8]) -> ExifResult<Option<GeoCoordinate>> {
        match jpeg::find_tiff_block(data, self.observer)? {
            Some(block) => self.read_tiff(block.slice(data)),
            None => Ok(None),
        }
    }

    /// Reads the location from a bare TIFF block (EXIF payload without the
    /// JPEG wrapper and `Exif\0\0` identifier)
    pub fn read_tiff(&self, block: &[u8]) -> ExifResult<Option<GeoCoordinate>> {
        let tiff_header = TiffHeader::read(block)?;
        self.observer.on_event(&TraceEvent::ByteOrderDetected(tiff_header.byte_order));
        let handler = tiff_header.byte_order.create_handler();

        let gps_offset = match ifd::find_gps_ifd(
            block,
            &tiff_header,
            handler.as_ref(),
            self.max_ifd_depth,
            self.observer,
        )? {
            Some(offset) => offset,
            None => return Ok(None),
        };

        let fields = gps::decode_gps_ifd(block, gps_offset, handler.as_ref(), self.observer)?;
        Ok(fields.into_coordinate())
    }
}

/// Reads the GPS location from a JPEG buffer with default settings
pub fn read_gps(data: &[u8]) -> ExifResult<Option<GeoCoordinate>> {
    GpsReaderBuilder::new().build().read(data)
}
