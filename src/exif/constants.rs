//! JPEG, TIFF and GPS format constants
//!
//! Named values for the markers, tags and field types the parser
//! dispatches on.

/// JPEG marker codes
pub mod markers {
    /// Start of image
    pub const SOI: u16 = 0xFFD8;
    /// End of image
    pub const EOI: u16 = 0xFFD9;
    /// Start of scan; entropy-coded data follows
    pub const SOS: u16 = 0xFFDA;
    /// Application segment 1 (EXIF)
    pub const APP1: u16 = 0xFFE1;
    /// Temporary private use, standalone
    pub const TEM: u16 = 0xFF01;
    /// First restart marker, standalone
    pub const RST0: u16 = 0xFFD0;
    /// Last restart marker, standalone
    pub const RST7: u16 = 0xFFD7;
    /// First marker that carries a segment length
    pub const SEGMENT_FIRST: u16 = 0xFFC0;
    /// Last marker that carries a segment length (COM)
    pub const SEGMENT_LAST: u16 = 0xFFFE;
    /// Marker prefix byte
    pub const PREFIX: u8 = 0xFF;
}

/// EXIF container constants
pub mod exif_header {
    /// Identifier at the start of an EXIF APP1 payload
    pub const IDENTIFIER: &[u8; 6] = b"Exif\0\0";

    /// Distance from the APP1 marker to the TIFF block:
    /// marker (2) + length (2) + identifier (6)
    pub const TIFF_BLOCK_OFFSET: usize = 10;
}

/// TIFF header constants
pub mod header {
    /// Standard TIFF version number (42)
    pub const TIFF_VERSION: u16 = 42;

    /// "II" byte order marker for little-endian
    pub const LITTLE_ENDIAN_MARKER: u16 = 0x4949;

    /// "MM" byte order marker for big-endian
    pub const BIG_ENDIAN_MARKER: u16 = 0x4D4D;

    /// Size of an IFD entry in bytes
    pub const IFD_ENTRY_SIZE: usize = 12;

    /// Bytes available for an inline value in an IFD entry
    pub const INLINE_VALUE_SIZE: usize = 4;

    /// Default limit on the number of IFDs followed in a chain
    pub const DEFAULT_MAX_IFD_DEPTH: usize = 8;
}

/// Field types as defined by TIFF 6.0
pub mod field_types {
    pub const BYTE: u16 = 1;       // 8-bit unsigned integer
    pub const ASCII: u16 = 2;      // 8-bit byte containing ASCII character
    pub const SHORT: u16 = 3;      // 16-bit unsigned integer
    pub const LONG: u16 = 4;       // 32-bit unsigned integer
    pub const RATIONAL: u16 = 5;   // Two LONGs: numerator and denominator
    pub const SBYTE: u16 = 6;      // 8-bit signed integer
    pub const UNDEFINED: u16 = 7;  // 8-bit byte with unspecified format
    pub const SSHORT: u16 = 8;     // 16-bit signed integer
    pub const SLONG: u16 = 9;      // 32-bit signed integer
    pub const SRATIONAL: u16 = 10; // Two SLONGs: numerator and denominator
    pub const FLOAT: u16 = 11;     // Single precision IEEE floating point
    pub const DOUBLE: u16 = 12;    // Double precision IEEE floating point
}

/// IFD0 tags
pub mod tags {
    /// Pointer to the GPS sub-IFD
    pub const GPS_IFD_POINTER: u16 = 0x8825;
}

/// GPS sub-IFD tags
pub mod gps_tags {
    pub const VERSION_ID: u16 = 0;
    pub const LATITUDE_REF: u16 = 1;
    pub const LATITUDE: u16 = 2;
    pub const LONGITUDE_REF: u16 = 3;
    pub const LONGITUDE: u16 = 4;
    pub const ALTITUDE_REF: u16 = 5;
    pub const ALTITUDE: u16 = 6;
    pub const TIME_STAMP: u16 = 7;
    pub const SATELLITES: u16 = 8;
    pub const STATUS: u16 = 9;
    pub const MEASURE_MODE: u16 = 10;
    pub const DOP: u16 = 11;
    pub const SPEED_REF: u16 = 12;
    pub const SPEED: u16 = 13;
    pub const TRACK_REF: u16 = 14;
    pub const TRACK: u16 = 15;
    pub const IMG_DIRECTION_REF: u16 = 16;
    pub const IMG_DIRECTION: u16 = 17;
    pub const MAP_DATUM: u16 = 18;
    pub const DEST_LATITUDE_REF: u16 = 19;
    pub const DEST_LATITUDE: u16 = 20;
    pub const DEST_LONGITUDE_REF: u16 = 21;
    pub const DEST_LONGITUDE: u16 = 22;
    pub const DEST_BEARING_REF: u16 = 23;
    pub const DEST_BEARING: u16 = 24;
    pub const DEST_DISTANCE_REF: u16 = 25;
    pub const DEST_DISTANCE: u16 = 26;
    pub const PROCESSING_METHOD: u16 = 27;
    pub const AREA_INFORMATION: u16 = 28;
    pub const DATE_STAMP: u16 = 29;
    pub const DIFFERENTIAL: u16 = 30;
    pub const H_POSITIONING_ERROR: u16 = 31;
}
