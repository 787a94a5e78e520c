//! Byte order handling for TIFF data
//!
//! This module implements the Strategy pattern for handling different
//! byte orders (little-endian vs big-endian) when reading the TIFF block
//! embedded in an EXIF segment. JPEG marker reads reuse the big-endian
//! handler.

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};

use crate::coordinate::Rational;
use crate::exif::constants::header;
use crate::exif::errors::{ExifResult, FormatError};
use crate::io::cursor::ByteCursor;

/// Represents the byte order of a TIFF block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order (II)
    LittleEndian,
    /// Big-endian byte order (MM)
    BigEndian,
}

impl ByteOrder {
    /// Detects the byte order from the TIFF header
    pub fn detect(cursor: &mut ByteCursor<'_>) -> ExifResult<Self> {
        let byte_order = LittleEndian::read_u16(cursor.read_bytes(2)?);
        match byte_order {
            header::LITTLE_ENDIAN_MARKER => Ok(ByteOrder::LittleEndian), // "II" (Intel)
            header::BIG_ENDIAN_MARKER => Ok(ByteOrder::BigEndian),       // "MM" (Motorola)
            _ => Err(FormatError::InvalidTiffHeader(byte_order)),
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (II)",
            ByteOrder::BigEndian => "Big Endian (MM)",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// Trait for byte order handling strategies
pub trait ByteOrderHandler: Send + Sync {
    /// Read a u16 value
    fn read_u16(&self, cursor: &mut ByteCursor<'_>) -> ExifResult<u16>;

    /// Read a u32 value
    fn read_u32(&self, cursor: &mut ByteCursor<'_>) -> ExifResult<u32>;

    /// Read a rational value (two u32 values as numerator/denominator)
    fn read_rational(&self, cursor: &mut ByteCursor<'_>) -> ExifResult<Rational> {
        // Both halves must be present before either is consumed
        cursor.ensure(8)?;
        let numerator = self.read_u32(cursor)?;
        let denominator = self.read_u32(cursor)?;
        Ok(Rational::new(numerator, denominator))
    }
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_u16(&self, cursor: &mut ByteCursor<'_>) -> ExifResult<u16> {
        cursor.read_bytes(2).map(LittleEndian::read_u16)
    }

    fn read_u32(&self, cursor: &mut ByteCursor<'_>) -> ExifResult<u32> {
        cursor.read_bytes(4).map(LittleEndian::read_u32)
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_u16(&self, cursor: &mut ByteCursor<'_>) -> ExifResult<u16> {
        cursor.read_bytes(2).map(BigEndian::read_u16)
    }

    fn read_u32(&self, cursor: &mut ByteCursor<'_>) -> ExifResult<u32> {
        cursor.read_bytes(4).map(BigEndian::read_u32)
    }
}
