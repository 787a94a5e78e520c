//! TIFF header and Image File Directory (IFD) walking
//!
//! The TIFF block inside an EXIF segment starts with a header naming the
//! byte order and the offset of IFD0. IFDs are lists of 12-byte tagged
//! entries chained through a trailing next-IFD offset. All offsets are
//! relative to the start of the TIFF block.

use std::collections::HashSet;

use crate::exif::constants::{field_types, header, tags};
use crate::exif::errors::{ExifResult, FormatError};
use crate::exif::trace::{ParseObserver, TraceEvent};
use crate::io::byte_order::{ByteOrder, ByteOrderHandler};
use crate::io::cursor::ByteCursor;

/// Parsed TIFF header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Byte order of every multi-byte value in the block
    pub byte_order: ByteOrder,
    /// Offset of IFD0
    pub first_ifd_offset: u32,
}

impl TiffHeader {
    /// Reads the 8-byte header at the start of the TIFF block
    pub fn read(block: &[u8]) -> ExifResult<Self> {
        let mut cursor = ByteCursor::new(block);
        let byte_order = ByteOrder::detect(&mut cursor)?;
        let handler = byte_order.create_handler();

        let version = handler.read_u16(&mut cursor)?;
        if version != header::TIFF_VERSION {
            return Err(FormatError::UnsupportedTiffVersion(version));
        }

        let first_ifd_offset = handler.read_u32(&mut cursor)?;
        Ok(TiffHeader { byte_order, first_ifd_offset })
    }
}

/// Represents an entry in an Image File Directory (IFD)
///
/// For small values `value_offset` holds the value itself; for larger
/// values it is an offset to where the value is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfdEntry {
    /// TIFF tag identifier
    pub tag: u16,
    /// Field type
    pub field_type: u16,
    /// Number of values
    pub count: u32,
    /// Value or offset to values
    pub value_offset: u32,
    /// Position of the value/offset field within the TIFF block
    pub field_position: usize,
}

impl IfdEntry {
    /// Reads one 12-byte entry at the cursor
    pub fn read(cursor: &mut ByteCursor<'_>, handler: &dyn ByteOrderHandler) -> ExifResult<Self> {
        cursor.ensure(header::IFD_ENTRY_SIZE)?;
        let tag = handler.read_u16(cursor)?;
        let field_type = handler.read_u16(cursor)?;
        let count = handler.read_u32(cursor)?;
        let field_position = cursor.position();
        let value_offset = handler.read_u32(cursor)?;

        Ok(IfdEntry { tag, field_type, count, value_offset, field_position })
    }

    /// Get the size in bytes for this entry's field type
    pub fn field_type_size(&self) -> usize {
        match self.field_type {
            field_types::BYTE | field_types::ASCII | field_types::SBYTE | field_types::UNDEFINED => 1,
            field_types::SHORT | field_types::SSHORT => 2,
            field_types::LONG | field_types::SLONG | field_types::FLOAT => 4,
            field_types::RATIONAL | field_types::SRATIONAL | field_types::DOUBLE => 8,
            _ => 1,
        }
    }

    /// Determines if the value is stored inline in the entry
    pub fn is_value_inline(&self) -> bool {
        (self.count as usize)
            .checked_mul(self.field_type_size())
            .map_or(false, |size| size <= header::INLINE_VALUE_SIZE)
    }

    /// Position of the value data within the TIFF block
    pub fn value_position(&self) -> usize {
        if self.is_value_inline() {
            self.field_position
        } else {
            self.value_offset as usize
        }
    }
}

/// Walks the IFD chain from IFD0 looking for the GPS IFD pointer
///
/// # Arguments
/// * `block` - The TIFF block
/// * `tiff_header` - Header read from the block
/// * `handler` - Handler for the block's byte order
/// * `max_depth` - Maximum number of IFDs to visit
/// * `observer` - Receives IFD events
///
/// # Returns
/// The GPS IFD offset, `None` when the chain ends without one, or
/// `FormatError::MalformedIfdChain` when the chain loops or is too long
pub fn find_gps_ifd(
    block: &[u8],
    tiff_header: &TiffHeader,
    handler: &dyn ByteOrderHandler,
    max_depth: usize,
    observer: &dyn ParseObserver,
) -> ExifResult<Option<u32>> {
    let mut visited = HashSet::new();
    let mut offset = tiff_header.first_ifd_offset;
    let mut depth = 0;

    while offset != 0 {
        if depth >= max_depth || !visited.insert(offset) {
            return Err(FormatError::MalformedIfdChain { offset, depth });
        }

        let mut cursor = ByteCursor::at(block, offset as usize);
        let entry_count = handler.read_u16(&mut cursor)?;
        cursor.ensure(entry_count as usize * header::IFD_ENTRY_SIZE)?;
        observer.on_event(&TraceEvent::IfdVisited { offset, entries: entry_count, depth });

        for _ in 0..entry_count {
            let entry = IfdEntry::read(&mut cursor, handler)?;
            if entry.tag == tags::GPS_IFD_POINTER {
                if entry.value_offset == 0 {
                    return Ok(None);
                }
                observer.on_event(&TraceEvent::GpsIfdFound { offset: entry.value_offset });
                return Ok(Some(entry.value_offset));
            }
        }

        offset = handler.read_u32(&mut cursor)?;
        depth += 1;
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::byte_order::{BigEndianHandler, LittleEndianHandler};

    #[test]
    fn test_header_little_endian() {
        let block = [0x49, 0x49, 42, 0, 8, 0, 0, 0];
        let header = TiffHeader::read(&block).unwrap();
        assert_eq!(header.byte_order, ByteOrder::LittleEndian);
        assert_eq!(header.first_ifd_offset, 8);
    }

    #[test]
    fn test_header_big_endian() {
        let block = [0x4D, 0x4D, 0, 42, 0, 0, 0, 8];
        let header = TiffHeader::read(&block).unwrap();
        assert_eq!(header.byte_order, ByteOrder::BigEndian);
        assert_eq!(header.first_ifd_offset, 8);
    }

    #[test]
    fn test_header_errors() {
        assert_eq!(TiffHeader::read(&[0x49, 0x4D, 42, 0, 8, 0, 0, 0]),
                   Err(FormatError::InvalidTiffHeader(0x4D49)));
        assert_eq!(TiffHeader::read(&[0x49, 0x49, 43, 0, 8, 0, 0, 0]),
                   Err(FormatError::UnsupportedTiffVersion(43)));
        assert!(matches!(TiffHeader::read(&[0x49, 0x49, 42]),
                         Err(FormatError::Truncated { .. })));
    }

    #[test]
    fn test_entry_inline_rules() {
        let data = [
            0x02, 0x00, // tag
            0x02, 0x00, // ASCII
            0x02, 0x00, 0x00, 0x00, // count
            b'N', 0x00, 0x00, 0x00,
        ];
        let mut cursor = ByteCursor::new(&data);
        let entry = IfdEntry::read(&mut cursor, &LittleEndianHandler).unwrap();
        assert!(entry.is_value_inline());
        assert_eq!(entry.value_position(), 8);

        let rational = IfdEntry { field_type: field_types::RATIONAL, count: 3, ..entry };
        assert!(!rational.is_value_inline());
        assert_eq!(rational.value_position(), u32::from_le_bytes([b'N', 0, 0, 0]) as usize);

        let huge = IfdEntry { field_type: field_types::DOUBLE, count: u32::MAX, ..entry };
        assert!(!huge.is_value_inline());
    }

    #[test]
    fn test_entry_reads_big_endian() {
        let data = [0x88, 0x25, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x01, 0x00];
        let mut cursor = ByteCursor::new(&data);
        let entry = IfdEntry::read(&mut cursor, &BigEndianHandler).unwrap();
        assert_eq!(entry.tag, tags::GPS_IFD_POINTER);
        assert_eq!(entry.value_offset, 256);
    }
}
