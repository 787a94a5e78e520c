//! JPEG marker scanner
//!
//! Walks the marker segments at the front of a JPEG stream and locates the
//! TIFF block carried by the first APP1 segment with an `Exif\0\0`
//! identifier. Only the header area is scanned: the walk ends at SOS or EOI.

use crate::exif::constants::{exif_header, markers};
use crate::exif::errors::{ExifResult, FormatError};
use crate::exif::trace::{ParseObserver, TraceEvent};
use crate::io::byte_order::{BigEndianHandler, ByteOrderHandler};
use crate::io::cursor::ByteCursor;

/// Byte range of the TIFF block inside the JPEG buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffBlock {
    /// Offset of the first TIFF header byte
    pub start: usize,
    /// End of the enclosing APP1 segment (exclusive)
    pub end: usize,
}

impl TiffBlock {
    /// Returns the block's bytes, or an empty slice if the range does not
    /// fit `data`
    pub fn slice<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        data.get(self.start..self.end).unwrap_or_default()
    }
}

/// Markers that are not followed by a length field
fn is_standalone(marker: u16) -> bool {
    marker == markers::SOI
        || marker == markers::TEM
        || (markers::RST0..=markers::RST7).contains(&marker)
}

/// Locates the EXIF TIFF block in a JPEG buffer
///
/// # Arguments
/// * `data` - The start of a JPEG file (a prefix is enough)
/// * `observer` - Receives marker and scan events
///
/// # Returns
/// `Ok(Some(block))` for the first EXIF APP1 segment, `Ok(None)` when the
/// header area holds no usable EXIF segment, or `FormatError::NotAJpeg`
/// when the SOI marker is missing
pub fn find_tiff_block(data: &[u8], observer: &dyn ParseObserver) -> ExifResult<Option<TiffBlock>> {
    let handler = BigEndianHandler;
    let mut cursor = ByteCursor::new(data);

    match handler.read_u16(&mut cursor) {
        Ok(markers::SOI) => {}
        _ => return Err(FormatError::NotAJpeg),
    }

    let stop = |offset: usize, reason: &'static str| -> ExifResult<Option<TiffBlock>> {
        observer.on_event(&TraceEvent::ScanStopped { offset, reason });
        Ok(None)
    };

    loop {
        let offset = cursor.position();

        // A marker plus its length field must fit
        if cursor.remaining() < 4 {
            return stop(offset, "end of buffer");
        }

        let prefix = cursor.peek_bytes(2)?;
        if prefix[0] != markers::PREFIX {
            return stop(offset, "expected marker prefix");
        }
        if prefix[1] == markers::PREFIX {
            // Fill byte
            cursor.skip(1)?;
            continue;
        }

        let marker = handler.read_u16(&mut cursor)?;
        observer.on_event(&TraceEvent::MarkerFound { offset, marker });

        if marker == markers::EOI || marker == markers::SOS {
            return stop(offset, "reached image data");
        }
        if is_standalone(marker) {
            continue;
        }
        if !(markers::SEGMENT_FIRST..=markers::SEGMENT_LAST).contains(&marker) {
            return stop(offset, "unexpected marker");
        }

        let length = handler.read_u16(&mut cursor)? as usize;
        if length < 2 {
            return stop(offset, "invalid segment length");
        }
        let segment_end = offset + 2 + length;
        if segment_end > data.len() {
            return stop(offset, "segment extends past end of buffer");
        }

        if marker == markers::APP1
            && length >= 2 + exif_header::IDENTIFIER.len()
            && cursor.peek_bytes(exif_header::IDENTIFIER.len())? == exif_header::IDENTIFIER
        {
            let block = TiffBlock {
                start: offset + exif_header::TIFF_BLOCK_OFFSET,
                end: segment_end,
            };
            observer.on_event(&TraceEvent::ExifSegmentFound { start: block.start, end: block.end });
            return Ok(Some(block));
        }

        cursor.seek(segment_end);
    }
}
