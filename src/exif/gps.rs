//! GPS sub-IFD decoding
//!
//! Reads the position-related entries of the GPS IFD into `GpsFields` and
//! turns them into a `GeoCoordinate`. Tags other than the six position
//! tags are skipped, as are position entries with an unusable type or
//! count.

use crate::coordinate::{to_decimal_degrees, GeoCoordinate, Hemisphere, Rational};
use crate::exif::constants::{field_types, gps_tags};
use crate::exif::errors::ExifResult;
use crate::exif::ifd::IfdEntry;
use crate::exif::trace::{ParseObserver, TraceEvent};
use crate::io::byte_order::ByteOrderHandler;
use crate::io::cursor::ByteCursor;

/// Altitude reference value for "below sea level"
const BELOW_SEA_LEVEL: u8 = 1;

/// Position tags collected from a GPS IFD
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpsFields {
    pub latitude: Option<[Rational; 3]>,
    pub latitude_ref: Option<Hemisphere>,
    pub longitude: Option<[Rational; 3]>,
    pub longitude_ref: Option<Hemisphere>,
    pub altitude: Option<Rational>,
    pub altitude_ref: Option<u8>,
}

impl GpsFields {
    /// Builds the coordinate when both axes are present
    ///
    /// A missing hemisphere reference counts as north/east. A missing
    /// altitude reference counts as above sea level.
    pub fn into_coordinate(self) -> Option<GeoCoordinate> {
        let latitude = to_decimal_degrees(&self.latitude?, self.latitude_ref.unwrap_or(Hemisphere::North));
        let longitude = to_decimal_degrees(&self.longitude?, self.longitude_ref.unwrap_or(Hemisphere::East));

        let altitude = self.altitude.map(|value| {
            let meters = value.to_f64();
            if self.altitude_ref == Some(BELOW_SEA_LEVEL) { -meters } else { meters }
        });

        Some(GeoCoordinate { latitude, longitude, altitude })
    }
}

/// Reads the first byte of an entry's value
fn read_first_byte(block: &[u8], entry: &IfdEntry) -> ExifResult<Option<u8>> {
    if entry.count == 0 {
        return Ok(None);
    }
    let mut cursor = ByteCursor::at(block, entry.value_position());
    cursor.read_u8().map(Some)
}

/// Reads the first `N` rationals of a RATIONAL entry
fn read_rationals<const N: usize>(
    block: &[u8],
    entry: &IfdEntry,
    handler: &dyn ByteOrderHandler,
) -> ExifResult<Option<[Rational; N]>> {
    if entry.field_type != field_types::RATIONAL || (entry.count as usize) < N {
        return Ok(None);
    }

    let mut cursor = ByteCursor::at(block, entry.value_position());
    let mut values = [Rational::default(); N];
    for value in values.iter_mut() {
        *value = handler.read_rational(&mut cursor)?;
    }
    Ok(Some(values))
}

/// Keeps a hemisphere only if it belongs to the axis
fn axis_ref(byte: Option<u8>, positive: Hemisphere, negative: Hemisphere) -> Option<Hemisphere> {
    byte.and_then(Hemisphere::from_ref)
        .filter(|h| *h == positive || *h == negative)
}

/// Decodes the GPS IFD at `offset`
///
/// # Arguments
/// * `block` - The TIFF block
/// * `offset` - Block-relative offset of the GPS IFD
/// * `handler` - Handler for the block's byte order
/// * `observer` - Receives per-tag events
///
/// # Returns
/// The collected fields; reads past the end of the block are errors
pub fn decode_gps_ifd(
    block: &[u8],
    offset: u32,
    handler: &dyn ByteOrderHandler,
    observer: &dyn ParseObserver,
) -> ExifResult<GpsFields> {
    let mut cursor = ByteCursor::at(block, offset as usize);
    let entry_count = handler.read_u16(&mut cursor)?;
    let mut fields = GpsFields::default();

    for _ in 0..entry_count {
        let entry = IfdEntry::read(&mut cursor, handler)?;

        let decoded = match entry.tag {
            gps_tags::LATITUDE_REF => {
                fields.latitude_ref = axis_ref(read_first_byte(block, &entry)?, Hemisphere::North, Hemisphere::South);
                fields.latitude_ref.is_some()
            }
            gps_tags::LATITUDE => {
                fields.latitude = read_rationals::<3>(block, &entry, handler)?;
                fields.latitude.is_some()
            }
            gps_tags::LONGITUDE_REF => {
                fields.longitude_ref = axis_ref(read_first_byte(block, &entry)?, Hemisphere::East, Hemisphere::West);
                fields.longitude_ref.is_some()
            }
            gps_tags::LONGITUDE => {
                fields.longitude = read_rationals::<3>(block, &entry, handler)?;
                fields.longitude.is_some()
            }
            gps_tags::ALTITUDE_REF => {
                fields.altitude_ref = read_first_byte(block, &entry)?;
                fields.altitude_ref.is_some()
            }
            gps_tags::ALTITUDE => {
                fields.altitude = read_rationals::<1>(block, &entry, handler)?.map(|[value]| value);
                fields.altitude.is_some()
            }
            _ => false,
        };

        let event = if decoded {
            TraceEvent::GpsTagDecoded { tag: entry.tag }
        } else {
            TraceEvent::GpsTagSkipped { tag: entry.tag, field_type: entry.field_type, count: entry.count }
        };
        observer.on_event(&event);
    }

    Ok(fields)
}
