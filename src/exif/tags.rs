//! GPS tag names for diagnostics
//!
//! Lookup tables from tag and field type numbers to readable names,
//! used by trace output and the CLI.

use std::collections::HashMap;
use lazy_static::lazy_static;
use crate::exif::constants::{field_types, gps_tags};

lazy_static! {
    static ref GPS_TAG_NAMES: HashMap<u16, &'static str> = {
        let mut m = HashMap::new();
        m.insert(gps_tags::VERSION_ID, "GPSVersionID");
        m.insert(gps_tags::LATITUDE_REF, "GPSLatitudeRef");
        m.insert(gps_tags::LATITUDE, "GPSLatitude");
        m.insert(gps_tags::LONGITUDE_REF, "GPSLongitudeRef");
        m.insert(gps_tags::LONGITUDE, "GPSLongitude");
        m.insert(gps_tags::ALTITUDE_REF, "GPSAltitudeRef");
        m.insert(gps_tags::ALTITUDE, "GPSAltitude");
        m.insert(gps_tags::TIME_STAMP, "GPSTimeStamp");
        m.insert(gps_tags::SATELLITES, "GPSSatellites");
        m.insert(gps_tags::STATUS, "GPSStatus");
        m.insert(gps_tags::MEASURE_MODE, "GPSMeasureMode");
        m.insert(gps_tags::DOP, "GPSDOP");
        m.insert(gps_tags::SPEED_REF, "GPSSpeedRef");
        m.insert(gps_tags::SPEED, "GPSSpeed");
        m.insert(gps_tags::TRACK_REF, "GPSTrackRef");
        m.insert(gps_tags::TRACK, "GPSTrack");
        m.insert(gps_tags::IMG_DIRECTION_REF, "GPSImgDirectionRef");
        m.insert(gps_tags::IMG_DIRECTION, "GPSImgDirection");
        m.insert(gps_tags::MAP_DATUM, "GPSMapDatum");
        m.insert(gps_tags::DEST_LATITUDE_REF, "GPSDestLatitudeRef");
        m.insert(gps_tags::DEST_LATITUDE, "GPSDestLatitude");
        m.insert(gps_tags::DEST_LONGITUDE_REF, "GPSDestLongitudeRef");
        m.insert(gps_tags::DEST_LONGITUDE, "GPSDestLongitude");
        m.insert(gps_tags::DEST_BEARING_REF, "GPSDestBearingRef");
        m.insert(gps_tags::DEST_BEARING, "GPSDestBearing");
        m.insert(gps_tags::DEST_DISTANCE_REF, "GPSDestDistanceRef");
        m.insert(gps_tags::DEST_DISTANCE, "GPSDestDistance");
        m.insert(gps_tags::PROCESSING_METHOD, "GPSProcessingMethod");
        m.insert(gps_tags::AREA_INFORMATION, "GPSAreaInformation");
        m.insert(gps_tags::DATE_STAMP, "GPSDateStamp");
        m.insert(gps_tags::DIFFERENTIAL, "GPSDifferential");
        m.insert(gps_tags::H_POSITIONING_ERROR, "GPSHPositioningError");
        m
    };
}

/// Returns the name of a GPS IFD tag
pub fn gps_tag_name(tag: u16) -> &'static str {
    GPS_TAG_NAMES.get(&tag).copied().unwrap_or("Unknown")
}

/// Returns the name of a TIFF field type
pub fn field_type_name(field_type: u16) -> &'static str {
    match field_type {
        field_types::BYTE => "BYTE",
        field_types::ASCII => "ASCII",
        field_types::SHORT => "SHORT",
        field_types::LONG => "LONG",
        field_types::RATIONAL => "RATIONAL",
        field_types::SBYTE => "SBYTE",
        field_types::UNDEFINED => "UNDEFINED",
        field_types::SSHORT => "SSHORT",
        field_types::SLONG => "SLONG",
        field_types::SRATIONAL => "SRATIONAL",
        field_types::FLOAT => "FLOAT",
        field_types::DOUBLE => "DOUBLE",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_names() {
        assert_eq!(gps_tag_name(2), "GPSLatitude");
        assert_eq!(gps_tag_name(6), "GPSAltitude");
        assert_eq!(gps_tag_name(999), "Unknown");
        assert_eq!(field_type_name(5), "RATIONAL");
        assert_eq!(field_type_name(42), "Unknown");
    }
}
