//! Integration tests for locating GPS positions in JPEG files

use std::fs;
use std::path::PathBuf;

use geotagkit::{read_gps, FormatError, GeoTagError, GeoTagKit, GpsReaderBuilder, OutputFormat, ScanConfig};

/// Writes a little-endian IFD entry
fn entry(buffer: &mut Vec<u8>, tag: u16, field_type: u16, count: u32, value: [u8; 4]) {
    buffer.extend_from_slice(&tag.to_le_bytes());
    buffer.extend_from_slice(&field_type.to_le_bytes());
    buffer.extend_from_slice(&count.to_le_bytes());
    buffer.extend_from_slice(&value);
}

fn rational(buffer: &mut Vec<u8>, numerator: u32, denominator: u32) {
    buffer.extend_from_slice(&numerator.to_le_bytes());
    buffer.extend_from_slice(&denominator.to_le_bytes());
}

/// TIFF block placing the photo at 51°30'26"N 0°7'39"W, 35 m up
fn london_tiff() -> Vec<u8> {
    let mut tiff = Vec::new();

    // Header
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes());

    // IFD0: GPS pointer only
    tiff.extend_from_slice(&1u16.to_le_bytes());
    entry(&mut tiff, 0x8825, 4, 1, 26u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());
    assert_eq!(tiff.len(), 26);

    // GPS IFD: 6 entries, data area starts at 26 + 2 + 72 + 4 = 104
    tiff.extend_from_slice(&6u16.to_le_bytes());
    entry(&mut tiff, 1, 2, 2, *b"N\0\0\0");
    entry(&mut tiff, 2, 5, 3, 104u32.to_le_bytes());
    entry(&mut tiff, 3, 2, 2, *b"W\0\0\0");
    entry(&mut tiff, 4, 5, 3, 128u32.to_le_bytes());
    entry(&mut tiff, 5, 1, 1, [0, 0, 0, 0]);
    entry(&mut tiff, 6, 5, 1, 152u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());
    assert_eq!(tiff.len(), 104);

    rational(&mut tiff, 51, 1);
    rational(&mut tiff, 30, 1);
    rational(&mut tiff, 26, 1);
    rational(&mut tiff, 0, 1);
    rational(&mut tiff, 7, 1);
    rational(&mut tiff, 39, 1);
    rational(&mut tiff, 35, 1);
    tiff
}

/// Minimal JPEG: SOI, APP1 Exif, SOS, entropy bytes, EOI
fn london_jpeg() -> Vec<u8> {
    let tiff = london_tiff();
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&((2 + 6 + tiff.len()) as u16).to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x02, 0x12, 0x34, 0xFF, 0xD9]);
    jpeg
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("geotagkit_{}_{}", std::process::id(), name))
}

fn assert_london(latitude: f64, longitude: f64) {
    assert!((latitude - 51.507222).abs() < 1e-6, "latitude {}", latitude);
    assert!((longitude + 0.1275).abs() < 1e-6, "longitude {}", longitude);
}

#[test]
fn test_read_gps_from_buffer() {
    let coord = read_gps(&london_jpeg()).unwrap().unwrap();
    assert_london(coord.latitude, coord.longitude);
    assert_eq!(coord.altitude, Some(35.0));
    assert!(coord.is_within_bounds());
}

#[test]
fn test_reader_accepts_bare_tiff() {
    let reader = GpsReaderBuilder::new().max_ifd_depth(2).build();
    let coord = reader.read_tiff(&london_tiff()).unwrap().unwrap();
    assert_london(coord.latitude, coord.longitude);
}

#[test]
fn test_locate_file() {
    let path = temp_path("london.jpg");
    fs::write(&path, london_jpeg()).unwrap();

    let kit = GeoTagKit::new(ScanConfig::default()).unwrap();
    let coord = kit.locate_file(&path).unwrap().unwrap();
    assert_london(coord.latitude, coord.longitude);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_short_prefix_finds_nothing() {
    let path = temp_path("prefix.jpg");
    fs::write(&path, london_jpeg()).unwrap();

    let config = ScanConfig { prefix_bytes: 40, ..ScanConfig::default() };
    let kit = GeoTagKit::new(config).unwrap();
    assert!(kit.locate_file(&path).unwrap().is_none());

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_non_jpeg_file_is_format_error() {
    let path = temp_path("not_a_photo.png");
    fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();

    let kit = GeoTagKit::new(ScanConfig::default()).unwrap();
    let result = kit.locate_file(&path);
    assert!(matches!(result, Err(GeoTagError::Format(FormatError::NotAJpeg))));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_config_file() {
    let path = temp_path("config.toml");
    fs::write(&path, "[scan]\nmax_ifd_depth = 3\n\n[output]\nformat = \"gpx\"\n").unwrap();

    let config = ScanConfig::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(config.max_ifd_depth, 3);
    assert_eq!(config.format, OutputFormat::Gpx);
    assert_eq!(config.prefix_bytes, ScanConfig::default().prefix_bytes);

    fs::remove_file(&path).unwrap();
}
