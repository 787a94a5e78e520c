//! Tests for the byte order module

extern crate std;

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use crate::coordinate::Rational;
use crate::exif::errors::FormatError;
use crate::io::byte_order::{BigEndianHandler, ByteOrder, ByteOrderHandler, LittleEndianHandler};
use crate::io::cursor::ByteCursor;

#[test]
fn test_byte_order_detection_little_endian() {
    let mut buffer = Vec::new();
    buffer.write_u16::<LittleEndian>(0x4949).unwrap(); // II
    let mut cursor = ByteCursor::new(&buffer);

    let result = ByteOrder::detect(&mut cursor);
    std::assert_eq!(result, Ok(ByteOrder::LittleEndian));
}

#[test]
fn test_byte_order_detection_big_endian() {
    let mut buffer = Vec::new();
    buffer.write_u16::<BigEndian>(0x4D4D).unwrap(); // MM
    let mut cursor = ByteCursor::new(&buffer);

    let result = ByteOrder::detect(&mut cursor);
    std::assert_eq!(result, Ok(ByteOrder::BigEndian));
}

#[test]
fn test_byte_order_detection_invalid() {
    let mut buffer = Vec::new();
    buffer.write_u16::<LittleEndian>(0x1234).unwrap(); // Invalid
    let mut cursor = ByteCursor::new(&buffer);

    let result = ByteOrder::detect(&mut cursor);
    std::assert_eq!(result, Err(FormatError::InvalidTiffHeader(0x1234)));
}

#[test]
fn test_little_endian_handler() {
    let mut buffer = Vec::new();
    buffer.write_u16::<LittleEndian>(0x1234).unwrap();
    buffer.write_u32::<LittleEndian>(0x12345678).unwrap();
    buffer.write_u32::<LittleEndian>(3).unwrap();
    buffer.write_u32::<LittleEndian>(4).unwrap();
    let mut cursor = ByteCursor::new(&buffer);

    let handler = LittleEndianHandler;

    std::assert_eq!(handler.read_u16(&mut cursor).unwrap(), 0x1234);
    std::assert_eq!(handler.read_u32(&mut cursor).unwrap(), 0x12345678);
    std::assert_eq!(handler.read_rational(&mut cursor).unwrap(), Rational::new(3, 4));
}

#[test]
fn test_big_endian_handler() {
    let mut buffer = Vec::new();
    buffer.write_u16::<BigEndian>(0x1234).unwrap();
    buffer.write_u32::<BigEndian>(0x12345678).unwrap();
    buffer.write_u32::<BigEndian>(30).unwrap();
    buffer.write_u32::<BigEndian>(1).unwrap();
    let mut cursor = ByteCursor::new(&buffer);

    let handler = BigEndianHandler;

    std::assert_eq!(handler.read_u16(&mut cursor).unwrap(), 0x1234);
    std::assert_eq!(handler.read_u32(&mut cursor).unwrap(), 0x12345678);
    std::assert_eq!(handler.read_rational(&mut cursor).unwrap(), Rational::new(30, 1));
}

#[test]
fn test_half_rational_is_truncated_without_consuming() {
    let mut buffer = Vec::new();
    buffer.write_u32::<LittleEndian>(7).unwrap();
    let mut cursor = ByteCursor::new(&buffer);

    let result = LittleEndianHandler.read_rational(&mut cursor);
    std::assert!(matches!(result, Err(FormatError::Truncated { offset: 0, needed: 8, len: 4 })));
    std::assert_eq!(cursor.position(), 0);
}
