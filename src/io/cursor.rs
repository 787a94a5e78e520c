//! Bounds-checked cursor over a borrowed byte buffer
//!
//! The parser never indexes the input directly. Every read goes through
//! `ByteCursor`, which checks the requested range against the buffer
//! length and reports `FormatError::Truncated` instead of panicking.

use crate::exif::errors::{ExifResult, FormatError};

/// Read-only view over a byte buffer with a current position
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    /// Borrowed input
    data: &'a [u8],
    /// Offset of the next read
    position: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor positioned at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        ByteCursor { data, position: 0 }
    }

    /// Creates a cursor positioned at `position`
    ///
    /// The position is not validated here; the first read past the end
    /// fails with `FormatError::Truncated`.
    pub fn at(data: &'a [u8], position: usize) -> Self {
        ByteCursor { data, position }
    }

    /// Current offset
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the position and the end of the buffer
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Moves to an absolute offset
    pub fn seek(&mut self, position: usize) {
        self.position = position;
    }

    /// Checks that `count` bytes are readable at the current position
    pub fn ensure(&self, count: usize) -> ExifResult<()> {
        match self.position.checked_add(count) {
            Some(end) if end <= self.data.len() => Ok(()),
            _ => Err(FormatError::Truncated {
                offset: self.position,
                needed: count,
                len: self.data.len(),
            }),
        }
    }

    /// Advances past `count` bytes
    pub fn skip(&mut self, count: usize) -> ExifResult<()> {
        self.ensure(count)?;
        self.position += count;
        Ok(())
    }

    /// Reads `count` bytes and advances
    pub fn read_bytes(&mut self, count: usize) -> ExifResult<&'a [u8]> {
        self.ensure(count)?;
        let start = self.position;
        self.position += count;
        Ok(&self.data[start..self.position])
    }

    /// Returns `count` bytes without advancing
    pub fn peek_bytes(&self, count: usize) -> ExifResult<&'a [u8]> {
        self.ensure(count)?;
        Ok(&self.data[self.position..self.position + count])
    }

    /// Reads a single byte
    pub fn read_u8(&mut self) -> ExifResult<u8> {
        Ok(self.read_bytes(1)?[0])
    }
}
