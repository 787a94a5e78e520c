//! Custom error types for EXIF GPS processing
//!
//! Two layers of errors live here. `FormatError` describes structural
//! problems in the image bytes and is the only error the parser itself
//! produces. `GeoTagError` wraps it together with the I/O and configuration
//! failures of the file-level API and the command-line tool.

use std::fmt;
use std::io;

/// Structural errors found while parsing JPEG/EXIF bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The buffer does not start with the JPEG SOI marker
    NotAJpeg,
    /// A read needed more bytes than the buffer holds
    Truncated {
        /// Offset the read started at
        offset: usize,
        /// Number of bytes the read needed
        needed: usize,
        /// Length of the buffer being read
        len: usize,
    },
    /// Unrecognized TIFF byte order marker
    InvalidTiffHeader(u16),
    /// TIFF magic number other than 42
    UnsupportedTiffVersion(u16),
    /// IFD chain loops back on itself or is longer than the depth guard
    MalformedIfdChain {
        /// Offset of the IFD that tripped the guard
        offset: u32,
        /// Number of IFDs visited before giving up
        depth: usize,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::NotAJpeg => write!(f, "Not a JPEG file (missing SOI marker)"),
            FormatError::Truncated { offset, needed, len } => write!(
                f,
                "Truncated data: need {} bytes at offset {} but buffer holds {}",
                needed, offset, len
            ),
            FormatError::InvalidTiffHeader(v) => write!(f, "Invalid TIFF byte order marker: {:#06x}", v),
            FormatError::UnsupportedTiffVersion(v) => write!(f, "Unsupported TIFF version: {}", v),
            FormatError::MalformedIfdChain { offset, depth } => write!(
                f,
                "Malformed IFD chain at offset {} after {} directories",
                offset, depth
            ),
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type for parsing operations
pub type ExifResult<T> = Result<T, FormatError>;

/// Errors raised by the file-level API and the CLI
#[derive(Debug)]
pub enum GeoTagError {
    /// I/O error
    IoError(io::Error),
    /// The image bytes are malformed
    Format(FormatError),
    /// Invalid configuration value or file
    Config(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoTagError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoTagError::Format(e) => write!(f, "Format error: {}", e),
            GeoTagError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GeoTagError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for GeoTagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoTagError::IoError(e) => Some(e),
            GeoTagError::Format(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoTagError {
    fn from(error: io::Error) -> Self {
        GeoTagError::IoError(error)
    }
}

impl From<FormatError> for GeoTagError {
    fn from(error: FormatError) -> Self {
        GeoTagError::Format(error)
    }
}

/// Result type for file-level and CLI operations
pub type GeoTagResult<T> = Result<T, GeoTagError>;
