//! Scan and output configuration
//!
//! Settings can come from defaults, a TOML file and command-line flags, in
//! increasing order of precedence. The file layout is:
//!
//! ```toml
//! [scan]
//! prefix_bytes = 131072
//! max_ifd_depth = 8
//!
//! [output]
//! format = "text"
//! precision = 6
//! ```

use std::fmt;
use std::fs;

use crate::exif::constants::header;
use crate::exif::errors::{GeoTagError, GeoTagResult};

/// Default number of bytes read from the front of each file
pub const DEFAULT_PREFIX_BYTES: usize = 128 * 1024;

/// Default number of decimals for printed degrees
pub const DEFAULT_PRECISION: usize = 6;

/// Largest accepted precision
pub const MAX_PRECISION: usize = 12;

/// How results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `path: lat, lon` line per file
    Text,
    /// Comma-separated values with a header row
    Csv,
    /// GPX 1.1 waypoints
    Gpx,
}

impl OutputFormat {
    /// Parses a format name
    pub fn from_name(name: &str) -> GeoTagResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "gpx" => Ok(OutputFormat::Gpx),
            other => Err(GeoTagError::Config(format!("Unknown output format: {}", other))),
        }
    }

    /// Returns the format name
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Gpx => "gpx",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings for locating and reporting GPS positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Bytes read from the start of each file
    pub prefix_bytes: usize,
    /// IFD chain depth guard
    pub max_ifd_depth: usize,
    /// Output format
    pub format: OutputFormat,
    /// Decimal places for degrees
    pub precision: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            prefix_bytes: DEFAULT_PREFIX_BYTES,
            max_ifd_depth: header::DEFAULT_MAX_IFD_DEPTH,
            format: OutputFormat::Text,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl ScanConfig {
    /// Parse a configuration from a TOML string
    ///
    /// Missing keys keep their defaults and unknown keys are ignored.
    pub fn from_toml_str(content: &str) -> GeoTagResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(GeoTagError::Config(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = ScanConfig::default();

        if let Some(value) = Self::read_usize(&toml_value, "scan", "prefix_bytes")? {
            config.prefix_bytes = value;
        }
        if let Some(value) = Self::read_usize(&toml_value, "scan", "max_ifd_depth")? {
            config.max_ifd_depth = value;
        }
        if let Some(value) = Self::read_usize(&toml_value, "output", "precision")? {
            config.precision = value;
        }
        if let Some(value) = toml_value.get("output").and_then(|t| t.get("format")) {
            let name = value.as_str().ok_or_else(|| {
                GeoTagError::Config("output.format must be a string".to_string())
            })?;
            config.format = OutputFormat::from_name(name)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &str) -> GeoTagResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Checks that every value is usable
    pub fn validate(&self) -> GeoTagResult<()> {
        if self.prefix_bytes == 0 {
            return Err(GeoTagError::Config("prefix_bytes must be greater than 0".to_string()));
        }
        if self.max_ifd_depth == 0 {
            return Err(GeoTagError::Config("max_ifd_depth must be greater than 0".to_string()));
        }
        if self.precision > MAX_PRECISION {
            return Err(GeoTagError::Config(format!(
                "precision must be at most {} (got {})",
                MAX_PRECISION, self.precision
            )));
        }
        Ok(())
    }

    /// Helper to read a non-negative integer from `[section] key`
    fn read_usize(toml_value: &toml::Value, section: &str, key: &str) -> GeoTagResult<Option<usize>> {
        let value = match toml_value.get(section).and_then(|t| t.get(key)) {
            Some(value) => value,
            None => return Ok(None),
        };

        value.as_integer()
            .and_then(|n| usize::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| GeoTagError::Config(format!(
                "{}.{} must be a non-negative integer",
                section, key
            )))
    }
}
