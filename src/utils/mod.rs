//! Utility modules for common functionality
//!
//! This module provides logging, progress reporting and GPX output used by
//! the command-line tool.

pub mod logger;
pub(crate) mod progress;
pub mod gpx_utils;
