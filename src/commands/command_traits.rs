//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use crate::exif::errors::GeoTagResult;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> GeoTagResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches) -> GeoTagResult<Box<dyn Command>>;
}
