//! CLI command implementations
//!
//! This module contains the command-line definition and the commands
//! it dispatches to, using the Command pattern.

pub mod command_traits;
pub mod locate_command;
pub mod export_command;

pub use command_traits::{Command, CommandFactory};
pub use locate_command::LocateCommand;
pub use export_command::ExportCommand;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::config::{OutputFormat, ScanConfig};
use crate::exif::errors::{GeoTagError, GeoTagResult};

/// Builds the command-line definition
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("geotagkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract GPS locations from JPEG EXIF metadata")
        .arg(
            Arg::new("input")
                .help("Input JPEG files")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity; also traces parser events")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format (text, csv, gpx)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .visible_alias("gpx")
                .help("Write located files as GPX waypoints to FILE")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("prefix-bytes")
                .long("prefix-bytes")
                .help("Bytes read from the start of each file")
                .value_name("BYTES")
                .value_parser(value_parser!(usize))
                .required(false),
        )
        .arg(
            Arg::new("max-ifd-depth")
                .long("max-ifd-depth")
                .help("Maximum number of IFDs followed in a chain")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .required(false),
        )
        .arg(
            Arg::new("precision")
                .long("precision")
                .help("Decimal places for printed coordinates")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to FILE")
                .value_name("FILE")
                .required(false),
        )
}

/// Combines the configuration file with command-line overrides
pub fn resolve_config(args: &ArgMatches) -> GeoTagResult<ScanConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => ScanConfig::from_file(path)?,
        None => ScanConfig::default(),
    };

    if let Some(value) = args.get_one::<usize>("prefix-bytes") {
        config.prefix_bytes = *value;
    }
    if let Some(value) = args.get_one::<usize>("max-ifd-depth") {
        config.max_ifd_depth = *value;
    }
    if let Some(value) = args.get_one::<usize>("precision") {
        config.precision = *value;
    }
    if let Some(name) = args.get_one::<String>("format") {
        config.format = OutputFormat::from_name(name)?;
    }

    config.validate()?;
    Ok(config)
}

/// Input paths given on the command line
pub(crate) fn input_paths(args: &ArgMatches) -> GeoTagResult<Vec<String>> {
    let inputs: Vec<String> = args.get_many::<String>("input")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if inputs.is_empty() {
        return Err(GeoTagError::GenericError("Missing input file".to_string()));
    }
    Ok(inputs)
}

/// Factory for creating command instances based on CLI arguments
///
/// GPX output goes through the export command; everything else is a
/// listing.
pub struct GeoTagCommandFactory;

impl GeoTagCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeoTagCommandFactory
    }
}

impl Default for GeoTagCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for GeoTagCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> GeoTagResult<Box<dyn Command>> {
        let config = resolve_config(args)?;

        if args.contains_id("output") || config.format == OutputFormat::Gpx {
            Ok(Box::new(ExportCommand::new(args, config)?))
        } else {
            Ok(Box::new(LocateCommand::new(args, config)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(args: &[&str]) -> ArgMatches {
        build_cli().try_get_matches_from(args).unwrap()
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = matches(&["geotagkit", "a.jpg", "b.jpg", "--format", "csv",
                             "--precision", "3", "--max-ifd-depth", "4", "--prefix-bytes", "4096"]);
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.precision, 3);
        assert_eq!(config.max_ifd_depth, 4);
        assert_eq!(config.prefix_bytes, 4096);
        assert_eq!(input_paths(&args).unwrap(), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_invalid_overrides_are_rejected() {
        let args = matches(&["geotagkit", "a.jpg", "--format", "kml"]);
        assert!(matches!(resolve_config(&args), Err(GeoTagError::Config(_))));

        let args = matches(&["geotagkit", "a.jpg", "--max-ifd-depth", "0"]);
        assert!(matches!(resolve_config(&args), Err(GeoTagError::Config(_))));
    }

    #[test]
    fn test_input_is_required() {
        assert!(build_cli().try_get_matches_from(["geotagkit"]).is_err());
    }

    #[test]
    fn test_output_spellings() {
        for flag in ["-o", "--output", "--gpx"] {
            let args = matches(&["geotagkit", "a.jpg", flag, "out.gpx"]);
            assert_eq!(args.get_one::<String>("output").map(String::as_str), Some("out.gpx"));
        }
    }

    #[test]
    fn test_verbose_counts() {
        let args = matches(&["geotagkit", "-vv", "a.jpg"]);
        assert_eq!(args.get_count("verbose"), 2);
    }

    #[test]
    fn test_factory_builds_commands() {
        let factory = GeoTagCommandFactory::new();
        assert!(factory.create_command(&matches(&["geotagkit", "a.jpg"])).is_ok());
        assert!(factory.create_command(&matches(&["geotagkit", "a.jpg", "--output", "out.gpx"])).is_ok());
        assert!(factory.create_command(&matches(&["geotagkit", "a.jpg", "--config", "/nonexistent.toml"])).is_err());
    }
}
