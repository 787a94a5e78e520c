//! GPS location listing command
//!
//! Prints one line per input file with its position, `no location`, or the
//! reason it could not be parsed.

use clap::ArgMatches;
use log::warn;

use crate::api::GeoTagKit;
use crate::commands::command_traits::Command;
use crate::commands::input_paths;
use crate::config::{OutputFormat, ScanConfig};
use crate::coordinate::GeoCoordinate;
use crate::exif::errors::{GeoTagError, GeoTagResult};

/// Header row of the CSV output
pub const CSV_HEADER: &str = "file,latitude,longitude,altitude,status";

/// Command for listing the GPS positions of JPEG files
pub struct LocateCommand {
    /// Paths to the input files
    inputs: Vec<String>,
    /// Configured reader facade
    kit: GeoTagKit,
}

impl LocateCommand {
    /// Create a new locate command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Resolved scan configuration
    ///
    /// # Returns
    /// A new LocateCommand instance or an error
    pub fn new(args: &ArgMatches, config: ScanConfig) -> GeoTagResult<Self> {
        let inputs = input_paths(args)?;
        let kit = GeoTagKit::new(config)?.with_tracing(args.get_count("verbose") > 0);
        Ok(LocateCommand { inputs, kit })
    }

    /// Formats the result for one file in the configured format
    fn format_result(&self, path: &str, result: &GeoTagResult<Option<GeoCoordinate>>) -> String {
        let precision = self.kit.config().precision;
        match self.kit.config().format {
            OutputFormat::Csv => render_csv_row(path, result, precision),
            _ => render_text_line(path, result, precision),
        }
    }
}

impl Command for LocateCommand {
    fn execute(&self) -> GeoTagResult<()> {
        if self.kit.config().format == OutputFormat::Csv {
            println!("{}", CSV_HEADER);
        }

        let mut unreadable = 0;
        for path in &self.inputs {
            let result = self.kit.locate_file(path);
            match &result {
                Err(GeoTagError::IoError(e)) => {
                    warn!("Could not read {}: {}", path, e);
                    unreadable += 1;
                }
                Err(e) => warn!("Skipping GPS data of {}: {}", path, e),
                Ok(Some(coord)) if !coord.is_within_bounds() => {
                    warn!("{}: coordinate out of range: {}", path, coord);
                }
                Ok(_) => {}
            }
            println!("{}", self.format_result(path, &result));
        }

        if unreadable > 0 {
            return Err(GeoTagError::GenericError(format!(
                "{} of {} files could not be read",
                unreadable,
                self.inputs.len()
            )));
        }
        Ok(())
    }
}

/// Renders `path: lat, lon (alt m)` style output
pub fn render_text_line(path: &str, result: &GeoTagResult<Option<GeoCoordinate>>, precision: usize) -> String {
    match result {
        Ok(Some(coord)) => {
            let mut line = format!("{}: {}", path, coord.format_lat_lon(precision));
            if let Some(altitude) = coord.altitude {
                line.push_str(&format!(" ({:.1} m)", altitude));
            }
            line
        }
        Ok(None) => format!("{}: no location", path),
        Err(e) => format!("{}: {}", path, e),
    }
}

/// Renders one CSV row matching `CSV_HEADER`
pub fn render_csv_row(path: &str, result: &GeoTagResult<Option<GeoCoordinate>>, precision: usize) -> String {
    match result {
        Ok(Some(coord)) => format!(
            "{},{:.*},{:.*},{},ok",
            csv_field(path),
            precision, coord.latitude,
            precision, coord.longitude,
            coord.altitude.map(|a| format!("{:.1}", a)).unwrap_or_default()
        ),
        Ok(None) => format!("{},,,,no location", csv_field(path)),
        Err(e) => format!("{},,,,{}", csv_field(path), csv_field(&e.to_string())),
    }
}

/// Quotes a CSV field when it contains a separator, quote or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::build_cli;
    use crate::exif::errors::FormatError;
    use crate::exif::tests::test_utils::{london_jpeg, temp_file};

    fn locate(inputs: &[&str], format: &str) -> GeoTagResult<()> {
        let mut argv = vec!["geotagkit", "--format", format];
        argv.extend_from_slice(inputs);
        let args = build_cli().try_get_matches_from(argv).unwrap();
        let config = crate::commands::resolve_config(&args).unwrap();
        LocateCommand::new(&args, config).unwrap().execute()
    }

    #[test]
    fn test_format_errors_do_not_fail_the_run() {
        let photo = temp_file("locate_photo.jpg", &london_jpeg());
        let notes = temp_file("locate_notes.txt", b"not a photo");
        let inputs = [photo.to_str().unwrap(), notes.to_str().unwrap()];

        assert!(locate(&inputs, "text").is_ok());
        assert!(locate(&inputs, "csv").is_ok());

        std::fs::remove_file(&photo).unwrap();
        std::fs::remove_file(&notes).unwrap();
    }

    #[test]
    fn test_unreadable_file_fails_after_listing() {
        let photo = temp_file("locate_photo_missing.jpg", &london_jpeg());
        let notes = temp_file("locate_notes_missing.txt", b"not a photo");
        let inputs = [photo.to_str().unwrap(), notes.to_str().unwrap(), "/nonexistent/geotagkit/x.jpg"];

        match locate(&inputs, "text") {
            Err(GeoTagError::GenericError(msg)) => assert_eq!(msg, "1 of 3 files could not be read"),
            other => panic!("unexpected result: {:?}", other),
        }

        std::fs::remove_file(&photo).unwrap();
        std::fs::remove_file(&notes).unwrap();
    }

    #[test]
    fn test_text_lines() {
        let found: GeoTagResult<_> = Ok(Some(GeoCoordinate::new(51.507222, -0.1275)));
        assert_eq!(render_text_line("a.jpg", &found, 6), "a.jpg: 51.507222, -0.127500");
        assert_eq!(render_text_line("a.jpg", &found, 2), "a.jpg: 51.51, -0.13");

        let high: GeoTagResult<_> = Ok(Some(GeoCoordinate::with_altitude(1.0, 2.0, 1500.0)));
        assert_eq!(render_text_line("b.jpg", &high, 1), "b.jpg: 1.0, 2.0 (1500.0 m)");

        assert_eq!(render_text_line("c.jpg", &Ok(None), 6), "c.jpg: no location");

        let failed: GeoTagResult<Option<GeoCoordinate>> = Err(FormatError::NotAJpeg.into());
        assert_eq!(render_text_line("d.png", &failed, 6),
                   "d.png: Format error: Not a JPEG file (missing SOI marker)");
    }

    #[test]
    fn test_csv_rows() {
        let found: GeoTagResult<_> = Ok(Some(GeoCoordinate::with_altitude(-10.5, 20.25, -3.0)));
        assert_eq!(render_csv_row("x.jpg", &found, 3), "x.jpg,-10.500,20.250,-3.0,ok");
        assert_eq!(render_csv_row("my, photo.jpg", &Ok(None), 6), "\"my, photo.jpg\",,,,no location");

        let failed: GeoTagResult<Option<GeoCoordinate>> =
            Err(FormatError::MalformedIfdChain { offset: 8, depth: 1 }.into());
        assert_eq!(render_csv_row("y.jpg", &failed, 6),
                   "y.jpg,,,,Format error: Malformed IFD chain at offset 8 after 1 directories");
    }

    #[test]
    fn test_csv_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
