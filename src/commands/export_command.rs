//! GPX export command
//!
//! Locates every input file and writes the positions found as GPX
//! waypoints, either to a file or to stdout.

use std::fs::File;
use std::io::{self, BufWriter};
use clap::ArgMatches;
use log::{info, warn};

use crate::api::GeoTagKit;
use crate::commands::command_traits::Command;
use crate::commands::input_paths;
use crate::config::ScanConfig;
use crate::exif::errors::{GeoTagError, GeoTagResult};
use crate::utils::gpx_utils::{self, Waypoint};
use crate::utils::progress::ProgressTracker;

/// Command for exporting GPS positions as GPX
pub struct ExportCommand {
    /// Paths to the input files
    inputs: Vec<String>,
    /// Output GPX file; stdout when absent
    output: Option<String>,
    /// Configured reader facade
    kit: GeoTagKit,
}

impl ExportCommand {
    /// Create a new export command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Resolved scan configuration
    ///
    /// # Returns
    /// A new ExportCommand instance or an error
    pub fn new(args: &ArgMatches, config: ScanConfig) -> GeoTagResult<Self> {
        let inputs = input_paths(args)?;
        let output = args.get_one::<String>("output").cloned();
        let kit = GeoTagKit::new(config)?.with_tracing(args.get_count("verbose") > 0);
        Ok(ExportCommand { inputs, output, kit })
    }

    /// Locates all inputs, skipping files without a position
    ///
    /// # Returns
    /// The waypoints found and the number of files that could not be read
    fn collect_waypoints(&self) -> (Vec<Waypoint>, usize) {
        let progress = if self.output.is_some() && self.inputs.len() > 1 {
            ProgressTracker::new(self.inputs.len() as u64, "Locating photos")
        } else {
            ProgressTracker::hidden()
        };

        let mut waypoints = Vec::new();
        let mut unreadable = 0;

        for path in &self.inputs {
            progress.set_message(path);
            match self.kit.locate_file(path) {
                Ok(Some(coordinate)) => waypoints.push(Waypoint { name: path.clone(), coordinate }),
                Ok(None) => info!("{}: no location, not exported", path),
                Err(GeoTagError::IoError(e)) => {
                    warn!("Could not read {}: {}", path, e);
                    unreadable += 1;
                }
                Err(e) => warn!("Skipping GPS data of {}: {}", path, e),
            }
            progress.increment(1);
        }
        progress.finish();

        (waypoints, unreadable)
    }
}

impl Command for ExportCommand {
    fn execute(&self) -> GeoTagResult<()> {
        let (waypoints, unreadable) = self.collect_waypoints();
        let precision = self.kit.config().precision;

        match &self.output {
            Some(path) => {
                let file = File::create(path)?;
                gpx_utils::write_gpx(BufWriter::new(file), &waypoints, precision)?;
                info!("Wrote {} waypoints to {}", waypoints.len(), path);
            }
            None => {
                let stdout = io::stdout();
                gpx_utils::write_gpx(stdout.lock(), &waypoints, precision)?;
                println!();
            }
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
