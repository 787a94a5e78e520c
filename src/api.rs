use std::fs::File;
use std::io::Read;
use std::path::Path;
use log::{debug, info};

use crate::config::ScanConfig;
use crate::coordinate::GeoCoordinate;
use crate::exif::errors::{ExifResult, GeoTagResult};
use crate::exif::reader::GpsReaderBuilder;
use crate::exif::trace::{LogObserver, NoopObserver, ParseObserver};

/// Main interface to the GeoTagKit library
pub struct GeoTagKit {
    config: ScanConfig,
    tracing: bool,
}

impl GeoTagKit {
    /// Create a new GeoTagKit instance
    ///
    /// # Arguments
    /// * `config` - Scan settings; validated here
    ///
    /// # Returns
    /// A GeoTagKit instance or a configuration error
    pub fn new(config: ScanConfig) -> GeoTagResult<Self> {
        config.validate()?;
        Ok(GeoTagKit { config, tracing: false })
    }

    /// Route parser trace events to the `log` facade
    pub fn with_tracing(mut self, tracing: bool) -> Self {
        self.tracing = tracing;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Locate the GPS position of a JPEG file
    ///
    /// Only the first `prefix_bytes` of the file are read.
    ///
    /// # Arguments
    /// * `input_path` - Path to the JPEG file
    ///
    /// # Returns
    /// The position, `None` when the file carries no GPS data, or an I/O or
    /// format error
    pub fn locate_file<P: AsRef<Path>>(&self, input_path: P) -> GeoTagResult<Option<GeoCoordinate>> {
        let path = input_path.as_ref();
        let data = self.read_prefix(path)?;
        debug!("Read {} bytes from {}", data.len(), path.display());

        let result = self.locate_bytes(&data)?;
        match &result {
            Some(coord) => info!("{}: {}", path.display(), coord),
            None => info!("{}: no GPS data", path.display()),
        }
        Ok(result)
    }

    /// Locate the GPS position in an in-memory JPEG prefix
    pub fn locate_bytes(&self, data: &[u8]) -> ExifResult<Option<GeoCoordinate>> {
        let observer: &dyn ParseObserver = if self.tracing { &LogObserver } else { &NoopObserver };
        GpsReaderBuilder::new()
            .max_ifd_depth(self.config.max_ifd_depth)
            .observer(observer)
            .build()
            .read(data)
    }

    /// Reads at most `prefix_bytes` from the start of a file
    fn read_prefix(&self, path: &Path) -> GeoTagResult<Vec<u8>> {
        let file = File::open(path)?;
        let mut data = Vec::new();
        file.take(self.config.prefix_bytes as u64).read_to_end(&mut data)?;
        Ok(data)
    }
}
