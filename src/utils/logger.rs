//! Logger utility for application-wide logging
//!
//! This module provides a file logger implementation that works alongside
//! the standard log crate. Records go to the log file and are echoed to
//! stderr, keeping stdout free for results.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// File-backed logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level written
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    /// * `level` - Most verbose level to record
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str, level: LevelFilter) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level,
        })
    }

    /// Writes a line to the log file
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                writeln!(file, "{}", message)?;
                file.flush()?;
            }
        }
        Ok(())
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::new(log_file, level)?;

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.write_line(&message);

            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in write_line
    }
}
