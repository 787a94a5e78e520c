//! Instrumentation hooks for the parser
//!
//! Parsing stages report what they find as `TraceEvent`s to a
//! `ParseObserver` instead of logging inline. `NoopObserver` discards
//! everything; `LogObserver` forwards events to the `log` facade.
//! Any `Fn(&TraceEvent)` closure is an observer too.

use log::{debug, trace};

use crate::exif::tags;
use crate::io::byte_order::ByteOrder;

/// A point of interest reached while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// A JPEG marker was read at `offset`
    MarkerFound { offset: usize, marker: u16 },
    /// The EXIF APP1 segment was found; the TIFF block spans `start..end`
    ExifSegmentFound { start: usize, end: usize },
    /// The scan ended without an EXIF segment
    ScanStopped { offset: usize, reason: &'static str },
    /// TIFF byte order detected
    ByteOrderDetected(ByteOrder),
    /// An IFD was entered
    IfdVisited { offset: u32, entries: u16, depth: usize },
    /// The GPS sub-IFD pointer was found
    GpsIfdFound { offset: u32 },
    /// A GPS tag of interest was decoded
    GpsTagDecoded { tag: u16 },
    /// A GPS tag was skipped, either unknown or unusable
    GpsTagSkipped { tag: u16, field_type: u16, count: u32 },
}

/// Receiver of parser trace events
pub trait ParseObserver {
    /// Called for every event, in parse order
    fn on_event(&self, event: &TraceEvent);
}

impl<F> ParseObserver for F
where
    F: Fn(&TraceEvent),
{
    fn on_event(&self, event: &TraceEvent) {
        self(event)
    }
}

/// Observer that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {
    fn on_event(&self, _event: &TraceEvent) {}
}

/// Observer that writes events to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ParseObserver for LogObserver {
    fn on_event(&self, event: &TraceEvent) {
        match event {
            TraceEvent::MarkerFound { offset, marker } => {
                trace!("Marker {:#06x} at offset {}", marker, offset);
            }
            TraceEvent::ExifSegmentFound { start, end } => {
                debug!("EXIF segment found, TIFF block at {}..{}", start, end);
            }
            TraceEvent::ScanStopped { offset, reason } => {
                debug!("JPEG scan stopped at offset {}: {}", offset, reason);
            }
            TraceEvent::ByteOrderDetected(order) => {
                debug!("Detected byte order: {}", order.name());
            }
            TraceEvent::IfdVisited { offset, entries, depth } => {
                debug!("IFD #{} at offset {} with {} entries", depth, offset, entries);
            }
            TraceEvent::GpsIfdFound { offset } => {
                debug!("GPS IFD at offset {}", offset);
            }
            TraceEvent::GpsTagDecoded { tag } => {
                trace!("Decoded GPS tag {} ({})", tag, tags::gps_tag_name(*tag));
            }
            TraceEvent::GpsTagSkipped { tag, field_type, count } => {
                trace!("Skipped GPS tag {} ({}), type={}, count={}",
                       tag, tags::gps_tag_name(*tag), tags::field_type_name(*field_type), count);
            }
        }
    }
}
