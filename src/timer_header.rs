//! # Timer archive header
//!
//! [`TimerHeader`] ties a source name to its decoded header record and the
//! derived [`TimerSummary`]. It can be built from bytes already in memory or
//! from a file, of which only the first [`TIMER_HEADER_SIZE`] bytes are read.
//!
//! Its `Display` is the identity line followed by the full field listing:
//!
//! ```text
//! B2035.ar: J2035+36 at MJD 59216.89949564594 for 374.0147602558136 s with CHIME:
//! program[char, 16 bytes] = psrchive
//! version[float, 4 bytes] = 12.0
//! ...
//! ```

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::constants::TIMER_HEADER_SIZE;
use crate::decoder::{decode_with, DecodedRecord, TracingObserver, Value};
use crate::layout::TIMER_HEADER_LAYOUT;
use crate::render::{describe, render};
use crate::summary::{summarize, Position, TimerSummary};
use crate::time::iso_utc;
use crate::timer_errors::TimerError;

/// Decoded header of one Timer archive.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerHeader {
    source: String,
    record: DecodedRecord,
    summary: TimerSummary,
}

impl TimerHeader {
    /// Decode a header from bytes already in memory.
    ///
    /// Arguments
    /// -----------------
    /// * `source`: name used in the identity line, typically the file name.
    /// * `bytes`: at least [`TIMER_HEADER_SIZE`] bytes from the start of the archive.
    ///
    /// Return
    /// ----------
    /// * The header, or the first decoding / summarizing error.
    pub fn from_bytes(source: impl Into<String>, bytes: &[u8]) -> Result<Self, TimerError> {
        let source = source.into();
        debug!("Reading Timer header of {source}");

        let (record, _) = decode_with(bytes, &TIMER_HEADER_LAYOUT, &mut TracingObserver)?;
        let summary = summarize(&record)?;

        debug!("Telescope = {}", summary.telescope);
        debug!("Pulsar = {}", summary.psrname);
        debug!("Start = {} = {}", summary.mjd, iso_utc(summary.start));
        debug!("Duration = {} s", summary.duration_s);
        if let Position::Unknown(code) = summary.position() {
            warn!("Do not know how to interpret coordinate type '{code}'");
        }

        Ok(TimerHeader {
            source,
            record,
            summary,
        })
    }

    /// Read and decode the header at the start of the file at `path`.
    ///
    /// A file shorter than [`TIMER_HEADER_SIZE`] fails with
    /// [`TimerError::TruncatedInput`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TimerError> {
        let path = path.as_ref();
        let bytes = read_header_bytes(path)?;
        TimerHeader::from_bytes(path.display().to_string(), &bytes)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn record(&self) -> &DecodedRecord {
        &self.record
    }

    pub fn summary(&self) -> &TimerSummary {
        &self.summary
    }

    /// Value of a top-level header field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.record.get(name)
    }

    /// `"<source>: <pulsar> at MJD <mjd> for <duration> s with <telescope>"`.
    pub fn describe(&self) -> String {
        describe(&self.summary, &self.source)
    }
}

/// Read at most the header bytes from the start of `path`; a short file is
/// reported by the decoder's length check.
fn read_header_bytes(path: &Path) -> Result<Vec<u8>, TimerError> {
    let file = File::open(path)?;
    let mut bytes = Vec::with_capacity(TIMER_HEADER_SIZE);
    file.take(TIMER_HEADER_SIZE as u64).read_to_end(&mut bytes)?;
    Ok(bytes)
}

impl fmt::Display for TimerHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.describe())?;
        write!(f, "{}", render(&self.record))
    }
}
