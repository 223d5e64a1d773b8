//! # Derived values of a Timer header
//!
//! [`summarize`] reads a handful of fields from a decoded header by name and
//! builds a [`TimerSummary`]: who was observed, where, when and for how long.
//! None of these values is stored as such in the file:
//!
//! - **start**: `mjd` (integer day) plus `fracmjd` (fraction of day), on the
//!   UTC scale with the MJD epoch 1858-11-17 00:00 UTC,
//! - **duration**: `sub_int_time × nsub_int` seconds,
//! - **position**: chosen from `coord_type`: `"05"` means `ra`/`dec` in
//!   radians, `"04"` means galactic `l`/`b` in degrees.
//!
//! A field missing from the record is a layout bug and fails with
//! [`TimerError::MissingField`]; nothing is defaulted.

use std::fmt;

use hifitime::{Epoch, Unit};

use crate::constants::{Degree, Hour, Radian, COORD_EQUATORIAL, COORD_GALACTIC};
use crate::conversion::{dec_to_dms, ra_to_hms, rad_to_deg, rad_to_hours};
use crate::decoder::DecodedRecord;
use crate::time::epoch_from_split_mjd;
use crate::timer_errors::TimerError;

/// Sky position of the observed source, as selected by `coord_type`.
#[derive(Debug, Clone, PartialEq)]
pub enum Position {
    /// Right ascension and declination, radians.
    Equatorial { ra: Radian, dec: Radian },
    /// Galactic longitude and latitude, degrees.
    Galactic { l: Degree, b: Degree },
    /// A `coord_type` code with no known interpretation.
    Unknown(String),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Equatorial { ra, dec } => {
                write!(f, "RA {} Dec {}", ra_to_hms(*ra, 3), dec_to_dms(*dec, 2))
            }
            Position::Galactic { l, b } => write!(f, "l {l:.6}° b {b:.6}°"),
            Position::Unknown(code) => write!(f, "unknown coordinate type '{code}'"),
        }
    }
}

/// Values derived from a decoded Timer header.
///
/// `ra` and `dec` keep the stored radians; use [`TimerSummary::ra_hours`]
/// and [`TimerSummary::dec_degrees`] for conventional units.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerSummary {
    pub psrname: String,
    pub telescope: String,
    /// `mjd + fracmjd`, in days.
    pub mjd: f64,
    /// Start of the observation, UTC.
    pub start: Epoch,
    /// Observation length in seconds.
    pub duration_s: f64,
    pub nsub_int: i64,
    pub ndump_sub_int: i64,
    pub coord_type: String,
    pub ra: Radian,
    pub dec: Radian,
    pub galactic_l: Degree,
    pub galactic_b: Degree,
}

impl TimerSummary {
    /// End of the observation, `start + duration`.
    pub fn stop(&self) -> Epoch {
        self.start + Unit::Second * self.duration_s
    }

    pub fn ra_hours(&self) -> Hour {
        rad_to_hours(self.ra)
    }

    pub fn dec_degrees(&self) -> Degree {
        rad_to_deg(self.dec)
    }

    /// Position in the representation named by `coord_type`.
    pub fn position(&self) -> Position {
        match self.coord_type.as_str() {
            COORD_EQUATORIAL => Position::Equatorial {
                ra: self.ra,
                dec: self.dec,
            },
            COORD_GALACTIC => Position::Galactic {
                l: self.galactic_l,
                b: self.galactic_b,
            },
            other => Position::Unknown(other.to_string()),
        }
    }
}

/// Build the [`TimerSummary`] of a decoded Timer header.
///
/// Arguments
/// -----------------
/// * `record`: A record decoded with [`crate::layout::TIMER_HEADER_LAYOUT`].
///
/// Return
/// ----------
/// * The summary, or [`TimerError::MissingField`] / [`TimerError::FieldType`]
///   when a required field is absent or has an unexpected type.
pub fn summarize(record: &DecodedRecord) -> Result<TimerSummary, TimerError> {
    let mjd = record.require_i64("mjd")?;
    let fracmjd = record.require_f64("fracmjd")?;
    let sub_int_time = record.require_f64("sub_int_time")?;
    let nsub_int = record.require_i64("nsub_int")?;

    Ok(TimerSummary {
        psrname: record.require_str("psrname")?.to_string(),
        telescope: record.require_str("telid")?.to_string(),
        mjd: mjd as f64 + fracmjd,
        start: epoch_from_split_mjd(mjd, fracmjd),
        duration_s: sub_int_time * nsub_int as f64,
        nsub_int,
        ndump_sub_int: record.require_i64("ndump_sub_int")?,
        coord_type: record.require_str("coord_type")?.to_string(),
        ra: record.require_f64("ra")?,
        dec: record.require_f64("dec")?,
        galactic_l: record.require_f64("l")?,
        galactic_b: record.require_f64("b")?,
    })
}

#[cfg(test)]
mod summary_test {
    use super::*;
    use crate::decoder::decode;
    use crate::layout::{FieldDescriptor, Layout};
    use approx::assert_relative_eq;

    const NO_TELID: Layout = Layout {
        name: "partial",
        fields: &[
            FieldDescriptor::char("psrname", 16),
            FieldDescriptor::int("mjd"),
            FieldDescriptor::double("fracmjd"),
            FieldDescriptor::float("sub_int_time"),
            FieldDescriptor::int("nsub_int"),
        ],
    };

    fn summary_at(coord_type: &str) -> TimerSummary {
        TimerSummary {
            psrname: "J2035+36".into(),
            telescope: "CHIME".into(),
            mjd: 59216.5,
            start: epoch_from_split_mjd(59216, 0.5),
            duration_s: 60.0,
            nsub_int: 6,
            ndump_sub_int: 1,
            coord_type: coord_type.into(),
            ra: std::f64::consts::PI,
            dec: -std::f64::consts::FRAC_PI_4,
            galactic_l: 75.25,
            galactic_b: -1.5,
        }
    }

    #[test]
    fn test_missing_field() {
        let buf = vec![0u8; NO_TELID.width()];
        let (record, _) = decode(&buf, &NO_TELID).unwrap();
        assert_eq!(
            summarize(&record),
            Err(TimerError::MissingField("telid".into()))
        );
    }

    #[test]
    fn test_position_dispatch() {
        assert_eq!(
            summary_at("05").position(),
            Position::Equatorial {
                ra: std::f64::consts::PI,
                dec: -std::f64::consts::FRAC_PI_4
            }
        );
        assert_eq!(
            summary_at("04").position(),
            Position::Galactic { l: 75.25, b: -1.5 }
        );
        assert_eq!(
            summary_at("").position(),
            Position::Unknown(String::new())
        );
    }

    #[test]
    fn test_position_display() {
        assert_eq!(
            summary_at("05").position().to_string(),
            "RA 12h00m00.000s Dec -45d00m00.00s"
        );
        assert_eq!(
            summary_at("04").position().to_string(),
            "l 75.250000° b -1.500000°"
        );
        assert_eq!(
            summary_at("07").position().to_string(),
            "unknown coordinate type '07'"
        );
    }

    #[test]
    fn test_conventional_units() {
        let summary = summary_at("05");
        assert_relative_eq!(summary.ra_hours(), 12.0);
        assert_relative_eq!(summary.dec_degrees(), -45.0);
    }

    #[test]
    fn test_stop() {
        let summary = summary_at("05");
        assert_relative_eq!((summary.stop() - summary.start).to_seconds(), 60.0);
    }
}
