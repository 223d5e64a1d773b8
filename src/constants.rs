//! # Constants for the Timer header format
//!
//! Sizes of the on-disk records, the coordinate type codes understood by
//! [`crate::summary::Position`], and the unit conversions used when turning
//! stored angles into conventional units.

// -------------------------------------------------------------------------------------------------
// Record sizes
// -------------------------------------------------------------------------------------------------

/// Size in bytes of the Timer header at the start of every archive
pub const TIMER_HEADER_SIZE: usize = 1024;

/// Size in bytes of one embedded sub-band record
pub const BAND_SIZE: usize = 96;

/// Byte widths of the fixed-size C scalar types
pub const INT_SIZE: usize = 4;
pub const UINT32_SIZE: usize = 4;
pub const FLOAT_SIZE: usize = 4;
pub const DOUBLE_SIZE: usize = 8;

// -------------------------------------------------------------------------------------------------
// Coordinate codes
// -------------------------------------------------------------------------------------------------

/// `coord_type` code for equatorial coordinates, `ra`/`dec` in radians
pub const COORD_EQUATORIAL: &str = "05";

/// `coord_type` code for galactic coordinates, `l`/`b` in degrees
pub const COORD_GALACTIC: &str = "04";

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Radians → degrees
pub const DEGRAD: f64 = 180.0 / std::f64::consts::PI;

/// Radians → hours
pub const HOURRAD: f64 = 24.0 / DPI;

/// Angle in radians
pub type Radian = f64;

/// Angle in degrees
pub type Degree = f64;

/// Angle in hours
pub type Hour = f64;
