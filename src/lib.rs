//! # psrtimer
//!
//! Decoder for the fixed 1024-byte header at the start of PSRCHIVE "Timer"
//! archives.
//!
//! - [`layout`]: static field layouts of the header and its sub-band records,
//! - [`decoder`]: offset-driven decoding of a byte buffer into typed values,
//! - [`summary`]: derived values (start instant, duration, position),
//! - [`render`]: the `name[kind, width bytes] = value` listing and identity line,
//! - [`timer_header`]: [`TimerHeader`], reading all of the above from a file.
//!
//! ```rust, no_run
//! use psrtimer::TimerHeader;
//!
//! let header = TimerHeader::from_file("B2035.ar")?;
//! println!("{}", header.describe());
//! println!("{header}");
//! # Ok::<(), psrtimer::timer_errors::TimerError>(())
//! ```

pub mod constants;
pub mod conversion;
pub mod decoder;
pub mod layout;
pub mod logging;
pub mod render;
pub mod summary;
pub mod time;
pub mod timer_errors;
pub mod timer_header;

pub use decoder::{decode, DecodedRecord, Value};
pub use summary::{summarize, Position, TimerSummary};
pub use timer_header::TimerHeader;
