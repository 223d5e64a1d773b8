//! # Header listing and identity line
//!
//! Text renderings of a decoded Timer header:
//!
//! - [`render`]: one line per field, `name[kind, width bytes] = value`, in
//!   declaration order. An embedded band prints a one-line summary
//!   (`-400.0 MHz band at 600.1953125 MHz:`) and its own fields follow
//!   directly in the same stream.
//! - [`describe`]: `"<source>: <pulsar> at MJD <mjd> for <duration> s with <telescope>"`.
//!
//! Field kinds and widths come from the record's [`crate::layout::Layout`],
//! looked up by field name; values come from the [`DecodedRecord`].
//!
//! ## Number format
//!
//! Floating-point values are printed with the shortest text that reads back
//! to the same `f64`, keeping a trailing `.0` on integral values. `float`
//! fields are widened to `f64` first, so a stored `3.5620453f` prints as
//! `3.5620453357696533`.

use itertools::Itertools;

use crate::decoder::{DecodedRecord, Value};
use crate::summary::TimerSummary;

/// Shortest round-trip text of `value`, with `.0` on integral values.
///
/// Exponent form (below `1e-4` and from `1e16` up) always carries a sign and
/// at least two digits, e.g. `2.56e-06` or `1e+16`; NaN prints as `nan`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// One-line description of an embedded record.
///
/// Band records read `"<bw> MHz band at <centrefreq> MHz"`; any other record
/// falls back to its layout name and field count.
pub fn record_summary(record: &DecodedRecord) -> String {
    let bw = record.get("bw").and_then(Value::as_f64);
    let centrefreq = record.get("centrefreq").and_then(Value::as_f64);
    match (bw, centrefreq) {
        (Some(bw), Some(centrefreq)) => format!(
            "{} MHz band at {} MHz",
            format_float(bw),
            format_float(centrefreq)
        ),
        _ => format!("{} record with {} fields", record.layout().name, record.len()),
    }
}

/// Listing lines of `record`, nested records expanded after their summary line.
pub fn render_lines(record: &DecodedRecord) -> Vec<String> {
    let mut lines = Vec::with_capacity(record.layout().flattened_len() + record.len());
    push_lines(record, &mut lines);
    lines
}

fn push_lines(record: &DecodedRecord, lines: &mut Vec<String>) {
    let layout = record.layout();
    for (name, value) in record.iter() {
        let label = match layout.field(name) {
            Some(field) => field.to_string(),
            None => format!("{name}[?, ? bytes]"),
        };
        match value {
            Value::Record(nested) => {
                lines.push(format!("{label} = {}:", record_summary(nested)));
                push_lines(nested, lines);
            }
            _ => lines.push(format!("{label} = {value}")),
        }
    }
}

/// Full listing of `record`, one field per line.
///
/// Return
/// ----------
/// * Lines joined with `\n`, no trailing newline.
pub fn render(record: &DecodedRecord) -> String {
    render_lines(record).iter().join("\n")
}

/// Identity line for a header read from `source`.
///
/// Example: `"B2035.ar: J2035+36 at MJD 59216.89949564594 for 374.0147602558136 s with CHIME"`.
pub fn describe(summary: &TimerSummary, source: &str) -> String {
    format!(
        "{source}: {} at MJD {} for {} s with {}",
        summary.psrname,
        format_float(summary.mjd),
        format_float(summary.duration_s),
        summary.telescope
    )
}

#[cfg(test)]
mod render_test {
    use super::*;
    use crate::decoder::decode;
    use crate::layout::{FieldDescriptor, Layout, BAND_LAYOUT};

    const OUTER: Layout = Layout {
        name: "outer",
        fields: &[
            FieldDescriptor::char("telid", 8),
            FieldDescriptor::record("banda", &BAND_LAYOUT),
            FieldDescriptor::uint32("headerlength"),
        ],
    };

    const SAMPLING: Layout = Layout {
        name: "sampling",
        fields: &[
            FieldDescriptor::double("tsmp"),
            FieldDescriptor::double("dm"),
            FieldDescriptor::float("dumptime"),
        ],
    };

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(-400.0), "-400.0");
        assert_eq!(format_float(600.1953125), "600.1953125");
        assert_eq!(format_float(f64::from(3.5620453_f32)), "3.5620453357696533");
        assert_eq!(format_float(0.0), "0.0");
    }

    #[test]
    fn test_format_float_exponent() {
        assert_eq!(format_float(2.56e-6), "2.56e-06");
        assert_eq!(format_float(-2.56e-6), "-2.56e-06");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e-300), "1.5e-300");
        assert_eq!(format_float(1e-4), "0.0001");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(Value::Float(f32::NAN).to_string(), "nan");
    }

    #[test]
    fn test_render_exponent_values() {
        let mut buf = vec![0u8; SAMPLING.width()];
        buf[..8].copy_from_slice(&2.56e-6f64.to_le_bytes());
        buf[8..16].copy_from_slice(&1e16f64.to_le_bytes());
        buf[16..20].copy_from_slice(&f32::NAN.to_le_bytes());

        let (record, _) = decode(&buf, &SAMPLING).unwrap();
        assert_eq!(
            render_lines(&record),
            vec![
                "tsmp[double, 8 bytes] = 2.56e-06",
                "dm[double, 8 bytes] = 1e+16",
                "dumptime[float, 4 bytes] = nan",
            ]
        );
    }

    #[test]
    fn test_render_nested() {
        let mut buf = vec![0u8; OUTER.width()];
        buf[..5].copy_from_slice(b"CHIME");
        buf[8..16].copy_from_slice(&600.1953125f64.to_le_bytes());
        buf[16..24].copy_from_slice(&(-400.0f64).to_le_bytes());
        buf[24..28].copy_from_slice(&1.5f32.to_le_bytes());
        buf[104..108].copy_from_slice(&1024u32.to_le_bytes());

        let (record, _) = decode(&buf, &OUTER).unwrap();
        let lines = render_lines(&record);

        assert_eq!(lines.len(), 2 + 1 + BAND_LAYOUT.len());
        assert_eq!(lines[0], "telid[char, 8 bytes] = CHIME");
        assert_eq!(
            lines[1],
            "banda[band, 96 bytes] = -400.0 MHz band at 600.1953125 MHz:"
        );
        assert_eq!(lines[2], "centrefreq[double, 8 bytes] = 600.1953125");
        assert_eq!(lines[3], "bw[double, 8 bytes] = -400.0");
        assert_eq!(lines[4], "flux_A[float, 4 bytes] = 1.5");
        assert_eq!(lines[6], "npol[int, 4 bytes] = 0");
        assert_eq!(
            lines.last().unwrap(),
            "headerlength[uint32_t, 4 bytes] = 1024"
        );

        let text = render(&record);
        assert_eq!(text.lines().count(), lines.len());
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_summary_of_non_band_record() {
        let buf = vec![0u8; OUTER.width()];
        let (record, _) = decode(&buf, &OUTER).unwrap();
        assert_eq!(record_summary(&record), "outer record with 3 fields");
    }
}
