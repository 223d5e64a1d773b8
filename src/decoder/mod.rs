//! # Offset-driven record decoder
//!
//! [`decode`] walks a [`Layout`] over a byte buffer. A cursor starts at 0 and
//! advances by the declared width of every field; each span is turned into a
//! typed [`Value`]:
//!
//! * `char` fields: trailing NUL padding is stripped, the rest is read as UTF-8,
//! * `int`, `uint32_t`, `float`, `double`: little-endian, fixed width,
//! * embedded records: the span is decoded recursively with the sub-layout.
//!
//! The buffer length is checked against the layout width before any field is
//! read, so decoding never looks past the buffer and never returns a partial
//! record.
//!
//! # Example
//!
//! ```rust, no_run
//! use psrtimer::decoder::decode;
//! use psrtimer::layout::TIMER_HEADER_LAYOUT;
//!
//! let buf = std::fs::read("pulsar.ar")?;
//! let (record, consumed) = decode(&buf, &TIMER_HEADER_LAYOUT)?;
//! assert_eq!(consumed, 1024);
//! println!("{:?}", record.get("psrname"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use nom::{
    bytes::complete::take,
    number::complete::{le_f32, le_f64, le_i32, le_u32},
    IResult,
};

use crate::layout::{FieldDescriptor, FieldKind, Layout};
use crate::timer_errors::TimerError;

mod observer;
mod value;

pub use observer::{DecodeObserver, SilentObserver, TracingObserver};
pub use value::{DecodedRecord, Value};

/// Decode `input` with `layout`.
///
/// Arguments
/// -----------------
/// * `input`: Buffer holding at least `layout.width()` bytes. Extra trailing bytes are ignored.
/// * `layout`: Field layout to apply.
///
/// Return
/// ----------
/// * The decoded record and the number of bytes consumed (always `layout.width()`).
/// * [`TimerError::TruncatedInput`] if the buffer is too short,
///   [`TimerError::MalformedNumeric`] if a numeric span has the wrong size for its kind.
///
/// See also
/// ------------
/// * [`decode_with`] – Same, reporting each decoded field to an observer.
pub fn decode(
    input: &[u8],
    layout: &'static Layout,
) -> Result<(DecodedRecord, usize), TimerError> {
    decode_with(input, layout, &mut SilentObserver)
}

/// Decode `input` with `layout`, reporting progress to `observer`.
pub fn decode_with(
    input: &[u8],
    layout: &'static Layout,
    observer: &mut dyn DecodeObserver,
) -> Result<(DecodedRecord, usize), TimerError> {
    let expected = layout.width();
    if input.len() < expected {
        return Err(TimerError::TruncatedInput {
            expected,
            actual: input.len(),
        });
    }

    let (record, consumed) = decode_record(&input[..expected], 0, layout, observer)?;
    if consumed != expected {
        return Err(TimerError::LayoutMismatch {
            layout: layout.name,
            expected,
            consumed,
        });
    }
    Ok((record, consumed))
}

/// Walk `layout` over `input`; `base` is the absolute offset of `input[0]`.
fn decode_record(
    input: &[u8],
    base: usize,
    layout: &'static Layout,
    observer: &mut dyn DecodeObserver,
) -> Result<(DecodedRecord, usize), TimerError> {
    let mut rest = input;
    let mut cursor = 0;
    let mut entries = Vec::with_capacity(layout.len());

    for field in layout.fields {
        let offset = base + cursor;
        let (tail, span) = take_span(rest, field.width).map_err(|_| TimerError::TruncatedInput {
            expected: offset + field.width,
            actual: base + input.len(),
        })?;

        let value = decode_field(span, offset, field, observer)?;
        observer.field_decoded(layout, field, offset, &value);
        entries.push((field.name, value));

        cursor += field.width;
        rest = tail;
    }

    Ok((DecodedRecord::new(layout, entries), cursor))
}

fn take_span(input: &[u8], width: usize) -> IResult<&[u8], &[u8]> {
    take(width)(input)
}

fn decode_field(
    span: &[u8],
    offset: usize,
    field: &FieldDescriptor,
    observer: &mut dyn DecodeObserver,
) -> Result<Value, TimerError> {
    match field.kind {
        FieldKind::Char => Ok(Value::Str(decode_text(span, offset, field, observer))),
        FieldKind::Int => numeric(le_i32(span), field).map(Value::Int),
        FieldKind::UInt32 => numeric(le_u32(span), field).map(Value::UInt),
        FieldKind::Float => numeric(le_f32(span), field).map(Value::Float),
        FieldKind::Double => numeric(le_f64(span), field).map(Value::Double),
        FieldKind::Record(sub) => {
            let (record, _) = decode_record(span, offset, sub, observer)?;
            Ok(Value::Record(record))
        }
    }
}

/// A numeric span must be consumed exactly by its parser.
fn numeric<T>(parsed: IResult<&[u8], T>, field: &FieldDescriptor) -> Result<T, TimerError> {
    match parsed {
        Ok((rest, value)) if rest.is_empty() => Ok(value),
        _ => Err(TimerError::MalformedNumeric {
            field: field.name,
            kind: field.kind.c_type(),
        }),
    }
}

fn decode_text(
    span: &[u8],
    offset: usize,
    field: &FieldDescriptor,
    observer: &mut dyn DecodeObserver,
) -> String {
    let end = span.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    let text = &span[..end];
    match std::str::from_utf8(text) {
        Ok(s) => s.to_string(),
        Err(_) => {
            observer.lossy_text(field, offset);
            String::from_utf8_lossy(text).into_owned()
        }
    }
}
