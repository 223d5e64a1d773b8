//! # Field layouts of the Timer header
//!
//! A [`Layout`] is the ordered list of fields of one packed C record, as it is
//! declared in PSRCHIVE's `timer.h` and `band.h`. Byte offsets are implicit:
//! the offset of a field is the sum of the widths of the fields declared
//! before it, so the order of a layout must never change.
//!
//! Two layouts exist and both are compile-time constants:
//!
//! - [`BAND_LAYOUT`]: one 96-byte sub-band record, scalar fields only.
//! - [`TIMER_HEADER_LAYOUT`]: the 1024-byte archive header, which embeds
//!   [`BAND_LAYOUT`] twice (`banda` and `bandb`) through [`FieldKind::Record`].
//!
//! The decoded values live in [`crate::decoder::DecodedRecord`]; the two are
//! joined by field name only when rendering.
//!
//! ## See also
//!
//! - [`crate::decoder::decode`]: walks a layout over a byte buffer.
//! - [`crate::render::render`]: prints `name[kind, width bytes] = value`.

use std::fmt;

use crate::constants::{DOUBLE_SIZE, FLOAT_SIZE, INT_SIZE, UINT32_SIZE};

mod band;
mod timer;

pub use band::BAND_LAYOUT;
pub use timer::TIMER_HEADER_LAYOUT;

/// Storage kind of a field.
///
/// Variants
/// -----------------
/// * `Char`: fixed-width character array, NUL padded. The width is declared
///   per field.
/// * `Int`: little-endian `int` (4 bytes).
/// * `UInt32`: little-endian `uint32_t` (4 bytes).
/// * `Float`: little-endian IEEE-754 `float` (4 bytes).
/// * `Double`: little-endian IEEE-754 `double` (8 bytes).
/// * `Record`: an embedded struct decoded with its own layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Char,
    Int,
    UInt32,
    Float,
    Double,
    Record(&'static Layout),
}

impl FieldKind {
    /// C type name used in the header listing (`char`, `int`, `uint32_t`,
    /// `float`, `double`, or the struct name of an embedded record).
    pub const fn c_type(&self) -> &'static str {
        match self {
            FieldKind::Char => "char",
            FieldKind::Int => "int",
            FieldKind::UInt32 => "uint32_t",
            FieldKind::Float => "float",
            FieldKind::Double => "double",
            FieldKind::Record(layout) => layout.name,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.c_type())
    }
}

/// One field of a packed record: its name, storage kind and width in bytes.
///
/// The `const` constructors below pin the width of every numeric kind and
/// derive the width of an embedded record from its layout; the built-in
/// layouts use them exclusively. Fields are public, so a descriptor built by
/// hand can declare any width, and the decoder rejects a numeric width that
/// does not match its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub width: usize,
}

impl FieldDescriptor {
    pub const fn char(name: &'static str, width: usize) -> Self {
        FieldDescriptor {
            name,
            kind: FieldKind::Char,
            width,
        }
    }

    pub const fn int(name: &'static str) -> Self {
        FieldDescriptor {
            name,
            kind: FieldKind::Int,
            width: INT_SIZE,
        }
    }

    pub const fn uint32(name: &'static str) -> Self {
        FieldDescriptor {
            name,
            kind: FieldKind::UInt32,
            width: UINT32_SIZE,
        }
    }

    pub const fn float(name: &'static str) -> Self {
        FieldDescriptor {
            name,
            kind: FieldKind::Float,
            width: FLOAT_SIZE,
        }
    }

    pub const fn double(name: &'static str) -> Self {
        FieldDescriptor {
            name,
            kind: FieldKind::Double,
            width: DOUBLE_SIZE,
        }
    }

    /// Embedded record; its width is the total width of `layout`.
    pub const fn record(name: &'static str, layout: &'static Layout) -> Self {
        FieldDescriptor {
            name,
            kind: FieldKind::Record(layout),
            width: layout.width(),
        }
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}, {} bytes]", self.name, self.kind, self.width)
    }
}

/// Ordered field list of one packed C record.
#[derive(Debug, PartialEq)]
pub struct Layout {
    /// C struct name, also used as the kind of fields embedding this layout.
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl Layout {
    /// Total width in bytes, i.e. the sum of the field widths.
    pub const fn width(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].width;
            i += 1;
        }
        total
    }

    /// Number of top-level fields.
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of scalar fields once every embedded record is expanded in place.
    pub fn flattened_len(&self) -> usize {
        self.fields
            .iter()
            .map(|field| match field.kind {
                FieldKind::Record(sub) => sub.flattened_len(),
                _ => 1,
            })
            .sum()
    }

    /// Look up a top-level field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Byte offset of a top-level field from the start of the record.
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        let mut offset = 0;
        for field in self.fields {
            if field.name == name {
                return Some(offset);
            }
            offset += field.width;
        }
        None
    }
}
