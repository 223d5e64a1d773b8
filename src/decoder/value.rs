use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::layout::Layout;
use crate::render::{format_float, record_summary};
use crate::timer_errors::TimerError;

/// Typed value of one decoded field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(i32),
    UInt(u32),
    Float(f32),
    Double(f64),
    Record(DecodedRecord),
}

impl Value {
    /// Short name of the value type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint32_t",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Record(_) => "record",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Integer value of an `int` or `uint32_t` field.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(i64::from(*v)),
            Value::UInt(v) => Some(i64::from(*v)),
            _ => None,
        }
    }

    /// Floating-point value of a `float` or `double` field, widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(f64::from(*v)),
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&DecodedRecord> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{}", format_float(f64::from(*v))),
            Value::Double(v) => write!(f, "{}", format_float(*v)),
            Value::Record(r) => write!(f, "{}", record_summary(r)),
        }
    }
}

/// Result of decoding a byte buffer with a [`Layout`].
///
/// Entries keep the declaration order of the layout. A record is built once
/// by [`crate::decoder::decode`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRecord {
    layout: &'static Layout,
    entries: Vec<(&'static str, Value)>,
}

impl DecodedRecord {
    pub(crate) fn new(layout: &'static Layout, entries: Vec<(&'static str, Value)>) -> Self {
        DecodedRecord { layout, entries }
    }

    /// Layout the record was decoded with.
    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fetch a field that must exist.
    ///
    /// Return
    /// ----------
    /// * The value, or [`TimerError::MissingField`] when the record has no such field.
    pub fn require(&self, name: &str) -> Result<&Value, TimerError> {
        self.get(name)
            .ok_or_else(|| TimerError::MissingField(name.to_string()))
    }

    pub fn require_str(&self, name: &str) -> Result<&str, TimerError> {
        self.require(name)?
            .as_str()
            .ok_or_else(|| field_type(name, "string"))
    }

    pub fn require_i64(&self, name: &str) -> Result<i64, TimerError> {
        self.require(name)?
            .as_i64()
            .ok_or_else(|| field_type(name, "integer"))
    }

    pub fn require_f64(&self, name: &str) -> Result<f64, TimerError> {
        self.require(name)?
            .as_f64()
            .ok_or_else(|| field_type(name, "floating-point"))
    }

    pub fn require_record(&self, name: &str) -> Result<&DecodedRecord, TimerError> {
        self.require(name)?
            .as_record()
            .ok_or_else(|| field_type(name, "record"))
    }
}

fn field_type(name: &str, expected: &'static str) -> TimerError {
    TimerError::FieldType {
        field: name.to_string(),
        expected,
    }
}

impl Serialize for DecodedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod value_test {
    use super::*;
    use crate::layout::BAND_LAYOUT;

    fn small_band() -> DecodedRecord {
        DecodedRecord::new(
            &BAND_LAYOUT,
            vec![
                ("centrefreq", Value::Double(600.1953125)),
                ("bw", Value::Double(-400.0)),
                ("npol", Value::Int(2)),
            ],
        )
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Str("CHIME".into()).to_string(), "CHIME");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::UInt(1024).to_string(), "1024");
        assert_eq!(Value::Float(-1.0).to_string(), "-1.0");
        assert_eq!(Value::Double(600.1953125).to_string(), "600.1953125");
        assert_eq!(
            Value::Record(small_band()).to_string(),
            "-400.0 MHz band at 600.1953125 MHz"
        );
    }

    #[test]
    fn test_typed_lookup() {
        let band = small_band();
        assert_eq!(band.require_f64("bw"), Ok(-400.0));
        assert_eq!(band.require_i64("npol"), Ok(2));
        assert_eq!(
            band.require_f64("nchan"),
            Err(TimerError::MissingField("nchan".into()))
        );
        assert_eq!(
            band.require_str("npol"),
            Err(TimerError::FieldType {
                field: "npol".into(),
                expected: "string"
            })
        );
    }

    #[test]
    fn test_float_widening() {
        let value = Value::Float(3.562_045_3);
        assert_eq!(value.as_f64(), Some(f64::from(3.562_045_3_f32)));
        assert_eq!(Value::Str("x".into()).as_f64(), None);
    }

    #[test]
    fn test_serialize_keeps_order() {
        let json = serde_json::to_string(&small_band()).unwrap();
        assert_eq!(json, r#"{"centrefreq":600.1953125,"bw":-400.0,"npol":2}"#);
    }
}
