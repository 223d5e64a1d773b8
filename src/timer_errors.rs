use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimerError {
    #[error("Truncated input: layout needs {expected} bytes but only {actual} were supplied")]
    TruncatedInput { expected: usize, actual: usize },

    #[error("Field '{field}' cannot be read as {kind}")]
    MalformedNumeric { field: &'static str, kind: &'static str },

    #[error("Layout '{layout}' declares {expected} bytes but decoding consumed {consumed}")]
    LayoutMismatch {
        layout: &'static str,
        expected: usize,
        consumed: usize,
    },

    #[error("Field not found in decoded record: {0}")]
    MissingField(String),

    #[error("Field '{field}' does not hold a {expected} value")]
    FieldType {
        field: String,
        expected: &'static str,
    },

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for TimerError {
    fn eq(&self, other: &Self) -> bool {
        use TimerError::*;
        match (self, other) {
            (
                TruncatedInput {
                    expected: a,
                    actual: b,
                },
                TruncatedInput {
                    expected: c,
                    actual: d,
                },
            ) => a == c && b == d,
            (
                MalformedNumeric { field: a, kind: b },
                MalformedNumeric { field: c, kind: d },
            ) => a == c && b == d,
            (
                LayoutMismatch {
                    layout: a,
                    expected: b,
                    consumed: c,
                },
                LayoutMismatch {
                    layout: d,
                    expected: e,
                    consumed: f,
                },
            ) => a == d && b == e && c == f,
            (MissingField(a), MissingField(b)) => a == b,
            (
                FieldType {
                    field: a,
                    expected: b,
                },
                FieldType {
                    field: c,
                    expected: d,
                },
            ) => a == c && b == d,

            // io::Error is not comparable: equal when both are I/O failures
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}
