use tracing::{trace, warn};

use super::Value;
use crate::layout::{FieldDescriptor, Layout};

/// Receives diagnostics while a record is decoded.
///
/// Decoding itself keeps no state and logs nothing: callers that want to see
/// what happens pass an observer to [`super::decode_with`]. Every method has
/// an empty default so implementors only override what they need.
pub trait DecodeObserver {
    /// Called once per field, after its value is decoded. `offset` is the
    /// absolute byte offset of the field in the buffer given to the decoder.
    fn field_decoded(
        &mut self,
        _layout: &Layout,
        _field: &FieldDescriptor,
        _offset: usize,
        _value: &Value,
    ) {
    }

    /// Called when a `char` field is not valid UTF-8 and invalid sequences
    /// were replaced.
    fn lossy_text(&mut self, _field: &FieldDescriptor, _offset: usize) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl DecodeObserver for SilentObserver {}

/// Observer forwarding events to `tracing`: fields at `trace`, lossy text at `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl DecodeObserver for TracingObserver {
    fn field_decoded(
        &mut self,
        layout: &Layout,
        field: &FieldDescriptor,
        offset: usize,
        value: &Value,
    ) {
        trace!(layout = layout.name, offset, "{field} = {value}");
    }

    fn lossy_text(&mut self, field: &FieldDescriptor, offset: usize) {
        warn!(offset, "Unable to decode contents of '{}' as UTF-8", field.name);
    }
}
