use super::{FieldDescriptor, Layout};
use crate::constants::BAND_SIZE;

/// Sub-band record (`struct band`), embedded twice in the Timer header.
///
/// `bw` is negative for a lower-sideband (inverted) band.
pub const BAND_LAYOUT: Layout = Layout {
    name: "band",
    fields: &[
        FieldDescriptor::double("centrefreq"),
        FieldDescriptor::double("bw"),
        FieldDescriptor::float("flux_A"),
        FieldDescriptor::float("flux_B"),
        FieldDescriptor::int("npol"),
        FieldDescriptor::int("correlator_mode"),
        FieldDescriptor::float("f_a"),
        FieldDescriptor::float("f_b"),
        FieldDescriptor::float("e_a"),
        FieldDescriptor::float("e_b"),
        FieldDescriptor::int("nlag"),
        FieldDescriptor::int("nchan"),
        FieldDescriptor::int("inv_mode"),
        FieldDescriptor::float("auto_atten"),
        FieldDescriptor::float("pfb_atten"),
        FieldDescriptor::int("polar"),
        FieldDescriptor::float("feed_offset"),
        FieldDescriptor::double("lo1"),
        FieldDescriptor::double("lo2"),
        FieldDescriptor::float("flux_cal"),
    ],
};

const _: () = assert!(BAND_LAYOUT.width() == BAND_SIZE);
