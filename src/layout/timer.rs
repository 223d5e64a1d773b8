use super::{FieldDescriptor, Layout, BAND_LAYOUT};
use crate::constants::TIMER_HEADER_SIZE;

/// Archive header (`struct timer`), the first 1024 bytes of a Timer file.
///
/// `space` pads the record to its on-disk size.
pub const TIMER_HEADER_LAYOUT: Layout = Layout {
    name: "timer",
    fields: &[
        FieldDescriptor::char("program", 16),
        FieldDescriptor::float("version"),
        FieldDescriptor::float("minorversion"),
        FieldDescriptor::char("tape_label", 16),
        FieldDescriptor::int("file_number"),
        FieldDescriptor::int("tape_file_number"),
        FieldDescriptor::char("psrname", 16),
        FieldDescriptor::int("obstype"),
        FieldDescriptor::char("machine_id", 16),
        FieldDescriptor::char("telid", 16),
        FieldDescriptor::char("schedule", 16),
        FieldDescriptor::char("utdate", 16),
        // start of observation: integer day + fraction of day
        FieldDescriptor::int("mjd"),
        FieldDescriptor::double("fracmjd"),
        FieldDescriptor::double("lst_start"),
        FieldDescriptor::int("nsub_int"),
        FieldDescriptor::float("sub_int_time"),
        FieldDescriptor::int("ndump_sub_int"),
        FieldDescriptor::int("nbin"),
        FieldDescriptor::float("dumptime"),
        FieldDescriptor::double("tsmp"),
        // "05": ra/dec in radians, "04": l/b in degrees
        FieldDescriptor::char("coord_type", 2),
        FieldDescriptor::double("ra"),
        FieldDescriptor::double("dec"),
        FieldDescriptor::double("l"),
        FieldDescriptor::double("b"),
        FieldDescriptor::record("banda", &BAND_LAYOUT),
        FieldDescriptor::record("bandb", &BAND_LAYOUT),
        FieldDescriptor::double("dm"),
        FieldDescriptor::double("rm"),
        FieldDescriptor::double("folding_period"),
        FieldDescriptor::uint32("headerlength"),
        FieldDescriptor::char("backend", 8),
        FieldDescriptor::int("feedmode"),
        FieldDescriptor::double("calfreq"),
        FieldDescriptor::float("position_angle"),
        FieldDescriptor::int("nbits"),
        FieldDescriptor::char("receiver", 16),
        FieldDescriptor::char("comment", 64),
        FieldDescriptor::char("space", 482),
    ],
};

const _: () = assert!(TIMER_HEADER_LAYOUT.width() == TIMER_HEADER_SIZE);
