#![allow(dead_code)]

use psrtimer::constants::TIMER_HEADER_SIZE;
use psrtimer::layout::{Layout, BAND_LAYOUT, TIMER_HEADER_LAYOUT};

/// Builds header buffers field by field, using the layout offsets.
pub struct HeaderBuilder {
    bytes: Vec<u8>,
}

impl HeaderBuilder {
    pub fn new() -> Self {
        HeaderBuilder {
            bytes: vec![0u8; TIMER_HEADER_SIZE],
        }
    }

    fn write(&mut self, layout: &Layout, base: usize, name: &str, data: &[u8]) {
        let width = layout.field(name).unwrap().width;
        let start = base + layout.offset_of(name).unwrap();
        assert!(data.len() <= width, "{name} is {width} bytes wide");
        self.bytes[start..start + data.len()].copy_from_slice(data);
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.write(&TIMER_HEADER_LAYOUT, 0, name, value.as_bytes());
        self
    }

    pub fn int(mut self, name: &str, value: i32) -> Self {
        self.write(&TIMER_HEADER_LAYOUT, 0, name, &value.to_le_bytes());
        self
    }

    pub fn uint(mut self, name: &str, value: u32) -> Self {
        self.write(&TIMER_HEADER_LAYOUT, 0, name, &value.to_le_bytes());
        self
    }

    pub fn float(mut self, name: &str, value: f32) -> Self {
        self.write(&TIMER_HEADER_LAYOUT, 0, name, &value.to_le_bytes());
        self
    }

    pub fn double(mut self, name: &str, value: f64) -> Self {
        self.write(&TIMER_HEADER_LAYOUT, 0, name, &value.to_le_bytes());
        self
    }

    /// Write a `double` field of the band embedded as `band`.
    pub fn band_double(mut self, band: &str, name: &str, value: f64) -> Self {
        let base = TIMER_HEADER_LAYOUT.offset_of(band).unwrap();
        self.write(&BAND_LAYOUT, base, name, &value.to_le_bytes());
        self
    }

    /// Write an `int` field of the band embedded as `band`.
    pub fn band_int(mut self, band: &str, name: &str, value: i32) -> Self {
        let base = TIMER_HEADER_LAYOUT.offset_of(band).unwrap();
        self.write(&BAND_LAYOUT, base, name, &value.to_le_bytes());
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// Header of a CHIME observation of J2035+36.
pub fn chime_header() -> Vec<u8> {
    HeaderBuilder::new()
        .text("program", "psrchive")
        .float("version", 12.0)
        .text("psrname", "J2035+36")
        .text("machine_id", "CHIME")
        .text("telid", "CHIME")
        .text("utdate", "02/01/21")
        .int("mjd", 59216)
        .double("fracmjd", 0.8994956459396523)
        .int("nsub_int", 105)
        .float("sub_int_time", 3.562_045_3)
        .int("ndump_sub_int", 105)
        .int("nbin", 1024)
        .text("coord_type", "05")
        .double("ra", 5.392_139_5)
        .double("dec", 0.640_011_9)
        .band_double("banda", "centrefreq", 600.1953125)
        .band_double("banda", "bw", -400.0)
        .band_int("banda", "npol", 4)
        .band_int("banda", "nchan", 1024)
        .double("dm", 23.5)
        .uint("headerlength", 1024)
        .text("comment", "synthetic test header")
        .build()
}
