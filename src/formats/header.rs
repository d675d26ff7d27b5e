// RAW8 header layout
//
// A single field table drives the header struct, the parser, byte offsets
// and the ordered name -> value view. All fields are little-endian with no
// padding between them.

use crate::bitwise::{
    parse_array, parse_f32_le, parse_f64_le, parse_latin1_cstring, parse_u16_le, parse_u32_le,
    parse_u8,
};
use crate::core::date::{decode_date, FileDate};
use crate::core::mode::{mode_label, MeasurementMode};
use nom::IResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// On-disk encoding of a header field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Fixed-width Latin-1 text, cut at the first NUL
    Text(usize),
    U8,
    U16,
    U32,
    F32,
    /// Fixed count of doubles
    F64Array(usize),
}

impl FieldKind {
    /// Width in bytes
    pub const fn width(&self) -> usize {
        match *self {
            FieldKind::Text(len) => len,
            FieldKind::U8 => 1,
            FieldKind::U16 => 2,
            FieldKind::U32 | FieldKind::F32 => 4,
            FieldKind::F64Array(count) => count * 8,
        }
    }
}

/// Naming skew between AvaSoft releases. Both share the same byte layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormatVariant {
    /// Integration time is named `integrationTime`
    #[default]
    Current,
    /// Integration time is named `IntTime`
    Legacy,
}

/// One entry of the header field table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub legacy_name: Option<&'static str>,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Field name as reported by the given format variant
    pub fn name_for(&self, variant: FormatVariant) -> &'static str {
        match (variant, self.legacy_name) {
            (FormatVariant::Legacy, Some(legacy)) => legacy,
            _ => self.name,
        }
    }

    pub fn width(&self) -> usize {
        self.kind.width()
    }
}

/// A decoded header value, for name-based access
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    U8(u8),
    U16(u16),
    U32(u32),
    F32(f32),
    F64Array(Vec<f64>),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{:?}", s),
            FieldValue::U8(v) => write!(f, "{}", v),
            FieldValue::U16(v) => write!(f, "{}", v),
            FieldValue::U32(v) => write!(f, "{}", v),
            FieldValue::F32(v) => write!(f, "{}", v),
            FieldValue::F64Array(values) => write!(f, "{:?}", values),
        }
    }
}

macro_rules! header_layout {
    (@legacy) => { None };
    (@legacy $legacy:literal) => { Some($legacy) };

    (@type Text) => { String };
    (@type U8) => { u8 };
    (@type U16) => { u16 };
    (@type U32) => { u32 };
    (@type F32) => { f32 };
    (@type F64Array) => { Vec<f64> };

    (@parse $input:ident, Text($len:literal)) => { parse_latin1_cstring($len)($input) };
    (@parse $input:ident, U8) => { parse_u8($input) };
    (@parse $input:ident, U16) => { parse_u16_le($input) };
    (@parse $input:ident, U32) => { parse_u32_le($input) };
    (@parse $input:ident, F32) => { parse_f32_le($input) };
    (@parse $input:ident, F64Array($len:literal)) => { parse_array($len, parse_f64_le)($input) };

    ($( $field:ident : $kind:ident $( ( $len:literal ) )? => $name:literal $( | $legacy:literal )? ),+ $(,)?) => {
        /// Header field table, in file order
        pub const FIELDS: &[FieldSpec] = &[
            $(
                FieldSpec {
                    name: $name,
                    legacy_name: header_layout!(@legacy $( $legacy )?),
                    kind: FieldKind::$kind $( ($len) )?,
                },
            )+
        ];

        /// Decoded RAW8 header. Serializes with the on-disk field names.
        #[derive(Debug, Clone, PartialEq, Default, Serialize)]
        pub struct Header {
            $(
                #[serde(rename = $name)]
                pub $field: header_layout!(@type $kind),
            )+
        }

        impl Header {
            /// Parse all fields in table order
            pub fn parse(input: &[u8]) -> IResult<&[u8], Self> {
                $(
                    let (input, $field) = header_layout!(@parse input, $kind $( ($len) )?)?;
                )+
                Ok((input, Self { $( $field, )+ }))
            }

            /// Values in table order, paired with the fields they came from
            pub fn values(&self) -> Vec<(&'static FieldSpec, FieldValue)> {
                FIELDS
                    .iter()
                    .zip([ $( FieldValue::$kind(self.$field.clone()), )+ ])
                    .collect()
            }

            /// Value of one field, by its current-variant name
            fn value_of(&self, name: &str) -> Option<FieldValue> {
                match name {
                    $( $name => Some(FieldValue::$kind(self.$field.clone())), )+
                    _ => None,
                }
            }
        }
    };
}

header_layout! {
    version: Text(5) => "version",
    num_spectra: U8 => "numSpectra",
    length: U32 => "length",
    seq_num: U8 => "seqNum",
    meas_mode: U8 => "measMode",
    bitness: U8 => "bitness",
    sd_marker: U8 => "SDmarker",
    spec_id: Text(10) => "specID",
    user_friendly_name: Text(64) => "userfriendlyname",
    status: U8 => "status",
    start_pixel: U16 => "startPixel",
    stop_pixel: U16 => "stopPixel",
    integration_time: F32 => "integrationTime" | "IntTime",
    integration_delay: U32 => "integrationdelay",
    average: U32 => "Avg",
    enable: U8 => "enable",
    forget_percentage: U8 => "forgetPercentage",
    boxcar: U16 => "Boxcar",
    smooth_model: U8 => "smoothmodel",
    saturation_detection: U8 => "saturationdetection",
    trigger_mode: U8 => "TrigMode",
    trigger_source: U8 => "TrigSource",
    trigger_source_type: U8 => "TrigSourceType",
    strobe_control: U16 => "strobeCtrl",
    laser_delay: U32 => "laserDelay",
    laser_width: U32 => "laserWidth",
    laser_wavelength: F32 => "laserWavelength",
    store_to_ram: U16 => "store2ram",
    timestamp: U32 => "timestamp",
    spc_file_date: U32 => "SPCfiledate",
    detector_temp: F32 => "detectorTemp",
    board_temp: F32 => "boardTemp",
    ntc2_volt: F32 => "NTC2volt",
    color_temp: F32 => "ColorTemp",
    cal_int_time: F32 => "CalIntTime",
    fit_data: F64Array(5) => "fitdata",
    comment: Text(130) => "comment",
}

const fn layout_size(fields: &[FieldSpec]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fields.len() {
        total += fields[i].kind.width();
        i += 1;
    }
    total
}

/// Size of the fixed header in bytes
pub const HEADER_SIZE: usize = layout_size(FIELDS);

lazy_static::lazy_static! {
    /// Field name (either variant) -> (table index, byte offset)
    static ref FIELD_INDEX: HashMap<&'static str, (usize, usize)> = {
        let mut index = HashMap::new();
        let mut offset = 0;
        for (i, spec) in FIELDS.iter().enumerate() {
            index.insert(spec.name, (i, offset));
            if let Some(legacy) = spec.legacy_name {
                index.insert(legacy, (i, offset));
            }
            offset += spec.width();
        }
        index
    };
}

/// Byte offset of a field from the start of the file
pub fn field_offset(name: &str) -> Option<usize> {
    FIELD_INDEX.get(name).map(|&(_, offset)| offset)
}

/// Look up a field by name (either variant)
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    FIELD_INDEX.get(name).map(|&(i, _)| &FIELDS[i])
}

/// Fields with their byte offsets, in file order
pub fn field_offsets() -> impl Iterator<Item = (&'static FieldSpec, usize)> {
    FIELDS.iter().scan(0, |offset, spec| {
        let start = *offset;
        *offset += spec.width();
        Some((spec, start))
    })
}

impl Header {
    /// Ordered `(name, value)` view using the variant's field names
    pub fn entries(&self, variant: FormatVariant) -> Vec<(&'static str, FieldValue)> {
        self.values()
            .into_iter()
            .map(|(spec, value)| (spec.name_for(variant), value))
            .collect()
    }

    /// Value of a field by name (either variant)
    pub fn get(&self, name: &str) -> Option<FieldValue> {
        let &(i, _) = FIELD_INDEX.get(name)?;
        self.value_of(FIELDS[i].name)
    }

    /// Number of pixels per array, `None` if `stopPixel < startPixel`
    pub fn data_length(&self) -> Option<usize> {
        if self.stop_pixel < self.start_pixel {
            return None;
        }
        Some(usize::from(self.stop_pixel - self.start_pixel) + 1)
    }

    pub fn measurement_mode(&self) -> Option<MeasurementMode> {
        MeasurementMode::from_raw(self.meas_mode)
    }

    pub fn measurement_mode_label(&self) -> &'static str {
        mode_label(self.meas_mode)
    }

    pub fn date(&self) -> FileDate {
        decode_date(self.spc_file_date)
    }
}
