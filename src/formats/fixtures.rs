// Hand-built RAW8 images for tests

use super::header::{FieldKind, FieldValue, Header};
use super::raw8::{decode, Record};
use std::collections::HashMap;

pub fn pack_date(year: u32, month: u32, day: u32, hour: u32, minute: u32) -> u32 {
    (year << 20) | (month << 16) | (day << 11) | (hour << 6) | minute
}

/// Builds RAW8 byte images field by field, following the header table
#[derive(Debug, Clone)]
pub struct Raw8Builder {
    pub header: Header,
    pub wavelength: Vec<f32>,
    pub scope: Vec<f32>,
    pub dark: Vec<f32>,
    pub reference: Vec<f32>,
    raw_text: HashMap<&'static str, Vec<u8>>,
}

impl Raw8Builder {
    pub fn new() -> Self {
        Self {
            header: Header {
                fit_data: vec![0.0; 5],
                ..Default::default()
            },
            wavelength: Vec::new(),
            scope: Vec::new(),
            dark: Vec::new(),
            reference: Vec::new(),
            raw_text: HashMap::new(),
        }
    }

    pub fn pixels(mut self, start: u16, stop: u16) -> Self {
        self.header.start_pixel = start;
        self.header.stop_pixel = stop;
        self
    }

    pub fn color_temp(mut self, kelvin: f32) -> Self {
        self.header.color_temp = kelvin;
        self
    }

    pub fn wavelength(mut self, values: Vec<f32>) -> Self {
        self.wavelength = values;
        self
    }

    pub fn scope(mut self, values: Vec<f32>) -> Self {
        self.scope = values;
        self
    }

    pub fn dark(mut self, values: Vec<f32>) -> Self {
        self.dark = values;
        self
    }

    pub fn reference(mut self, values: Vec<f32>) -> Self {
        self.reference = values;
        self
    }

    /// Write these exact bytes (zero padded) into a text field
    pub fn raw_text(mut self, name: &'static str, bytes: &[u8]) -> Self {
        self.raw_text.insert(name, bytes.to_vec());
        self
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();

        for (spec, value) in self.header.values() {
            let start = out.len();
            match (spec.kind, value) {
                (FieldKind::Text(len), FieldValue::Text(s)) => {
                    let mut bytes = self
                        .raw_text
                        .get(spec.name)
                        .cloned()
                        .unwrap_or_else(|| s.chars().map(|c| c as u8).collect());
                    bytes.resize(len, 0);
                    out.extend_from_slice(&bytes);
                }
                (_, FieldValue::U8(v)) => out.push(v),
                (_, FieldValue::U16(v)) => out.extend_from_slice(&v.to_le_bytes()),
                (_, FieldValue::U32(v)) => out.extend_from_slice(&v.to_le_bytes()),
                (_, FieldValue::F32(v)) => out.extend_from_slice(&v.to_le_bytes()),
                (FieldKind::F64Array(count), FieldValue::F64Array(values)) => {
                    assert_eq!(values.len(), count, "{} needs {} values", spec.name, count);
                    for v in values {
                        out.extend_from_slice(&v.to_le_bytes());
                    }
                }
                (kind, value) => panic!("{:?} does not fit {:?}", value, kind),
            }
            assert_eq!(out.len() - start, spec.width(), "{}", spec.name);
        }

        for values in [&self.wavelength, &self.scope, &self.dark, &self.reference] {
            for v in values {
                out.extend_from_slice(&v.to_le_bytes());
            }
        }

        out
    }

    pub fn decode(&self) -> Record {
        decode(&self.to_bytes()).unwrap()
    }
}
