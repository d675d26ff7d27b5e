// RAW8 spectrum file decoder
//
// Layout: a fixed HEADER_SIZE-byte header, then four little-endian f32
// arrays of `stopPixel - startPixel + 1` elements each, in the order
// wavelength, scope, dark, reference.

use super::header::{FieldValue, FormatVariant, Header, FIELDS, HEADER_SIZE};
use crate::bitwise::{parse_array, parse_f32_le};
use crate::core::date::{self, FileDate};
use crate::core::radiometry;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Truncated data in {what} at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedData {
        what: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Malformed header: stopPixel {stop_pixel} is before startPixel {start_pixel}")]
    MalformedHeader { start_pixel: u16, stop_pixel: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DecodeError>;

/// The four per-pixel arrays, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpectrumKind {
    Wavelength,
    Scope,
    Dark,
    Reference,
}

impl SpectrumKind {
    pub const ALL: [SpectrumKind; 4] = [
        SpectrumKind::Wavelength,
        SpectrumKind::Scope,
        SpectrumKind::Dark,
        SpectrumKind::Reference,
    ];

    /// Short name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            SpectrumKind::Wavelength => "wl",
            SpectrumKind::Scope => "scope",
            SpectrumKind::Dark => "dark",
            SpectrumKind::Reference => "ref",
        }
    }
}

impl FromStr for SpectrumKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "wl" | "wavelength" => Ok(SpectrumKind::Wavelength),
            "scope" => Ok(SpectrumKind::Scope),
            "dark" => Ok(SpectrumKind::Dark),
            "ref" | "reference" => Ok(SpectrumKind::Reference),
            _ => Err(format!("Unknown spectrum: {}", s)),
        }
    }
}

/// One decoded RAW8 file. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(skip)]
    variant: FormatVariant,
    header: Header,
    wavelength: Vec<f32>,
    scope: Vec<f32>,
    dark: Vec<f32>,
    #[serde(rename = "ref")]
    reference: Vec<f32>,
}

impl Record {
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn variant(&self) -> FormatVariant {
        self.variant
    }

    /// Pixels per array; equal to `stopPixel - startPixel + 1`
    pub fn data_length(&self) -> usize {
        self.wavelength.len()
    }

    /// Wavelengths in nanometres
    pub fn wavelength(&self) -> &[f32] {
        &self.wavelength
    }

    pub fn scope(&self) -> &[f32] {
        &self.scope
    }

    pub fn dark(&self) -> &[f32] {
        &self.dark
    }

    pub fn reference(&self) -> &[f32] {
        &self.reference
    }

    pub fn data(&self, kind: SpectrumKind) -> &[f32] {
        match kind {
            SpectrumKind::Wavelength => &self.wavelength,
            SpectrumKind::Scope => &self.scope,
            SpectrumKind::Dark => &self.dark,
            SpectrumKind::Reference => &self.reference,
        }
    }

    /// Header as ordered `(name, value)` pairs, named per the record's variant
    pub fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        self.header.entries(self.variant)
    }

    pub fn get_header(&self, name: &str) -> Option<FieldValue> {
        self.header.get(name)
    }

    pub fn date(&self) -> FileDate {
        self.header.date()
    }

    pub fn datetime(&self) -> date::Result<NaiveDateTime> {
        self.date().to_datetime()
    }

    /// Black-body curve at `ColorTemp` over the record's wavelengths
    pub fn black_body(&self) -> Vec<f64> {
        radiometry::record_black_body(self)
    }

    /// See [`radiometry::relative_irradiance`]
    pub fn relative_irradiance(&self) -> Vec<f64> {
        radiometry::relative_irradiance(self)
    }

    /// Serialize header and arrays to JSON
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// RAW8 decoder with its options
#[derive(Debug, Clone, Copy, Default)]
pub struct Raw8Decoder {
    variant: FormatVariant,
}

impl Raw8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the field naming of the records produced
    pub fn with_variant(mut self, variant: FormatVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn variant(&self) -> FormatVariant {
        self.variant
    }

    /// Decode a complete RAW8 image held in memory
    pub fn decode(&self, bytes: &[u8]) -> Result<Record> {
        let header = decode_header(bytes)?;
        let data_length = checked_data_length(&header)?;
        let payload = &bytes[HEADER_SIZE..];
        let record = self.assemble(header, decode_spectra(payload, data_length)?);

        let trailing = payload.len() - spectra_size(data_length);
        if trailing > 0 {
            tracing::debug!("Ignoring {} trailing bytes after RAW8 payload", trailing);
        }
        Ok(record)
    }

    /// Read one RAW8 record from a byte stream.
    ///
    /// Reads the header first; the payload is not touched when the pixel
    /// range is malformed. Bytes after the payload are left unread.
    pub fn read<R: Read>(&self, mut reader: R) -> Result<Record> {
        let mut header_bytes = Vec::with_capacity(HEADER_SIZE);
        (&mut reader)
            .take(HEADER_SIZE as u64)
            .read_to_end(&mut header_bytes)?;
        let header = decode_header(&header_bytes)?;
        let data_length = checked_data_length(&header)?;

        let payload_size = spectra_size(data_length);
        let mut payload = Vec::with_capacity(payload_size);
        reader
            .take(payload_size as u64)
            .read_to_end(&mut payload)?;
        let spectra = decode_spectra(&payload, data_length)?;

        Ok(self.assemble(header, spectra))
    }

    /// Load a RAW8 file from disk
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Record> {
        let path = path.as_ref();
        tracing::debug!("Loading RAW8 file {}", path.display());
        let file = File::open(path)?;
        self.read(BufReader::new(file))
    }

    fn assemble(&self, header: Header, spectra: [Vec<f32>; 4]) -> Record {
        let [wavelength, scope, dark, reference] = spectra;
        tracing::debug!(
            "Decoded RAW8 record: version={:?} spec_id={:?} pixels={}",
            header.version,
            header.spec_id,
            wavelength.len()
        );
        Record {
            variant: self.variant,
            header,
            wavelength,
            scope,
            dark,
            reference,
        }
    }
}

/// Decode a RAW8 image held in memory with default options
pub fn decode(bytes: &[u8]) -> Result<Record> {
    Raw8Decoder::new().decode(bytes)
}

/// Read a RAW8 record from a stream with default options
pub fn read_raw8<R: Read>(reader: R) -> Result<Record> {
    Raw8Decoder::new().read(reader)
}

/// Load a RAW8 file with default options
pub fn load_raw8(path: impl AsRef<Path>) -> Result<Record> {
    Raw8Decoder::new().load(path)
}

fn spectra_size(data_length: usize) -> usize {
    SpectrumKind::ALL.len() * data_length * 4
}

fn checked_data_length(header: &Header) -> Result<usize> {
    header
        .data_length()
        .ok_or(DecodeError::MalformedHeader {
            start_pixel: header.start_pixel,
            stop_pixel: header.stop_pixel,
        })
}

/// Decode the header from the front of `bytes`, naming the first field cut short
fn decode_header(bytes: &[u8]) -> Result<Header> {
    if bytes.len() < HEADER_SIZE {
        let mut offset = 0;
        for spec in FIELDS {
            if offset + spec.width() > bytes.len() {
                return Err(DecodeError::TruncatedData {
                    what: spec.name,
                    offset,
                    needed: spec.width(),
                    available: bytes.len().saturating_sub(offset),
                });
            }
            offset += spec.width();
        }
    }

    Header::parse(bytes)
        .map(|(_, header)| header)
        .map_err(|_| DecodeError::TruncatedData {
            what: "header",
            offset: 0,
            needed: HEADER_SIZE,
            available: bytes.len(),
        })
}

/// Decode the four arrays from `payload`, which starts right after the header
fn decode_spectra(payload: &[u8], data_length: usize) -> Result<[Vec<f32>; 4]> {
    let array_size = data_length * 4;
    let mut input = payload;
    let mut spectra: [Vec<f32>; 4] = Default::default();

    for (i, kind) in SpectrumKind::ALL.iter().enumerate() {
        let (rest, values) = parse_array(data_length, parse_f32_le)(input).map_err(|_| {
            DecodeError::TruncatedData {
                what: kind.name(),
                offset: HEADER_SIZE + i * array_size,
                needed: array_size,
                available: input.len(),
            }
        })?;
        spectra[i] = values;
        input = rest;
    }

    Ok(spectra)
}
