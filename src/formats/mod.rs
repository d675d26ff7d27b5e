// RAW8 file format handling
pub mod csv;
pub mod header;
pub mod raw8;

#[cfg(test)]
pub(crate) mod fixtures;

pub use csv::{export_csv, write_csv, CsvError};
pub use header::{
    field_offset, FieldKind, FieldSpec, FieldValue, FormatVariant, Header, FIELDS, HEADER_SIZE,
};
pub use raw8::{decode, load_raw8, read_raw8, DecodeError, Raw8Decoder, Record, SpectrumKind};
