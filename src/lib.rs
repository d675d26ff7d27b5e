// RAW8-RS: reader for Avantes RAW8 spectrometer files
// Copyright 2024 - Licensed under GPLv3

pub mod bitwise;
pub mod core;
pub mod formats;

// Re-export commonly used types
pub use crate::core::{
    black_body_radiance, decode_date, mode_label, planck, relative_irradiance, DateError,
    FileDate, MeasurementMode,
};
pub use crate::formats::{
    decode, export_csv, load_raw8, read_raw8, DecodeError, FieldValue, FormatVariant, Header,
    Raw8Decoder, Record, SpectrumKind, HEADER_SIZE,
};

/// RAW8-RS version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
