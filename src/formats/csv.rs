//! CSV export of decoded spectra

use super::raw8::{Record, SpectrumKind};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CsvError>;

/// Extra column appended after the four arrays
pub const RELATIVE_IRRADIANCE_COLUMN: &str = "relative_irradiance";

/// CSV column name of an array
pub fn column_name(kind: SpectrumKind) -> &'static str {
    match kind {
        SpectrumKind::Wavelength => "wavelength",
        other => other.name(),
    }
}

/// Column names, in output order
pub fn csv_header() -> Vec<&'static str> {
    SpectrumKind::ALL
        .iter()
        .map(|&kind| column_name(kind))
        .chain(std::iter::once(RELATIVE_IRRADIANCE_COLUMN))
        .collect()
}

/// Write one row per pixel: the four arrays, then the relative irradiance
pub fn write_csv<W: Write>(mut writer: W, record: &Record) -> Result<()> {
    writeln!(writer, "{}", csv_header().join(","))?;

    let irradiance = record.relative_irradiance();
    for (i, irr) in irradiance.iter().enumerate() {
        let row: Vec<String> = SpectrumKind::ALL
            .iter()
            .map(|&kind| record.data(kind)[i].to_string())
            .chain(std::iter::once(irr.to_string()))
            .collect();
        writeln!(writer, "{}", row.join(","))?;
    }

    writer.flush()?;
    Ok(())
}

/// Export a record's spectra to a CSV file
pub fn export_csv(filename: impl AsRef<Path>, record: &Record) -> Result<()> {
    let file = File::create(filename)?;
    write_csv(BufWriter::new(file), record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::fixtures::Raw8Builder;
    use tempfile::NamedTempFile;

    fn record() -> Record {
        Raw8Builder::new()
            .pixels(0, 1)
            .color_temp(3000.0)
            .wavelength(vec![500.0, 500.5])
            .scope(vec![10.0, 20.0])
            .dark(vec![10.0, 5.0])
            .reference(vec![100.0, 200.0])
            .decode()
    }

    #[test]
    fn test_csv_header() {
        assert_eq!(
            csv_header().join(","),
            "wavelength,scope,dark,ref,relative_irradiance"
        );
        assert_eq!(column_name(SpectrumKind::Wavelength), "wavelength");
        assert_eq!(column_name(SpectrumKind::Reference), "ref");
    }

    #[test]
    fn test_write_csv() {
        let record = record();
        let mut out = Vec::new();
        write_csv(&mut out, &record).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "wavelength,scope,dark,ref,relative_irradiance");
        // scope == dark on the first pixel
        assert_eq!(lines[1], "500,10,10,100,0");

        let fields: Vec<&str> = lines[2].split(',').collect();
        assert_eq!(&fields[..4], &["500.5", "20", "5", "200"]);
        let irr: f64 = fields[4].parse().unwrap();
        assert_eq!(irr, record.relative_irradiance()[1]);
    }

    #[test]
    fn test_export_csv() {
        let record = record();
        let tempfile = NamedTempFile::new().unwrap();
        export_csv(tempfile.path(), &record).unwrap();

        let content = std::fs::read_to_string(tempfile.path()).unwrap();
        assert_eq!(content.lines().count(), record.data_length() + 1);
    }

    #[test]
    fn test_export_csv_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let result = export_csv(&path, &record());
        assert!(matches!(result, Err(CsvError::Io(_))));
        assert!(!path.exists());
    }
}
