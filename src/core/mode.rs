// Acquisition mode stored in the RAW8 `measMode` byte

use super::constants::{MEASUREMENT_MODE_LABELS, UNKNOWN_MODE_LABEL};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Acquisition mode of a spectrum.
///
/// The file keeps the raw byte; this enum only exists for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MeasurementMode {
    Scope = 0,
    Absorbance = 1,
    ScopeDarkCorrected = 2,
    Transmission = 3,
    Reflectance = 4,
    Irradiance = 5,
    RelativeIrradiance = 6,
    Temperature = 7,
}

impl MeasurementMode {
    pub const ALL: [MeasurementMode; 8] = [
        MeasurementMode::Scope,
        MeasurementMode::Absorbance,
        MeasurementMode::ScopeDarkCorrected,
        MeasurementMode::Transmission,
        MeasurementMode::Reflectance,
        MeasurementMode::Irradiance,
        MeasurementMode::RelativeIrradiance,
        MeasurementMode::Temperature,
    ];

    /// Map a raw `measMode` byte, `None` if out of range
    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }

    pub fn raw(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        MEASUREMENT_MODE_LABELS[*self as usize]
    }
}

impl fmt::Display for MeasurementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Display label for a raw `measMode` byte
pub fn mode_label(raw: u8) -> &'static str {
    MeasurementMode::from_raw(raw)
        .map(|m| m.label())
        .unwrap_or(UNKNOWN_MODE_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        assert_eq!(MeasurementMode::from_raw(0), Some(MeasurementMode::Scope));
        assert_eq!(
            MeasurementMode::from_raw(3),
            Some(MeasurementMode::Transmission)
        );
        assert_eq!(
            MeasurementMode::from_raw(7),
            Some(MeasurementMode::Temperature)
        );
        assert_eq!(MeasurementMode::from_raw(8), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MeasurementMode::Transmission.to_string(), "transmission");
        assert_eq!(
            MeasurementMode::ScopeDarkCorrected.label(),
            "scope corrected for dark"
        );
        assert_eq!(mode_label(6), "relative irradiance");
        assert_eq!(mode_label(200), "unknown");
    }

    #[test]
    fn test_raw_round_trip() {
        for mode in MeasurementMode::ALL {
            assert_eq!(MeasurementMode::from_raw(mode.raw()), Some(mode));
        }
    }
}
