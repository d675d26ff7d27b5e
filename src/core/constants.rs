// Physical constants and display tables shared across RAW8 handling

/// Speed of light [m s^-1]
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// Planck constant [J s]
pub const PLANCK: f64 = 6.625e-34;

/// Boltzmann constant [J K^-1]
pub const BOLTZMANN: f64 = 1.38e-23;

/// RAW8 wavelengths are stored in nanometres
pub const NM_TO_M: f64 = 1e-9;

/// Measurement mode labels, indexed by the raw `measMode` byte
pub const MEASUREMENT_MODE_LABELS: [&str; 8] = [
    "scope",
    "absorbance",
    "scope corrected for dark",
    "transmission",
    "reflectance",
    "irradiance",
    "relative irradiance",
    "temperature",
];

/// Label shown for a `measMode` outside the known range
pub const UNKNOWN_MODE_LABEL: &str = "unknown";
