// Black-body radiance and relative irradiance derived from a decoded record
//
// The relative irradiance formula follows the AvaSoft 8.4 manual (p. 35).
// It is kept for compatibility with existing outputs and has not been
// checked against the physics.

use super::constants::{BOLTZMANN, NM_TO_M, PLANCK, SPEED_OF_LIGHT};
use crate::formats::raw8::Record;

/// Planck's law for a single wavelength in metres.
///
/// No special-casing: `temp_kelvin == 0` yields `+0.0`, a zero wavelength
/// yields NaN.
pub fn planck(temp_kelvin: f64, wavelength_m: f64) -> f64 {
    let h = PLANCK;
    let c = SPEED_OF_LIGHT;
    let kb = BOLTZMANN;
    ((2.0 * h * (c * c)) / wavelength_m.powf(5.0)) * 1.0
        / (((h * c) / (wavelength_m * kb * temp_kelvin)).exp() - 1.0)
}

/// Spectral radiance of a black body at each wavelength (metres)
pub fn black_body_radiance(temp_kelvin: f64, wavelengths_m: &[f64]) -> Vec<f64> {
    wavelengths_m
        .iter()
        .map(|&wl| planck(temp_kelvin, wl))
        .collect()
}

/// Convert the record's nanometre wavelengths to metres
pub fn wavelengths_in_meters(wavelengths_nm: &[f32]) -> Vec<f64> {
    wavelengths_nm
        .iter()
        .map(|&wl| f64::from(wl) * NM_TO_M)
        .collect()
}

/// Black-body curve at the record's `ColorTemp`
pub fn record_black_body(record: &Record) -> Vec<f64> {
    black_body_radiance(
        f64::from(record.header().color_temp),
        &wavelengths_in_meters(record.wavelength()),
    )
}

/// `black_body · (scope − dark)` per pixel
pub fn relative_irradiance(record: &Record) -> Vec<f64> {
    record_black_body(record)
        .into_iter()
        .zip(record.scope().iter().zip(record.dark()))
        .map(|(bb, (&scope, &dark))| bb * (f64::from(scope) - f64::from(dark)))
        .collect()
}
