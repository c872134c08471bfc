//! Error types for the colorspeak core.

use thiserror::Error;

/// Errors produced by color construction and conversion operations.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A channel or attribute was outside its declared domain at construction.
    ///
    /// Construction fails fast; values are never silently clamped.
    #[error("{what} {value} out of range [{min}, {max}]")]
    Range {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A color temperature outside the supported [1000, 40000] Kelvin window.
    #[error("color temperature {0}K out of range [1000, 40000]")]
    KelvinOutOfRange(u32),

    /// A wavelength fell outside every entry of the spectral palette queried.
    #[error("wavelength {0}nm outside the defined spectral palette")]
    WavelengthOutsidePalette(f64),

    /// A hue fell outside every entry of the spectral palette queried.
    #[error("hue {0}\u{b0} outside the defined spectral palette")]
    HueOutsidePalette(u16),

    /// A hex color string could not be parsed.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}
