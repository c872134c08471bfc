#![deny(unsafe_code)]
//! Core color types for the colorspeak description-to-color system.
//!
//! Provides the `RgbColor`/`HsvColor`/`HlsColor`/`Cmyk` value types with
//! pairwise conversions, the `Color` sum type, spectral colors with
//! wavelength↔hue interpolation tables, black-body temperature conversion,
//! weighted circular-mean color averaging and a CIEDE2000 distance oracle.

pub mod color;
pub mod distance;
pub mod error;
pub mod palette;
pub mod spectral;
pub mod temperature;

pub use color::{average_colors, Cmyk, Color, ColorConvert, HlsColor, HsvColor, RgbColor};
pub use distance::{ciede2000, nearest, rgb_to_lab, ColorDistance, DeltaE2000, Lab};
pub use error::ColorError;
pub use palette::Palette;
pub use spectral::{
    ColorTerm, HueRange, LanguageVocabulary, SpectralColor, SpectralPalette,
    CRC_HANDBOOK_SPECTRAL_TERMS, ELECTROMAGNETIC_SPECTRUM, ENGLISH_COLOR_TERMS,
    IR_SPECTRAL_BANDS, ISCC_NBS_SPECTRAL_TERMS, MALACARA_SPECTRAL_TERMS, NEWTON_SPECTRAL_TERMS,
    UV_SPECTRAL_BANDS,
};
pub use temperature::rgb_from_kelvin;
