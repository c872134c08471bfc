//! Spectral colors, hue ranges and wavelength interpolation tables.
//!
//! A `SpectralPalette` is an ordered sequence of (wavelength range, hue
//! range, name) entries. Wavelength→hue and hue→wavelength lookups scan the
//! palette in order and linearly interpolate inside the first matching
//! entry. The named reference tables at the bottom follow the spectral
//! color term conventions of Newton, ISCC-NBS, Malacara and the CRC
//! Handbook, extended with invisible IR/UV bands.

use crate::color::{ColorConvert, HsvColor, RgbColor};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A closed interval of hue degrees naming one color band.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HueRange {
    pub min: u16,
    pub max: u16,
    pub name: Option<String>,
    pub hex: Option<String>,
}

/// A color defined by a wavelength interval in nanometers.
///
/// Wavelengths are `f64` because the invisible bands reach far beyond the
/// visible spectrum in both directions (gamma rays start below 0.01 nm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralColor {
    pub wavelen_nm_min: f64,
    pub wavelen_nm_max: f64,
    pub hex: Option<String>,
    pub hue: Option<HueRange>,
    pub name: Option<String>,
}

/// An ordered table of spectral colors used for interpolation.
///
/// Precondition: entries are sorted ascending by wavelength and their
/// wavelength (and hue) ranges do not overlap. The tables are not
/// validated; on a violated precondition the first matching entry wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralPalette {
    pub colors: Vec<SpectralColor>,
}

/// A named color term bound to a hue range, the unit of a language's
/// static color vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTerm {
    pub name: String,
    pub hue: HueRange,
    pub hex: Option<String>,
}

/// The basic color terms of one language, usable as a fallback spectral
/// table when no localized dictionary is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageVocabulary {
    pub terms: Vec<ColorTerm>,
}

impl HueRange {
    /// Creates a hue range, validating both bounds against [0, 360].
    pub fn new(min: u16, max: u16) -> Result<HueRange, ColorError> {
        for value in [min, max] {
            if value > 360 {
                return Err(ColorError::Range {
                    what: "hue",
                    value: f64::from(value),
                    min: 0.0,
                    max: 360.0,
                });
            }
        }
        Ok(HueRange {
            min,
            max,
            name: None,
            hex: None,
        })
    }

    /// Returns a copy with the given name.
    pub fn with_name(mut self, name: impl Into<String>) -> HueRange {
        self.name = Some(name.into());
        self
    }

    /// Returns a copy with the given hex approximation.
    pub fn with_hex(mut self, hex: impl Into<String>) -> HueRange {
        self.hex = Some(hex.into());
        self
    }

    /// The representative hue: the interval midpoint.
    pub fn mid(&self) -> u16 {
        (self.min + self.max) / 2
    }

    /// Converts this hue band to a spectral color against the reference
    /// palette (ISCC-NBS).
    ///
    /// Wavelength bounds come from `hue_to_wavelength` at both ends of the
    /// range. When the range carries no name, the name of the reference
    /// entry containing the midpoint wavelength is filled in.
    pub fn to_spectral(&self) -> Result<SpectralColor, ColorError> {
        let palette = &*ISCC_NBS_SPECTRAL_TERMS;
        let wavelen_min = palette.hue_to_wavelength(self.min)?;
        let wavelen_max = palette.hue_to_wavelength(self.max)?;
        let name = self.name.clone().or_else(|| {
            let mid = (wavelen_min + wavelen_max) / 2.0;
            palette
                .colors
                .iter()
                .find(|c| c.wavelen_nm_min <= mid && mid <= c.wavelen_nm_max)
                .and_then(|c| c.name.clone())
        });
        Ok(SpectralColor {
            wavelen_nm_min: wavelen_min.min(wavelen_max),
            wavelen_nm_max: wavelen_min.max(wavelen_max),
            hex: self.hex.clone(),
            hue: Some(self.clone()),
            name,
        })
    }
}

impl SpectralColor {
    /// The representative wavelength: the interval midpoint.
    pub fn wavelength(&self) -> f64 {
        (self.wavelen_nm_min + self.wavelen_nm_max) / 2.0
    }
}

impl ColorConvert for SpectralColor {
    /// Resolution order: hex approximation, then hue approximation (its
    /// midpoint hue with neutral saturation/value), then wavelength lookup
    /// against the reference palette.
    fn as_rgb(&self) -> Result<RgbColor, ColorError> {
        if let Some(hex) = &self.hex {
            return RgbColor::from_hex(hex);
        }
        let hue = match &self.hue {
            Some(range) => range.mid(),
            None => ISCC_NBS_SPECTRAL_TERMS.wavelength_to_hue(self.wavelength())?,
        };
        Ok(HsvColor::new(f64::from(hue), 0.5, 0.5)?.to_rgb())
    }

    fn as_spectral(&self) -> Result<SpectralColor, ColorError> {
        Ok(self.clone())
    }
}

impl ColorConvert for ColorTerm {
    /// Resolution order: the term's own hex, the hue range's hex, then the
    /// spectral interpolation fallback.
    fn as_rgb(&self) -> Result<RgbColor, ColorError> {
        if let Some(hex) = &self.hex {
            return RgbColor::from_hex(hex);
        }
        if let Some(hex) = &self.hue.hex {
            return RgbColor::from_hex(hex);
        }
        self.hue.to_spectral()?.as_rgb()
    }

    fn as_spectral(&self) -> Result<SpectralColor, ColorError> {
        self.hue.clone().with_name(self.name.clone()).to_spectral()
    }
}

impl SpectralPalette {
    /// Maps a wavelength to a hue by interpolating inside the first entry
    /// whose wavelength range contains `wavelen`.
    ///
    /// Degenerate ranges (min == max) return their single hue. Entries
    /// without a hue range (the invisible bands) are skipped. A wavelength
    /// outside every entry fails with `WavelengthOutsidePalette`.
    pub fn wavelength_to_hue(&self, wavelen: f64) -> Result<u16, ColorError> {
        for entry in &self.colors {
            let Some(hue) = &entry.hue else { continue };
            if entry.wavelen_nm_min <= wavelen && wavelen <= entry.wavelen_nm_max {
                let span = entry.wavelen_nm_max - entry.wavelen_nm_min;
                if span == 0.0 {
                    return Ok(hue.mid());
                }
                let frac = (wavelen - entry.wavelen_nm_min) / span;
                let interpolated =
                    f64::from(hue.min) + frac * (f64::from(hue.max) - f64::from(hue.min));
                return Ok(interpolated.round() as u16);
            }
        }
        Err(ColorError::WavelengthOutsidePalette(wavelen))
    }

    /// Maps a hue to a wavelength, the symmetric inverse of
    /// `wavelength_to_hue` with the same first-match and degenerate-range
    /// rules. A hue outside every entry fails with `HueOutsidePalette`.
    pub fn hue_to_wavelength(&self, hue: u16) -> Result<f64, ColorError> {
        for entry in &self.colors {
            let Some(range) = &entry.hue else { continue };
            if range.min <= hue && hue <= range.max {
                let span = f64::from(range.max) - f64::from(range.min);
                if span == 0.0 {
                    return Ok(entry.wavelen_nm_min);
                }
                let frac = (f64::from(hue) - f64::from(range.min)) / span;
                return Ok(entry.wavelen_nm_min
                    + frac * (entry.wavelen_nm_max - entry.wavelen_nm_min));
            }
        }
        Err(ColorError::HueOutsidePalette(hue))
    }
}

/// Shorthand for the visible-band table entries below.
fn band(
    name: &str,
    wavelen_nm_min: f64,
    wavelen_nm_max: f64,
    hex: &str,
    hue_min: u16,
    hue_max: u16,
) -> SpectralColor {
    SpectralColor {
        wavelen_nm_min,
        wavelen_nm_max,
        hex: Some(hex.to_string()),
        hue: Some(HueRange {
            min: hue_min,
            max: hue_max,
            name: None,
            hex: None,
        }),
        name: Some(name.to_string()),
    }
}

/// Shorthand for the invisible-band table entries below.
fn invisible_band(name: &str, wavelen_nm_min: f64, wavelen_nm_max: f64, hex: &str) -> SpectralColor {
    SpectralColor {
        wavelen_nm_min,
        wavelen_nm_max,
        hex: Some(hex.to_string()),
        hue: None,
        name: Some(name.to_string()),
    }
}

/// Newton's seven spectral color terms.
pub static NEWTON_SPECTRAL_TERMS: LazyLock<SpectralPalette> = LazyLock::new(|| SpectralPalette {
    colors: vec![
        band("Violet", 380.0, 420.0, "#7F00FF", 249, 250),
        band("Indigo", 430.0, 440.0, "#3F00FF", 247, 249),
        band("Blue", 450.0, 480.0, "#1DA2DF", 226, 245),
        band("Green", 490.0, 520.0, "#00FF00", 122, 190),
        band("Yellow", 530.0, 570.0, "#FFFF00", 62, 117),
        band("Orange", 580.0, 610.0, "#FF8800", 5, 28),
        band("Red", 620.0, 690.0, "#FF0000", 0, 3),
    ],
});

/// ISCC-NBS spectral color terms; the default reference palette for
/// wavelength↔hue resolution.
pub static ISCC_NBS_SPECTRAL_TERMS: LazyLock<SpectralPalette> = LazyLock::new(|| SpectralPalette {
    colors: vec![
        band("Violet", 380.0, 430.0, "#7F00FF", 249, 250),
        band("Blue", 440.0, 480.0, "#3F00FF", 226, 247),
        band("Blue-Green", 490.0, 490.0, "#00FFFF", 190, 190),
        band("Green", 500.0, 540.0, "#00FF00", 113, 143),
        band("Yellow-Green", 550.0, 570.0, "#88FF00", 62, 104),
        band("Yellow", 580.0, 580.0, "#FFFF00", 28, 28),
        band("Orange", 590.0, 600.0, "#FF8800", 7, 14),
        band("Red", 610.0, 730.0, "#FF0000", 0, 5),
    ],
});

/// Malacara's spectral color terms.
pub static MALACARA_SPECTRAL_TERMS: LazyLock<SpectralPalette> = LazyLock::new(|| SpectralPalette {
    colors: vec![
        band("Violet", 380.0, 420.0, "#7F00FF", 249, 250),
        band("Blue", 430.0, 490.0, "#3F00FF", 190, 248),
        band("Cyan", 500.0, 510.0, "#00FFFF", 126, 143),
        band("Green", 500.0, 560.0, "#00FF00", 93, 122),
        band("Yellow", 570.0, 570.0, "#FFFF00", 62, 62),
        band("Orange", 580.0, 620.0, "#FF8800", 3, 28),
        band("Red", 630.0, 730.0, "#FF0000", 0, 2),
    ],
});

/// CRC Handbook spectral color terms.
pub static CRC_HANDBOOK_SPECTRAL_TERMS: LazyLock<SpectralPalette> =
    LazyLock::new(|| SpectralPalette {
        colors: vec![
            band("Violet", 380.0, 440.0, "#7F00FF", 247, 250),
            band("Blue", 450.0, 490.0, "#3F00FF", 190, 245),
            band("Green", 500.0, 560.0, "#00FF00", 93, 143),
            band("Yellow", 570.0, 580.0, "#FFFF00", 28, 62),
            band("Orange", 590.0, 610.0, "#FF8800", 5, 14),
            band("Red", 620.0, 740.0, "#FF0000", 0, 3),
        ],
    });

/// Long-wavelength invisible bands, rendered black.
pub static IR_SPECTRAL_BANDS: LazyLock<SpectralPalette> = LazyLock::new(|| SpectralPalette {
    colors: vec![
        invisible_band("Infrared", 700.0, 1e6, "#000000"),
        invisible_band("Microwaves", 1e6, 1e9, "#000000"),
        invisible_band("Radio Waves", 1e9, 1e14, "#000000"),
    ],
});

/// Short-wavelength invisible bands, rendered white.
pub static UV_SPECTRAL_BANDS: LazyLock<SpectralPalette> = LazyLock::new(|| SpectralPalette {
    colors: vec![
        invisible_band("Ultraviolet", 10.0, 400.0, "#FFFFFF"),
        invisible_band("X-Rays", 0.01, 10.0, "#FFFFFF"),
        invisible_band("Gamma Rays", 0.0, 0.01, "#FFFFFF"),
    ],
});

/// The full electromagnetic spectrum: IR bands, the visible ISCC-NBS
/// terms, then the UV bands. The concatenation overlaps at the seams, so
/// first-match order decides there.
pub static ELECTROMAGNETIC_SPECTRUM: LazyLock<SpectralPalette> = LazyLock::new(|| {
    let mut colors = IR_SPECTRAL_BANDS.colors.clone();
    colors.extend(ISCC_NBS_SPECTRAL_TERMS.colors.clone());
    colors.extend(UV_SPECTRAL_BANDS.colors.clone());
    SpectralPalette { colors }
});

/// Shorthand for the vocabulary entries below.
fn english_term(name: &str, hue_min: u16, hue_max: u16, hex: &str) -> ColorTerm {
    ColorTerm {
        name: name.to_string(),
        hue: HueRange {
            min: hue_min,
            max: hue_max,
            name: None,
            hex: None,
        },
        hex: Some(hex.to_string()),
    }
}

/// Approximate hue bands for the basic English color terms.
pub static ENGLISH_COLOR_TERMS: LazyLock<LanguageVocabulary> =
    LazyLock::new(|| LanguageVocabulary {
        terms: vec![
            english_term("red", 0, 30, "#FF0000"),
            english_term("orange", 30, 60, "#FFA500"),
            english_term("yellow", 60, 90, "#FFFF00"),
            english_term("green", 90, 150, "#008000"),
            english_term("cyan", 150, 180, "#00FFFF"),
            english_term("blue", 180, 240, "#0000FF"),
            english_term("purple", 240, 270, "#800080"),
            english_term("magenta", 270, 300, "#FF00FF"),
            english_term("pink", 300, 330, "#FFC0CB"),
            english_term("red", 330, 360, "#FF0000"),
        ],
    });
