//! Color value types and conversions between representations.
//!
//! Provides `RgbColor` (8-bit sRGB with alpha), `HsvColor`, `HlsColor` and
//! `Cmyk`, plus the closed `Color` sum type over every supported kind.
//! Conversions between the cylindrical models and RGB use the standard
//! formulas with hue in fractional degrees and the remaining components
//! normalized to [0, 1]. Hue stays `f64` end to end; rounding it to whole
//! degrees would shift high-chroma channels by up to two units on a round
//! trip. All values are immutable; conversions and adjustments always
//! produce new instances.

use crate::error::ColorError;
use crate::spectral::{ColorTerm, HueRange, SpectralColor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An sRGB color with 8-bit channels and alpha (255 = opaque).
///
/// The `u8` channel type makes the [0, 255] range invariant structural, so
/// plain construction cannot fail. Optional `name` and `description` carry
/// human-readable labels through conversions.
///
/// Serializes as a hex string `"#RRGGBB"`; alpha and labels are not part of
/// the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A color in the hue/saturation/value cylindrical model.
///
/// Hue is in degrees [0, 360]; saturation and value in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct HsvColor {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A color in the hue/lightness/saturation cylindrical model.
///
/// Hue is in degrees [0, 360]; lightness and saturation in [0, 1].
/// All fuzzy-resolution blending happens in this space.
#[derive(Debug, Clone, PartialEq)]
pub struct HlsColor {
    pub h: f64,
    pub l: f64,
    pub s: f64,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A CMYK color on the conventional 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// Checks a unit-interval attribute, failing with `ColorError::Range`.
fn check_unit(what: &'static str, value: f64) -> Result<f64, ColorError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::Range {
            what,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

/// Checks a hue in degrees, failing with `ColorError::Range`.
fn check_hue(value: f64) -> Result<f64, ColorError> {
    if (0.0..=360.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::Range {
            what: "hue",
            value,
            min: 0.0,
            max: 360.0,
        })
    }
}

impl RgbColor {
    /// Creates an opaque, unnamed RGB color.
    pub fn new(r: u8, g: u8, b: u8) -> RgbColor {
        RgbColor {
            r,
            g,
            b,
            a: 255,
            name: None,
            description: None,
        }
    }

    /// Returns a copy with the given name.
    pub fn with_name(mut self, name: impl Into<String>) -> RgbColor {
        self.name = Some(name.into());
        self
    }

    /// Returns a copy with the given description.
    pub fn with_description(mut self, description: impl Into<String>) -> RgbColor {
        self.description = Some(description.into());
        self
    }

    /// Parses a hex color string like `"#FF007F"` or `"ff007f"`.
    ///
    /// The leading `#` is optional and parsing is case-insensitive.
    /// Returns `ColorError::InvalidHex` for anything but 6 hex digits.
    pub fn from_hex(hex: &str) -> Result<RgbColor, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::InvalidHex(hex.to_string()))
        };
        Ok(RgbColor::new(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
        ))
    }

    /// Serializes the channels as an uppercase 6-digit hex string `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts to HSV, carrying name and description over.
    pub fn to_hsv(&self) -> HsvColor {
        let (r, g, b) = (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        );
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let s = if max == 0.0 { 0.0 } else { delta / max };
        HsvColor {
            h: hue_degrees(r, g, b, max, delta),
            s,
            v: max,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Converts to HLS, carrying name and description over.
    ///
    /// Saturation is clamped to 1.0 to absorb floating point overshoot at
    /// full-saturation hues.
    pub fn to_hls(&self) -> HlsColor {
        let (r, g, b) = (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        );
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            (delta / (1.0 - (2.0 * l - 1.0).abs())).min(1.0)
        };
        HlsColor {
            h: hue_degrees(r, g, b, max, delta),
            l,
            s,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Converts to CMYK on the 0–100 scale.
    ///
    /// Pure black maps to (0, 0, 0, 100) directly; the K extraction would
    /// otherwise divide by zero.
    pub fn to_cmyk(&self) -> Cmyk {
        if self.r == 0 && self.g == 0 && self.b == 0 {
            return Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 100.0,
            };
        }
        let c = 1.0 - f64::from(self.r) / 255.0;
        let m = 1.0 - f64::from(self.g) / 255.0;
        let y = 1.0 - f64::from(self.b) / 255.0;
        let k = c.min(m).min(y);
        Cmyk {
            c: (c - k) / (1.0 - k) * 100.0,
            m: (m - k) / (1.0 - k) * 100.0,
            y: (y - k) / (1.0 - k) * 100.0,
            k: k * 100.0,
        }
    }
}

impl Serialize for RgbColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        RgbColor::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Hue in fractional degrees from normalized RGB components.
fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let hue = if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    hue.rem_euclid(360.0)
}

/// Reconstructs 8-bit RGB from the shared cylindrical-model intermediates.
fn rgb_from_chroma(h: f64, c: f64, m: f64) -> (u8, u8, u8) {
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let scale = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (scale(r), scale(g), scale(b))
}

impl HsvColor {
    /// Creates an HSV color, validating each attribute against its domain.
    pub fn new(h: f64, s: f64, v: f64) -> Result<HsvColor, ColorError> {
        Ok(HsvColor {
            h: check_hue(h)?,
            s: check_unit("saturation", s)?,
            v: check_unit("value", v)?,
            name: None,
            description: None,
        })
    }

    /// Returns a copy with the given name.
    pub fn with_name(mut self, name: impl Into<String>) -> HsvColor {
        self.name = Some(name.into());
        self
    }

    /// Converts to RGB, rounding channels to the nearest integer.
    pub fn to_rgb(&self) -> RgbColor {
        let h = self.h % 360.0;
        let c = self.v * self.s;
        let (r, g, b) = rgb_from_chroma(h, c, self.v - c);
        RgbColor {
            r,
            g,
            b,
            a: 255,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Converts to HLS through the RGB pivot.
    pub fn to_hls(&self) -> HlsColor {
        self.to_rgb().to_hls()
    }
}

impl HlsColor {
    /// Creates an HLS color, validating each attribute against its domain.
    pub fn new(h: f64, l: f64, s: f64) -> Result<HlsColor, ColorError> {
        Ok(HlsColor {
            h: check_hue(h)?,
            l: check_unit("lightness", l)?,
            s: check_unit("saturation", s)?,
            name: None,
            description: None,
        })
    }

    /// Returns a copy with the given name.
    pub fn with_name(mut self, name: impl Into<String>) -> HlsColor {
        self.name = Some(name.into());
        self
    }

    /// Parses a hex string and converts the result to HLS.
    pub fn from_hex(hex: &str) -> Result<HlsColor, ColorError> {
        Ok(RgbColor::from_hex(hex)?.to_hls())
    }

    /// Converts to RGB, rounding channels to the nearest integer.
    pub fn to_rgb(&self) -> RgbColor {
        let h = self.h % 360.0;
        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let (r, g, b) = rgb_from_chroma(h, c, self.l - c / 2.0);
        RgbColor {
            r,
            g,
            b,
            a: 255,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Converts to HSV through the RGB pivot.
    pub fn to_hsv(&self) -> HsvColor {
        self.to_rgb().to_hsv()
    }
}

impl Cmyk {
    /// Converts back to RGB with the standard multiplicative formula.
    pub fn to_rgb(&self) -> RgbColor {
        let channel = |v: f64| {
            (255.0 * (1.0 - v / 100.0) * (1.0 - self.k / 100.0))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        RgbColor::new(channel(self.c), channel(self.m), channel(self.y))
    }
}

/// Uniform conversion interface over every color kind.
///
/// Spectral conversions can fail when a wavelength or hue lies outside the
/// reference palette, so all methods are fallible; the channel-based kinds
/// never fail `as_rgb`/`as_hsv`/`as_hls`.
pub trait ColorConvert {
    fn as_rgb(&self) -> Result<RgbColor, ColorError>;

    fn as_hsv(&self) -> Result<HsvColor, ColorError> {
        Ok(self.as_rgb()?.to_hsv())
    }

    fn as_hls(&self) -> Result<HlsColor, ColorError> {
        Ok(self.as_rgb()?.to_hls())
    }

    /// Projects onto the visible spectrum through a degenerate hue range,
    /// keeping the exact channel color as the hex approximation.
    ///
    /// Fails with `ColorError::HueOutsidePalette` for non-spectral hues
    /// (the magenta line has no wavelength).
    fn as_spectral(&self) -> Result<SpectralColor, ColorError> {
        let rgb = self.as_rgb()?;
        let hue = rgb.to_hsv().h.round() as u16;
        HueRange::new(hue, hue)?
            .with_hex(rgb.to_hex())
            .to_spectral()
    }
}

impl ColorConvert for RgbColor {
    fn as_rgb(&self) -> Result<RgbColor, ColorError> {
        Ok(self.clone())
    }
}

impl ColorConvert for HsvColor {
    fn as_rgb(&self) -> Result<RgbColor, ColorError> {
        Ok(self.to_rgb())
    }
}

impl ColorConvert for HlsColor {
    fn as_rgb(&self) -> Result<RgbColor, ColorError> {
        Ok(self.to_rgb())
    }
}

/// A color in any supported representation.
///
/// Closed sum type: conversion dispatch is a single pattern match, not a
/// runtime type check.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb(RgbColor),
    Hsv(HsvColor),
    Hls(HlsColor),
    Spectral(SpectralColor),
    Term(ColorTerm),
}

impl ColorConvert for Color {
    fn as_rgb(&self) -> Result<RgbColor, ColorError> {
        match self {
            Color::Rgb(c) => c.as_rgb(),
            Color::Hsv(c) => c.as_rgb(),
            Color::Hls(c) => c.as_rgb(),
            Color::Spectral(c) => c.as_rgb(),
            Color::Term(c) => c.as_rgb(),
        }
    }

    fn as_spectral(&self) -> Result<SpectralColor, ColorError> {
        match self {
            Color::Rgb(c) => c.as_spectral(),
            Color::Hsv(c) => c.as_spectral(),
            Color::Hls(c) => c.as_spectral(),
            Color::Spectral(c) => c.as_spectral(),
            Color::Term(c) => c.as_spectral(),
        }
    }
}

impl From<RgbColor> for Color {
    fn from(c: RgbColor) -> Color {
        Color::Rgb(c)
    }
}

impl From<HsvColor> for Color {
    fn from(c: HsvColor) -> Color {
        Color::Hsv(c)
    }
}

impl From<HlsColor> for Color {
    fn from(c: HlsColor) -> Color {
        Color::Hls(c)
    }
}

impl From<SpectralColor> for Color {
    fn from(c: SpectralColor) -> Color {
        Color::Spectral(c)
    }
}

impl From<ColorTerm> for Color {
    fn from(c: ColorTerm) -> Color {
        Color::Term(c)
    }
}

/// Weighted average of HLS colors with a circular mean for hue.
///
/// Lightness and saturation use the weight-normalized arithmetic mean. Hue
/// accumulates weighted sine/cosine sums and recovers the angle with
/// `atan2`, so averaging across the 0/360 wrap boundary behaves (350 and 10
/// average to 0, not 180). With no weights, or a weight sum of zero, every
/// color counts equally.
pub fn average_colors(colors: &[HlsColor], weights: Option<&[f64]>) -> Option<HlsColor> {
    if colors.is_empty() {
        return None;
    }
    let uniform = vec![1.0 / colors.len() as f64; colors.len()];
    let mut weights: &[f64] = match weights {
        Some(w) if w.len() == colors.len() => w,
        _ => &uniform,
    };
    let mut total: f64 = weights.iter().sum();
    if total <= f64::EPSILON {
        weights = &uniform;
        total = 1.0;
    }

    let mut l = 0.0;
    let mut s = 0.0;
    let mut sin_sum = 0.0;
    let mut cos_sum = 0.0;
    for (c, w) in colors.iter().zip(weights) {
        l += c.l * w;
        s += c.s * w;
        let rad = c.h.to_radians();
        sin_sum += rad.sin() * w;
        cos_sum += rad.cos() * w;
    }
    let h = sin_sum.atan2(cos_sum).to_degrees().rem_euclid(360.0);

    Some(HlsColor {
        h,
        l: l / total,
        s: s / total,
        name: None,
        description: Some(format!("weighted average of {} colors", colors.len())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Constructor validation --

    #[test]
    fn hsv_rejects_hue_outside_domain() {
        assert!(HsvColor::new(360.5, 0.5, 0.5).is_err());
        assert!(HsvColor::new(-0.1, 0.5, 0.5).is_err());
    }

    #[test]
    fn hsv_accepts_hue_exactly_360() {
        assert!(HsvColor::new(360.0, 0.5, 0.5).is_ok());
    }

    #[test]
    fn hsv_rejects_saturation_above_one() {
        assert!(HsvColor::new(100.0, 1.1, 0.5).is_err());
    }

    #[test]
    fn hsv_rejects_negative_value() {
        assert!(HsvColor::new(100.0, 0.5, -0.1).is_err());
    }

    #[test]
    fn hls_rejects_lightness_above_one() {
        assert!(HlsColor::new(100.0, 1.5, 0.5).is_err());
    }

    #[test]
    fn hls_accepts_boundary_values() {
        assert!(HlsColor::new(0.0, 0.0, 0.0).is_ok());
        assert!(HlsColor::new(360.0, 1.0, 1.0).is_ok());
    }

    // -- Hex parsing and serialization --

    #[test]
    fn from_hex_parses_with_and_without_marker() {
        let a = RgbColor::from_hex("#FF007F").unwrap();
        let b = RgbColor::from_hex("FF007F").unwrap();
        assert_eq!(a, b);
        assert_eq!((a.r, a.g, a.b), (255, 0, 127));
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        assert_eq!(
            RgbColor::from_hex("#ff007f").unwrap(),
            RgbColor::from_hex("#FF007F").unwrap()
        );
    }

    #[test]
    fn to_hex_is_uppercase() {
        assert_eq!(RgbColor::new(255, 0, 127).to_hex(), "#FF007F");
    }

    #[test]
    fn hex_round_trips() {
        let c = RgbColor::new(18, 52, 86);
        assert_eq!(RgbColor::from_hex(&c.to_hex()).unwrap(), c);
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        assert!(RgbColor::from_hex("#fff").is_err());
        assert!(RgbColor::from_hex("#gggggg").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#ff00ff00").is_err());
    }

    // -- Equality and hashing --

    #[test]
    fn equality_is_component_wise() {
        // Digit-concatenation hashes would collide on (1,23,4) vs (12,3,4).
        let a = RgbColor::new(1, 23, 4);
        let b = RgbColor::new(12, 3, 4);
        assert_ne!(a, b);

        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let hash = |c: &RgbColor| {
            let mut h = DefaultHasher::new();
            c.hash(&mut h);
            h.finish()
        };
        assert_ne!(hash(&a), hash(&b));
    }

    // -- Cylindrical conversions --

    #[test]
    fn rose_converts_to_expected_hls() {
        let rose = RgbColor::from_hex("#FF007F").unwrap();
        let hls = rose.to_hls();
        assert!((hls.h - 330.0).abs() < 0.5, "h = {}", hls.h);
        assert!((hls.l - 0.5).abs() < 0.01, "l = {}", hls.l);
        assert!((hls.s - 1.0).abs() < 0.01, "s = {}", hls.s);
    }

    #[test]
    fn primary_hues_map_correctly() {
        assert!((RgbColor::new(255, 0, 0).to_hsv().h - 0.0).abs() < 1e-9);
        assert!((RgbColor::new(0, 255, 0).to_hsv().h - 120.0).abs() < 1e-9);
        assert!((RgbColor::new(0, 0, 255).to_hsv().h - 240.0).abs() < 1e-9);
    }

    #[test]
    fn fractional_hues_round_trip_exactly() {
        // Hue 217.38 rounds to 217 in whole degrees, which shifts green by
        // two units on the way back; fractional hue must reconstruct the
        // original channels.
        let c = RgbColor::new(0, 95, 252);
        let via_hsv = c.to_hsv().to_rgb();
        assert_eq!((via_hsv.r, via_hsv.g, via_hsv.b), (0, 95, 252));
        let via_hls = c.to_hls().to_rgb();
        assert_eq!((via_hls.r, via_hls.g, via_hls.b), (0, 95, 252));
    }

    #[test]
    fn grayscale_has_zero_saturation() {
        let gray = RgbColor::new(128, 128, 128);
        assert_eq!(gray.to_hsv().s, 0.0);
        assert_eq!(gray.to_hls().s, 0.0);
    }

    #[test]
    fn hsv_round_trip_known_colors() {
        for hex in ["#FF0000", "#00FF00", "#0000FF", "#FF007F", "#123456"] {
            let c = RgbColor::from_hex(hex).unwrap();
            let back = c.to_hsv().to_rgb();
            assert!(i32::from(c.r).abs_diff(i32::from(back.r)) <= 1, "{hex} r");
            assert!(i32::from(c.g).abs_diff(i32::from(back.g)) <= 1, "{hex} g");
            assert!(i32::from(c.b).abs_diff(i32::from(back.b)) <= 1, "{hex} b");
        }
    }

    #[test]
    fn conversions_carry_labels() {
        let c = RgbColor::new(255, 0, 127)
            .with_name("rose")
            .with_description("a rose");
        let hls = c.to_hls();
        assert_eq!(hls.name.as_deref(), Some("rose"));
        assert_eq!(hls.description.as_deref(), Some("a rose"));
        let back = hls.to_rgb();
        assert_eq!(back.name.as_deref(), Some("rose"));
    }

    // -- CMYK --

    #[test]
    fn pure_black_maps_to_full_k() {
        let cmyk = RgbColor::new(0, 0, 0).to_cmyk();
        assert_eq!((cmyk.c, cmyk.m, cmyk.y, cmyk.k), (0.0, 0.0, 0.0, 100.0));
    }

    #[test]
    fn pure_red_has_no_cyan() {
        let cmyk = RgbColor::new(255, 0, 0).to_cmyk();
        assert!(cmyk.c.abs() < 1e-9);
        assert!((cmyk.m - 100.0).abs() < 1e-9);
        assert!((cmyk.y - 100.0).abs() < 1e-9);
        assert!(cmyk.k.abs() < 1e-9);
    }

    #[test]
    fn cmyk_round_trips_within_rounding() {
        for hex in ["#FF0000", "#804020", "#00FFFF", "#123456"] {
            let c = RgbColor::from_hex(hex).unwrap();
            let back = c.to_cmyk().to_rgb();
            assert!(i32::from(c.r).abs_diff(i32::from(back.r)) <= 1, "{hex} r");
            assert!(i32::from(c.g).abs_diff(i32::from(back.g)) <= 1, "{hex} g");
            assert!(i32::from(c.b).abs_diff(i32::from(back.b)) <= 1, "{hex} b");
        }
    }

    // -- Averaging --

    #[test]
    fn circular_mean_handles_wrap_boundary() {
        let a = HlsColor::new(350.0, 0.5, 0.5).unwrap();
        let b = HlsColor::new(10.0, 0.5, 0.5).unwrap();
        let avg = average_colors(&[a, b], None).unwrap();
        let dist = avg.h.min(360.0 - avg.h);
        assert!(dist < 0.5, "expected hue near 0, got {}", avg.h);
    }

    #[test]
    fn plain_mean_for_non_wrapping_hues() {
        let a = HlsColor::new(90.0, 0.2, 0.4).unwrap();
        let b = HlsColor::new(110.0, 0.4, 0.8).unwrap();
        let avg = average_colors(&[a, b], None).unwrap();
        assert!((avg.h - 100.0).abs() < 1e-9, "h = {}", avg.h);
        assert!((avg.l - 0.3).abs() < 1e-9);
        assert!((avg.s - 0.6).abs() < 1e-9);
    }

    #[test]
    fn weights_bias_the_average() {
        let a = HlsColor::new(100.0, 0.0, 0.0).unwrap();
        let b = HlsColor::new(100.0, 1.0, 1.0).unwrap();
        let avg = average_colors(&[a, b], Some(&[3.0, 1.0])).unwrap();
        assert!((avg.l - 0.25).abs() < 1e-9, "l = {}", avg.l);
        assert!((avg.s - 0.25).abs() < 1e-9, "s = {}", avg.s);
    }

    #[test]
    fn zero_weights_fall_back_to_uniform() {
        let a = HlsColor::new(100.0, 0.0, 0.0).unwrap();
        let b = HlsColor::new(100.0, 1.0, 1.0).unwrap();
        let avg = average_colors(&[a, b], Some(&[0.0, 0.0])).unwrap();
        assert!((avg.l - 0.5).abs() < 1e-9);
    }

    #[test]
    fn averaging_nothing_yields_none() {
        assert!(average_colors(&[], None).is_none());
    }

    // -- Serde --

    #[test]
    fn rgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&RgbColor::new(255, 0, 127)).unwrap();
        assert_eq!(json, "\"#FF007F\"");
    }

    #[test]
    fn rgb_deserializes_from_hex_string() {
        let c: RgbColor = serde_json::from_str("\"#ff007f\"").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 0, 127));
    }

    #[test]
    fn rgb_deserialize_rejects_invalid_hex() {
        let result: Result<RgbColor, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hsv_round_trip_within_one_unit(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
                let c = RgbColor::new(r, g, b);
                let back = c.to_hsv().to_rgb();
                prop_assert!(i32::from(c.r).abs_diff(i32::from(back.r)) <= 1);
                prop_assert!(i32::from(c.g).abs_diff(i32::from(back.g)) <= 1);
                prop_assert!(i32::from(c.b).abs_diff(i32::from(back.b)) <= 1);
            }

            #[test]
            fn hls_round_trip_within_one_unit(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
                let c = RgbColor::new(r, g, b);
                let back = c.to_hls().to_rgb();
                prop_assert!(i32::from(c.r).abs_diff(i32::from(back.r)) <= 1);
                prop_assert!(i32::from(c.g).abs_diff(i32::from(back.g)) <= 1);
                prop_assert!(i32::from(c.b).abs_diff(i32::from(back.b)) <= 1);
            }

            #[test]
            fn hex_round_trip_is_exact(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
                let c = RgbColor::new(r, g, b);
                prop_assert_eq!(RgbColor::from_hex(&c.to_hex()).unwrap(), c);
            }

            #[test]
            fn converted_attributes_stay_in_domain(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
                let c = RgbColor::new(r, g, b);
                let hsv = c.to_hsv();
                prop_assert!((0.0..360.0).contains(&hsv.h));
                prop_assert!((0.0..=1.0).contains(&hsv.s));
                prop_assert!((0.0..=1.0).contains(&hsv.v));
                let hls = c.to_hls();
                prop_assert!((0.0..360.0).contains(&hls.h));
                prop_assert!((0.0..=1.0).contains(&hls.l));
                prop_assert!((0.0..=1.0).contains(&hls.s));
            }

            #[test]
            fn average_hue_stays_in_range(
                h1 in 0.0f64..360.0, h2 in 0.0f64..360.0,
                w1 in 0.0f64..10.0, w2 in 0.0f64..10.0,
            ) {
                let a = HlsColor::new(h1, 0.5, 0.5).unwrap();
                let b = HlsColor::new(h2, 0.5, 0.5).unwrap();
                let avg = average_colors(&[a, b], Some(&[w1, w2])).unwrap();
                prop_assert!(avg.h < 360.0, "hue {} out of range", avg.h);
            }
        }
    }
}
