//! Perceptual color difference.
//!
//! The resolution pipeline only needs a scalar "how different do these two
//! colors look" oracle, expressed as the `ColorDistance` trait. The
//! built-in implementation converts sRGB to CIELAB (D65) and applies the
//! CIEDE2000 formula (CIE Technical Report 142-2001).

#![allow(clippy::excessive_precision)]

use crate::color::RgbColor;
use std::f64::consts::PI;

/// CIELAB coordinates (L in 0-100, a/b roughly -128..128).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Scalar perceptual distance between two colors.
///
/// Implementations must be nonnegative, symmetric, and zero iff the
/// channel triples are equal; larger means more perceptually different.
pub trait ColorDistance {
    fn distance(&self, a: &RgbColor, b: &RgbColor) -> f64;
}

/// The CIEDE2000 ΔE00 metric, the default distance oracle.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeltaE2000;

impl ColorDistance for DeltaE2000 {
    fn distance(&self, a: &RgbColor, b: &RgbColor) -> f64 {
        ciede2000(rgb_to_lab(a), rgb_to_lab(b))
    }
}

/// Returns the candidate perceptually closest to `color`.
///
/// Ties keep the earliest candidate (strict-less comparison). Empty
/// candidate lists yield `None`.
pub fn nearest<'a, D: ColorDistance>(
    color: &RgbColor,
    candidates: &'a [RgbColor],
    oracle: &D,
) -> Option<&'a RgbColor> {
    let mut best: Option<(&RgbColor, f64)> = None;
    for candidate in candidates {
        let d = oracle.distance(color, candidate);
        if best.is_none() || d < best.as_ref().map_or(f64::INFINITY, |(_, bd)| *bd) {
            best = Some((candidate, d));
        }
    }
    best.map(|(c, _)| c)
}

// D65 reference white.
const D65_XN: f64 = 0.95047;
const D65_YN: f64 = 1.00000;
const D65_ZN: f64 = 1.08883;

/// Converts 8-bit sRGB to CIELAB under the D65 illuminant.
pub fn rgb_to_lab(rgb: &RgbColor) -> Lab {
    let r = srgb_to_linear(f64::from(rgb.r) / 255.0);
    let g = srgb_to_linear(f64::from(rgb.g) / 255.0);
    let b = srgb_to_linear(f64::from(rgb.b) / 255.0);

    let x = r * 0.4124564 + g * 0.3575761 + b * 0.1804375;
    let y = r * 0.2126729 + g * 0.7151522 + b * 0.0721750;
    let z = r * 0.0193339 + g * 0.1191920 + b * 0.9503041;

    let fx = lab_f(x / D65_XN);
    let fy = lab_f(y / D65_YN);
    let fz = lab_f(z / D65_ZN);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    const DELTA_CUBE: f64 = DELTA * DELTA * DELTA;
    if t > DELTA_CUBE {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// CIEDE2000 color difference with all correction terms (lightness,
/// chroma, hue, blue-region rotation).
pub fn ciede2000(lab1: Lab, lab2: Lab) -> f64 {
    const POW25_7: f64 = 6103515625.0; // 25^7

    let c1_ab = lab1.a.hypot(lab1.b);
    let c2_ab = lab2.a.hypot(lab2.b);
    let c_ab_mean = (c1_ab + c2_ab) / 2.0;

    let c_ab_mean_pow7 = c_ab_mean.powi(7);
    let g = 0.5 * (1.0 - (c_ab_mean_pow7 / (c_ab_mean_pow7 + POW25_7)).sqrt());

    let a1_prime = lab1.a * (1.0 + g);
    let a2_prime = lab2.a * (1.0 + g);

    let c1_prime = a1_prime.hypot(lab1.b);
    let c2_prime = a2_prime.hypot(lab2.b);

    let h1_prime = hue_angle(a1_prime, lab1.b);
    let h2_prime = hue_angle(a2_prime, lab2.b);

    let delta_l_prime = lab2.l - lab1.l;
    let delta_c_prime = c2_prime - c1_prime;

    let delta_h_prime = if c1_prime * c2_prime == 0.0 {
        0.0
    } else {
        let delta_h = h2_prime - h1_prime;
        if delta_h.abs() <= 180.0 {
            delta_h
        } else if delta_h > 180.0 {
            delta_h - 360.0
        } else {
            delta_h + 360.0
        }
    };
    let delta_big_h_prime =
        2.0 * (c1_prime * c2_prime).sqrt() * (delta_h_prime * PI / 360.0).sin();

    let l_prime_mean = (lab1.l + lab2.l) / 2.0;
    let c_prime_mean = (c1_prime + c2_prime) / 2.0;

    let h_prime_mean = if c1_prime * c2_prime == 0.0 {
        h1_prime + h2_prime
    } else if (h1_prime - h2_prime).abs() <= 180.0 {
        (h1_prime + h2_prime) / 2.0
    } else if h1_prime + h2_prime < 360.0 {
        (h1_prime + h2_prime + 360.0) / 2.0
    } else {
        (h1_prime + h2_prime - 360.0) / 2.0
    };

    let h_mean_rad = h_prime_mean * PI / 180.0;
    let t = 1.0 - 0.17 * (h_mean_rad - PI / 6.0).cos()
        + 0.24 * (2.0 * h_mean_rad).cos()
        + 0.32 * (3.0 * h_mean_rad + PI / 30.0).cos()
        - 0.20 * (4.0 * h_mean_rad - 63.0 * PI / 180.0).cos();

    let l_minus_50_sq = (l_prime_mean - 50.0).powi(2);
    let sl = 1.0 + (0.015 * l_minus_50_sq) / (20.0 + l_minus_50_sq).sqrt();
    let sc = 1.0 + 0.045 * c_prime_mean;
    let sh = 1.0 + 0.015 * c_prime_mean * t;

    let delta_theta = 30.0 * (-((h_prime_mean - 275.0) / 25.0).powi(2)).exp();
    let c_mean_pow7 = c_prime_mean.powi(7);
    let rc = 2.0 * (c_mean_pow7 / (c_mean_pow7 + POW25_7)).sqrt();
    let rt = -(2.0 * delta_theta * PI / 180.0).sin() * rc;

    let term_l = delta_l_prime / sl;
    let term_c = delta_c_prime / sc;
    let term_h = delta_big_h_prime / sh;

    (term_l * term_l + term_c * term_c + term_h * term_h + rt * term_c * term_h).sqrt()
}

/// Hue angle in degrees [0, 360), with the achromatic case pinned to 0.
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        0.0
    } else {
        b.atan2(a).to_degrees().rem_euclid(360.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_colors_have_zero_distance() {
        let c = RgbColor::new(120, 80, 200);
        assert!(DeltaE2000.distance(&c, &c).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = RgbColor::new(255, 0, 0);
        let b = RgbColor::new(0, 0, 255);
        let d1 = DeltaE2000.distance(&a, &b);
        let d2 = DeltaE2000.distance(&b, &a);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn black_and_white_are_very_different() {
        let d = DeltaE2000.distance(&RgbColor::new(0, 0, 0), &RgbColor::new(255, 255, 255));
        assert!(d > 50.0, "ΔE = {d}");
    }

    #[test]
    fn near_identical_grays_are_barely_different() {
        let d = DeltaE2000.distance(&RgbColor::new(128, 128, 128), &RgbColor::new(129, 129, 129));
        assert!(d < 1.0, "ΔE = {d}");
    }

    #[test]
    fn ciede2000_matches_cie_reference_pair() {
        // Sharma et al. test pair 1: ΔE00 = 2.0425.
        let lab1 = Lab {
            l: 50.0,
            a: 2.6772,
            b: -79.7751,
        };
        let lab2 = Lab {
            l: 50.0,
            a: 0.0,
            b: -82.7485,
        };
        let de = ciede2000(lab1, lab2);
        assert!((de - 2.0425).abs() < 0.001, "ΔE = {de}");
    }

    #[test]
    fn white_has_lab_l_near_100() {
        let lab = rgb_to_lab(&RgbColor::new(255, 255, 255));
        assert!((lab.l - 100.0).abs() < 0.01, "L = {}", lab.l);
        assert!(lab.a.abs() < 0.01);
        assert!(lab.b.abs() < 0.01);
    }

    // -- nearest --

    #[test]
    fn nearest_picks_the_perceptually_closest() {
        let target = RgbColor::new(250, 5, 5);
        let candidates = [
            RgbColor::new(0, 0, 255),
            RgbColor::new(255, 0, 0),
            RgbColor::new(0, 255, 0),
        ];
        let found = nearest(&target, &candidates, &DeltaE2000).unwrap();
        assert_eq!(found, &candidates[1]);
    }

    #[test]
    fn nearest_breaks_ties_by_input_order() {
        let target = RgbColor::new(100, 100, 100);
        let twin = RgbColor::new(110, 110, 110);
        let candidates = [twin.clone().with_name("first"), twin.with_name("second")];
        let found = nearest(&target, &candidates, &DeltaE2000).unwrap();
        assert_eq!(found.name.as_deref(), Some("first"));
    }

    #[test]
    fn nearest_of_empty_slice_is_none() {
        assert!(nearest(&RgbColor::new(0, 0, 0), &[], &DeltaE2000).is_none());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn distance_is_nonnegative_and_symmetric(
                r1 in 0u8..=255, g1 in 0u8..=255, b1 in 0u8..=255,
                r2 in 0u8..=255, g2 in 0u8..=255, b2 in 0u8..=255,
            ) {
                let a = RgbColor::new(r1, g1, b1);
                let b = RgbColor::new(r2, g2, b2);
                let d = DeltaE2000.distance(&a, &b);
                prop_assert!(d >= 0.0);
                prop_assert!((d - DeltaE2000.distance(&b, &a)).abs() < 1e-9);
            }
        }
    }
}
