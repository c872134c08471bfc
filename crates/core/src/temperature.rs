//! Black-body color temperature to RGB.
//!
//! Piecewise channel formulas after Tanner Helland's curve fit of the
//! black-body locus (<https://tannerhelland.com/2012/09/18/convert-temperature-rgb-algorithm-code.html>).

use crate::color::RgbColor;
use crate::error::ColorError;

/// Converts a color temperature in Kelvin to an RGB color.
///
/// The supported domain is [1000, 40000] Kelvin; anything outside fails
/// with `ColorError::KelvinOutOfRange`. Each channel is evaluated by its
/// own piecewise formula over hundreds-of-Kelvin units (red constant below
/// the 66 split, green log/power-law around it, blue zero below 19 and
/// saturated above 66) and clamped into [0, 255]. The result carries a
/// `"{kelvin}K"` description.
pub fn rgb_from_kelvin(kelvin: u32) -> Result<RgbColor, ColorError> {
    if !(1000..=40000).contains(&kelvin) {
        return Err(ColorError::KelvinOutOfRange(kelvin));
    }
    let t = f64::from(kelvin) / 100.0;

    let red = if t <= 66.0 {
        255.0
    } else {
        329.698727446 * (t - 60.0).powf(-0.1332047592)
    };

    let green = if t <= 66.0 {
        99.4708025861 * t.ln() - 161.1195681661
    } else {
        288.1221695283 * (t - 60.0).powf(-0.0755148492)
    };

    let blue = if t >= 66.0 {
        255.0
    } else if t <= 19.0 {
        0.0
    } else {
        138.5177312231 * (t - 10.0).ln() - 305.0447927307
    };

    let clamp = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    Ok(RgbColor::new(clamp(red), clamp(green), clamp(blue))
        .with_description(format!("{kelvin}K")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kelvin_below_1000_fails() {
        assert!(matches!(
            rgb_from_kelvin(999),
            Err(ColorError::KelvinOutOfRange(999))
        ));
    }

    #[test]
    fn kelvin_above_40000_fails() {
        assert!(matches!(
            rgb_from_kelvin(40001),
            Err(ColorError::KelvinOutOfRange(40001))
        ));
    }

    #[test]
    fn domain_boundaries_are_inclusive() {
        assert!(rgb_from_kelvin(1000).is_ok());
        assert!(rgb_from_kelvin(40000).is_ok());
    }

    #[test]
    fn neutral_white_near_6600k() {
        let c = rgb_from_kelvin(6600).unwrap();
        assert_eq!(c.r, 255);
        assert!(c.g >= 250, "g = {}", c.g);
        assert!(c.b >= 250, "b = {}", c.b);
    }

    #[test]
    fn candle_light_is_warm() {
        let c = rgb_from_kelvin(1900).unwrap();
        assert_eq!(c.r, 255);
        assert!(c.g < 200);
        assert_eq!(c.b, 0, "blue channel is zero at or below the 1900K split");
    }

    #[test]
    fn overcast_sky_is_cool() {
        let c = rgb_from_kelvin(10000).unwrap();
        assert_eq!(c.b, 255);
        assert!(c.r < 230, "r = {}", c.r);
    }

    #[test]
    fn description_names_the_temperature() {
        let c = rgb_from_kelvin(6600).unwrap();
        assert_eq!(c.description.as_deref(), Some("6600K"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn every_valid_kelvin_produces_a_color(k in 1000u32..=40000) {
                // Channels are u8, so range holds structurally; the formula
                // itself must not panic anywhere in the domain.
                let c = rgb_from_kelvin(k).unwrap();
                prop_assert!(c.description.is_some());
            }

            #[test]
            fn red_channel_never_increases_with_temperature(k in 1000u32..=39000) {
                let warm = rgb_from_kelvin(k).unwrap();
                let cool = rgb_from_kelvin(k + 1000).unwrap();
                prop_assert!(cool.r <= warm.r);
            }
        }
    }
}
