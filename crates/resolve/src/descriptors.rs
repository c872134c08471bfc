//! Descriptor-driven attribute adjustment.
//!
//! Four independent keyword axes (saturation, brightness, opacity,
//! temperature), each with four severity tiers. Per axis, tiers are tested
//! very-high → high → low → very-low and only the first tier with a
//! keyword occurring in the description applies. Saturation and brightness
//! deltas are additive, opacity is multiplicative, and temperature tints
//! the RGB channels after the cylindrical adjustments are done.

use colorspeak_core::{HlsColor, RgbColor};
use serde::{Deserialize, Serialize};

/// Severity-tiered keyword lists for the four descriptor axes, loaded from
/// a language's `color_descriptors.json`.
///
/// Absent buckets deserialize to empty lists, which simply never fire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptorBuckets {
    pub very_high_saturation: Vec<String>,
    pub high_saturation: Vec<String>,
    pub low_saturation: Vec<String>,
    pub very_low_saturation: Vec<String>,

    pub very_high_brightness: Vec<String>,
    pub high_brightness: Vec<String>,
    pub low_brightness: Vec<String>,
    pub very_low_brightness: Vec<String>,

    pub very_high_opacity: Vec<String>,
    pub high_opacity: Vec<String>,
    pub low_opacity: Vec<String>,
    pub very_low_opacity: Vec<String>,

    pub very_high_temperature: Vec<String>,
    pub high_temperature: Vec<String>,
    pub low_temperature: Vec<String>,
    pub very_low_temperature: Vec<String>,
}

/// The tier an axis resolved to for a given description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    VeryHigh,
    High,
    Low,
    VeryLow,
}

fn bucket_hit(bucket: &[String], description: &str) -> bool {
    bucket
        .iter()
        .any(|word| description.contains(word.to_lowercase().as_str()))
}

/// First matching tier for one axis, in severity order.
fn first_tier(tiers: [&[String]; 4], description: &str) -> Option<Tier> {
    let order = [Tier::VeryHigh, Tier::High, Tier::Low, Tier::VeryLow];
    tiers
        .iter()
        .zip(order)
        .find(|(bucket, _)| bucket_hit(bucket, description))
        .map(|(_, tier)| tier)
}

impl DescriptorBuckets {
    /// Applies every descriptor in `description` to `color`, returning the
    /// adjusted color in RGB.
    ///
    /// `description` is expected to be lowercased already (the pipeline
    /// normalizes it first). Saturation and lightness move by ±0.1/±0.2
    /// and clamp to [0, 1]; opacity scales by 1.5/1.2/0.7/0.5 on a
    /// normalized alpha clamped to [0, 1]; warm tiers then push red up and
    /// blue down (cool tiers the opposite) in channel units, saturating at
    /// the channel bounds.
    pub fn adjust(&self, color: &HlsColor, description: &str) -> RgbColor {
        let mut adjusted = color.clone();

        if let Some(tier) = first_tier(
            [
                &self.very_high_saturation,
                &self.high_saturation,
                &self.low_saturation,
                &self.very_low_saturation,
            ],
            description,
        ) {
            let delta = match tier {
                Tier::VeryHigh => 0.2,
                Tier::High => 0.1,
                Tier::Low => -0.1,
                Tier::VeryLow => -0.2,
            };
            adjusted.s = (adjusted.s + delta).clamp(0.0, 1.0);
        }

        if let Some(tier) = first_tier(
            [
                &self.very_high_brightness,
                &self.high_brightness,
                &self.low_brightness,
                &self.very_low_brightness,
            ],
            description,
        ) {
            let delta = match tier {
                Tier::VeryHigh => 0.2,
                Tier::High => 0.1,
                Tier::Low => -0.1,
                Tier::VeryLow => -0.2,
            };
            adjusted.l = (adjusted.l + delta).clamp(0.0, 1.0);
        }

        let mut alpha = 1.0_f64;
        if let Some(tier) = first_tier(
            [
                &self.very_high_opacity,
                &self.high_opacity,
                &self.low_opacity,
                &self.very_low_opacity,
            ],
            description,
        ) {
            let factor = match tier {
                Tier::VeryHigh => 1.5,
                Tier::High => 1.2,
                Tier::Low => 0.7,
                Tier::VeryLow => 0.5,
            };
            alpha = (alpha * factor).clamp(0.0, 1.0);
        }

        let mut rgb = adjusted.to_rgb();
        if let Some(tier) = first_tier(
            [
                &self.very_high_temperature,
                &self.high_temperature,
                &self.low_temperature,
                &self.very_low_temperature,
            ],
            description,
        ) {
            match tier {
                Tier::VeryHigh => {
                    rgb.r = rgb.r.saturating_add(25);
                    rgb.b = rgb.b.saturating_sub(12);
                }
                Tier::High => rgb.r = rgb.r.saturating_add(12),
                Tier::Low => rgb.b = rgb.b.saturating_add(12),
                Tier::VeryLow => rgb.b = rgb.b.saturating_add(25),
            }
        }
        rgb.a = (alpha * 255.0).round() as u8;
        rgb
    }
}
