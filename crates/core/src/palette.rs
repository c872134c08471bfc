//! Ordered palettes of same-kind colors with bulk conversion.

use crate::color::{ColorConvert, HlsColor, HsvColor, RgbColor};
use crate::error::ColorError;
use crate::spectral::{SpectralColor, SpectralPalette};

/// An ordered sequence of colors of one kind.
///
/// Bulk conversions run the per-color conversion over every entry and keep
/// the order; a failing entry fails the whole conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette<C> {
    pub colors: Vec<C>,
}

impl<C> Palette<C> {
    pub fn new(colors: Vec<C>) -> Palette<C> {
        Palette { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.colors.iter()
    }
}

impl<C: ColorConvert> Palette<C> {
    /// Converts every color to RGB.
    pub fn to_rgb(&self) -> Result<Palette<RgbColor>, ColorError> {
        let colors: Result<Vec<_>, _> = self.colors.iter().map(ColorConvert::as_rgb).collect();
        Ok(Palette::new(colors?))
    }

    /// Converts every color to HSV.
    pub fn to_hsv(&self) -> Result<Palette<HsvColor>, ColorError> {
        let colors: Result<Vec<_>, _> = self.colors.iter().map(|c| c.as_hsv()).collect();
        Ok(Palette::new(colors?))
    }

    /// Converts every color to HLS.
    pub fn to_hls(&self) -> Result<Palette<HlsColor>, ColorError> {
        let colors: Result<Vec<_>, _> = self.colors.iter().map(|c| c.as_hls()).collect();
        Ok(Palette::new(colors?))
    }
}

impl From<SpectralPalette> for Palette<SpectralColor> {
    fn from(palette: SpectralPalette) -> Palette<SpectralColor> {
        Palette::new(palette.colors)
    }
}

impl<C> IntoIterator for Palette<C> {
    type Item = C;
    type IntoIter = std::vec::IntoIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}
