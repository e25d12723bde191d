use std::fmt;

use palette::{Hsv, IntoColor, Srgb};

use crate::bands::BandPowers;
use crate::translate::RangeMap;

/// A 16-bit light hue, where the full `u16` range spans one turn of the
/// color wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct LightHue(u16);

impl LightHue {
    /// Truncates toward zero. Values outside `0..=65535` saturate and NaN
    /// becomes 0.
    pub fn from_value(value: f64) -> Self {
        Self(value as u16)
    }

    pub fn from_band_powers(powers: &BandPowers, map: &RangeMap) -> Self {
        Self::from_value(map.apply(powers.total()))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn degrees(self) -> f32 {
        self.0 as f32 / u16::MAX as f32 * 360.0
    }

    /// Fully saturated preview color for this hue.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let hsv = Hsv::new(self.degrees(), 1.0, 1.0);
        let rgb: Srgb = hsv.into_color();

        (
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }
}

impl fmt::Display for LightHue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
