//! Classic HSL of gamma-encoded sRGB
//!
//! Kept alongside the perceptual spaces for callers that still speak CSS
//! `hsl()`. It is derived from RGB only and never drives a conversion.

use bytemuck::{Pod, Zeroable};

use crate::color::Rgb;

/// HSL coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Hsl {
    /// Hue in degrees, [0, 360)
    pub h: f64,
    /// Saturation, 0 to 100
    pub s: f64,
    /// Lightness, 0 to 100
    pub l: f64,
}

impl Hsl {
    /// Create new HSL coordinates
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Derive HSL from gamma-encoded RGB
    pub fn from_rgb(rgb: Rgb) -> Self {
        let Rgb { r, g, b } = rgb;
        let max = r.max(g).max(b);
        let chroma = max - r.min(g).min(b);

        let sector = if chroma == 0.0 {
            0.0
        } else if max == r {
            (g - b) / chroma
        } else if max == g {
            2.0 + (b - r) / chroma
        } else {
            4.0 + (r - g) / chroma
        };

        let h = 60.0 * sector;
        let lightness = 2.0 * max - chroma;
        let s = if chroma == 0.0 {
            0.0
        } else if max <= 0.5 {
            chroma / lightness
        } else {
            chroma / (2.0 - lightness)
        };

        Self {
            h: if h < 0.0 { h + 360.0 } else { h },
            s: 100.0 * s,
            l: 100.0 * lightness / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn hsl(r: u8, g: u8, b: u8) -> Hsl {
        Hsl::from_rgb(Rgb::from_u8(r, g, b))
    }

    #[test]
    fn test_primaries() {
        assert_eq!(hsl(255, 0, 0), Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(hsl(0, 255, 0), Hsl::new(120.0, 100.0, 50.0));
        assert_eq!(hsl(0, 0, 255), Hsl::new(240.0, 100.0, 50.0));
    }

    #[test]
    fn test_negative_sector_wraps() {
        // Magenta-ish red: max is r, g < b
        let c = hsl(255, 0, 128);
        assert!(c.h > 300.0 && c.h < 360.0);
    }

    #[test]
    fn test_grays_have_no_saturation() {
        for v in [0u8, 64, 128, 255] {
            let c = hsl(v, v, v);
            assert_eq!(c.s, 0.0);
            assert_eq!(c.h, 0.0);
            assert!((c.l - v as f64 / 255.0 * 100.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_light_branch() {
        // max > 0.5 uses the upper saturation formula
        let c = hsl(255, 128, 128);
        assert!((c.l - 75.09803921568627).abs() < 1e-9);
        assert!((c.s - 100.0).abs() < 1e-9);
    }
}
