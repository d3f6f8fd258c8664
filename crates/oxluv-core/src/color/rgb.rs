//! sRGB color values
//!
//! [`Rgb`] holds gamma-encoded channels. Linear-light values are plain
//! `[f64; 3]` arrays so the two cannot be confused.

use bytemuck::{Pod, Zeroable};

use crate::math::gamma::{srgb_gamma_decode, srgb_gamma_encode, wcag_channel_luminance};

/// Gamma-encoded sRGB color (0.0-1.0 range)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Rgb {
    /// Red component (0.0 to 1.0)
    pub r: f64,
    /// Green component (0.0 to 1.0)
    pub g: f64,
    /// Blue component (0.0 to 1.0)
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from 8-bit values (0-255)
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Convert to 8-bit values, rounding and clamping to 0-255
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Decode to linear light
    #[inline]
    pub fn to_linear(&self) -> [f64; 3] {
        [
            srgb_gamma_decode(self.r),
            srgb_gamma_decode(self.g),
            srgb_gamma_decode(self.b),
        ]
    }

    /// Encode from linear light
    #[inline]
    pub fn from_linear(linear: [f64; 3]) -> Self {
        Self {
            r: srgb_gamma_encode(linear[0]),
            g: srgb_gamma_encode(linear[1]),
            b: srgb_gamma_encode(linear[2]),
        }
    }

    /// Clamp all components to [0, 1]
    #[inline]
    pub fn clamp(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Check if all components are in [0, 1]
    #[inline]
    pub fn is_in_gamut(&self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// WCAG 2.x relative luminance
    ///
    /// Linearizes with the WCAG threshold (0.03928), not the colorimetric
    /// one used for XYZ.
    #[inline]
    pub fn relative_luminance(&self) -> f64 {
        0.2126 * wcag_channel_luminance(self.r)
            + 0.7152 * wcag_channel_luminance(self.g)
            + 0.0722 * wcag_channel_luminance(self.b)
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    /// Black color
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White color
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_u8(arr[0], arr[1], arr[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_u8_conversion() {
        let rgb = Rgb::from_u8(255, 128, 0);
        assert!((rgb.r - 1.0).abs() < EPSILON);
        assert!((rgb.g - 128.0 / 255.0).abs() < EPSILON);
        assert_eq!(rgb.to_u8(), [255, 128, 0]);
    }

    #[test]
    fn test_linear_roundtrip() {
        let rgb = Rgb::new(0.2, 0.5, 0.9);
        let back = Rgb::from_linear(rgb.to_linear());
        assert!(rgb.approx_eq(&back, 1e-12));
    }

    #[test]
    fn test_in_gamut() {
        assert!(Rgb::WHITE.is_in_gamut());
        assert!(Rgb::BLACK.is_in_gamut());
        assert!(!Rgb::new(1.5, 0.0, 0.0).is_in_gamut());
        assert!(Rgb::new(0.0, -0.1, 0.0).clamp().is_in_gamut());
    }

    #[test]
    fn test_relative_luminance() {
        assert_eq!(Rgb::BLACK.relative_luminance(), 0.0);
        assert!((Rgb::WHITE.relative_luminance() - 1.0).abs() < EPSILON);
        assert!((Rgb::from_u8(255, 0, 0).relative_luminance() - 0.2126).abs() < EPSILON);
    }

    #[test]
    fn test_pod_cast() {
        let colors = [Rgb::new(0.1, 0.2, 0.3), Rgb::new(0.4, 0.5, 0.6)];
        let flat: &[f64] = bytemuck::cast_slice(&colors);
        assert_eq!(flat, &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
    }
}
