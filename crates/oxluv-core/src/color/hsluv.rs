//! HSLuv and HPLuv
//!
//! Both rescale LCh chroma to a percentage of what the sRGB gamut allows
//! at the same lightness:
//! - HSLuv divides by the reach along the color's own hue, so s = 100 is
//!   always exactly on the gamut boundary.
//! - HPLuv divides by the hue-independent inscribed radius, so p = 100 is
//!   the most saturated pastel valid for every hue; p exceeds 100 for
//!   saturated colors.
//!
//! Lightness above [`L_MAX`] or below [`L_MIN`] pins the color to white or
//! black with zero saturation.

use bytemuck::{Pod, Zeroable};

use crate::color::Lch;
use crate::gamut::GamutBoundary;

/// Lightness above which a color is treated as white
pub const L_MAX: f64 = 99.9999999;

/// Lightness below which a color is treated as black
pub const L_MIN: f64 = 0.00000001;

/// HSLuv coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Hsluv {
    /// Hue in degrees, [0, 360)
    pub h: f64,
    /// Saturation, 0 to 100
    pub s: f64,
    /// Lightness, 0 to 100
    pub l: f64,
}

/// HPLuv coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Hpluv {
    /// Hue in degrees, [0, 360)
    pub h: f64,
    /// Purity, 0 to 100 inside the inscribed circle
    pub p: f64,
    /// Lightness, 0 to 100
    pub l: f64,
}

/// Shared three-way branch of both projections
///
/// Returns (percentage, lightness) for the forward direction.
#[inline]
fn to_percent(lch: &Lch, max_chroma: impl FnOnce(&GamutBoundary) -> f64) -> (f64, f64) {
    if lch.l > L_MAX {
        (0.0, 100.0)
    } else if lch.l < L_MIN {
        (0.0, 0.0)
    } else {
        let boundary = GamutBoundary::at_lightness(lch.l);
        (lch.c / max_chroma(&boundary) * 100.0, lch.l)
    }
}

/// Inverse branch: returns (lightness, chroma)
#[inline]
fn from_percent(
    percent: f64,
    l: f64,
    max_chroma: impl FnOnce(&GamutBoundary) -> f64,
) -> (f64, f64) {
    if l > L_MAX {
        (100.0, 0.0)
    } else if l < L_MIN {
        (0.0, 0.0)
    } else {
        let boundary = GamutBoundary::at_lightness(l);
        (l, max_chroma(&boundary) / 100.0 * percent)
    }
}

impl Hsluv {
    /// Create new HSLuv coordinates
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Project LCh into HSLuv
    pub fn from_lch(lch: Lch) -> Self {
        let (s, l) = to_percent(&lch, |b| b.max_chroma_hsluv(lch.h));
        Self { h: lch.h, s, l }
    }

    /// Expand HSLuv back into LCh
    pub fn to_lch(&self) -> Lch {
        let h = self.h;
        let (l, c) = from_percent(self.s, self.l, |b| b.max_chroma_hsluv(h));
        Lch { l, c, h }
    }

    /// Check if approximately equal to another HSLuv color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.h - other.h).abs() < epsilon
            && (self.s - other.s).abs() < epsilon
            && (self.l - other.l).abs() < epsilon
    }
}

impl Hpluv {
    /// Create new HPLuv coordinates
    #[inline]
    pub const fn new(h: f64, p: f64, l: f64) -> Self {
        Self { h, p, l }
    }

    /// Project LCh into HPLuv
    pub fn from_lch(lch: Lch) -> Self {
        let (p, l) = to_percent(&lch, GamutBoundary::max_chroma_hpluv);
        Self { h: lch.h, p, l }
    }

    /// Expand HPLuv back into LCh
    pub fn to_lch(&self) -> Lch {
        let (l, c) = from_percent(self.p, self.l, GamutBoundary::max_chroma_hpluv);
        Lch { l, c, h: self.h }
    }

    /// Check if approximately equal to another HPLuv color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.h - other.h).abs() < epsilon
            && (self.p - other.p).abs() < epsilon
            && (self.l - other.l).abs() < epsilon
    }
}
