//! LCh(uv): polar form of CIE LUV

use bytemuck::{Pod, Zeroable};

use crate::color::Luv;

/// Chroma below this is treated as achromatic and gets hue 0
pub const HUE_EPSILON: f64 = 1e-8;

/// Cylindrical CIE LCh(uv) color coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Lch {
    /// Lightness (0 to 100), same as LUV L*
    pub l: f64,
    /// Chroma, distance from the neutral axis
    pub c: f64,
    /// Hue angle in degrees, [0, 360)
    pub h: f64,
}

impl Lch {
    /// Create a new LCh color
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Convert from LUV
    pub fn from_luv(luv: Luv) -> Self {
        let c = luv.u.hypot(luv.v);
        let h = if c < HUE_EPSILON {
            0.0
        } else {
            normalize_hue(luv.v.atan2(luv.u).to_degrees())
        };
        Self { l: luv.l, c, h }
    }

    /// Convert to LUV
    pub fn to_luv(&self) -> Luv {
        let (sin, cos) = self.h.to_radians().sin_cos();
        Luv::new(self.l, cos * self.c, sin * self.c)
    }

    /// Check if approximately equal to another LCh color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.c - other.c).abs() < epsilon
            && (self.h - other.h).abs() < epsilon
    }
}

/// Wrap a hue in degrees into [0, 360)
#[inline]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}
