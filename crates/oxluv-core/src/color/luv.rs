//! CIE LUV (L*u*v*) Color Space
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - u*, v*: chromaticity relative to the D65 reference white
//!
//! The L* formula is piecewise: linear below [`EPSILON`] with slope
//! [`KAPPA`], cube root above.

use bytemuck::{Pod, Zeroable};

use crate::color::Xyz;

/// D65 reference white u' chromaticity
pub const REF_U: f64 = 0.19783000664283;

/// D65 reference white v' chromaticity
pub const REF_V: f64 = 0.46831999493879;

/// Reference white luminance
pub const REF_Y: f64 = 1.0;

/// CIE kappa, (29/3)^3
pub const KAPPA: f64 = 903.2962962;

/// CIE epsilon, (6/29)^3
pub const EPSILON: f64 = 0.0088564516;

/// CIE LUV color coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Luv {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Red-green chromaticity
    pub u: f64,
    /// Blue-yellow chromaticity
    pub v: f64,
}

impl Luv {
    /// Create a new LUV color
    #[inline]
    pub const fn new(l: f64, u: f64, v: f64) -> Self {
        Self { l, u, v }
    }

    /// Convert from XYZ
    ///
    /// X = Y = Z = 0 makes u'' and v'' undefined (NaN); L* is 0 there, and
    /// a zero lightness always forces u* = v* = 0, so the NaN never leaves
    /// this function.
    pub fn from_xyz(xyz: Xyz) -> Self {
        let divider = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
        let (var_u, var_v) = if divider != 0.0 {
            (4.0 * xyz.x / divider, 9.0 * xyz.y / divider)
        } else {
            (f64::NAN, f64::NAN)
        };

        let l = y_to_l(xyz.y);
        if l == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }

        Self {
            l,
            u: 13.0 * l * (var_u - REF_U),
            v: 13.0 * l * (var_v - REF_V),
        }
    }

    /// Convert to XYZ
    ///
    /// L* = 0 short-circuits to black.
    pub fn to_xyz(&self) -> Xyz {
        if self.l == 0.0 {
            return Xyz::default();
        }

        let var_u = self.u / (13.0 * self.l) + REF_U;
        let var_v = self.v / (13.0 * self.l) + REF_V;

        let y = l_to_y(self.l);
        let x = -(9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
        let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);

        Xyz::new(x, y, z)
    }

    /// Check if approximately equal to another LUV color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.u - other.u).abs() < epsilon
            && (self.v - other.v).abs() < epsilon
    }
}

/// Luminance Y to lightness L*
#[inline]
pub fn y_to_l(y: f64) -> f64 {
    if y <= EPSILON {
        y / REF_Y * KAPPA
    } else {
        116.0 * (y / REF_Y).cbrt() - 16.0
    }
}

/// Lightness L* to luminance Y
#[inline]
pub fn l_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        REF_Y * l / KAPPA
    } else {
        REF_Y * ((l + 16.0) / 116.0).powi(3)
    }
}
