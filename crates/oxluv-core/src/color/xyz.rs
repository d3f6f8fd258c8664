//! CIE XYZ Color Space
//!
//! XYZ is the hub between linear sRGB and CIE LUV. Y is luminance,
//! normalized so the D65 white has Y = 1.

use bytemuck::{Pod, Zeroable};

use crate::math::matrix::{SRGB_TO_XYZ, XYZ_TO_SRGB};

/// CIE 1931 XYZ color coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Xyz {
    /// X tristimulus value (mix of cone responses, roughly red)
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value (roughly blue)
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Convert from linear sRGB
    #[inline]
    pub fn from_linear_rgb(linear: [f64; 3]) -> Self {
        let [x, y, z] = SRGB_TO_XYZ.multiply_vec(linear);
        Self { x, y, z }
    }

    /// Convert to linear sRGB (unclamped)
    #[inline]
    pub fn to_linear_rgb(&self) -> [f64; 3] {
        XYZ_TO_SRGB.multiply_vec(self.to_array())
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}
