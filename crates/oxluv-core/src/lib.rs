//! # oxluv - HSLuv colorimetry engine
//!
//! Represents one color simultaneously in hex/sRGB, linear RGB, CIE XYZ,
//! CIE LUV, LCh(uv), HSLuv and HPLuv, and computes the sRGB gamut boundary
//! at a given lightness.
//!
//! ## Pipeline
//!
//! ```text
//! hex <-> sRGB <-> linear RGB <-> XYZ <-> LUV <-> LCh(uv) <-> HSLuv / HPLuv
//!                                                     ^
//!                                          GamutBoundary(L)
//! ```
//!
//! [`ColorValue`] owns one color and keeps every representation in sync:
//! setters run the whole chain, getters never recompute.
//!
//! ## Quick Start
//!
//! ```
//! use oxluv_core::ColorValue;
//!
//! let mut color = ColorValue::from_hex("#4d4da1").unwrap();
//! assert!(color.hsluv().s > 40.0);
//!
//! // Same hue and saturation, lightness 80
//! color.set_hsluv(None, None, Some(80.0));
//! assert_eq!(color.hex().len(), 7);
//!
//! let white = ColorValue::from_hex("#ffffff").unwrap();
//! assert!(color.contrast_ratio(&white) >= 1.0);
//! ```

pub mod color;
pub mod contrast;
pub mod error;
pub mod gamut;
pub mod hex;
pub mod math;
pub mod simd;
pub mod value;

pub use color::{Hpluv, Hsl, Hsluv, Lab, Lch, Luv, Rgb, Xyz};
pub use contrast::ContrastLevel;
pub use error::{Error, Result};
pub use gamut::{BoundaryLine, GamutBoundary};
pub use value::ColorValue;

/// Version of oxluv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convert a hex color to HSLuv
pub fn hex_to_hsluv(hex: &str) -> Result<Hsluv> {
    Ok(ColorValue::from_hex(hex)?.hsluv())
}

/// Convert a hex color to HPLuv
pub fn hex_to_hpluv(hex: &str) -> Result<Hpluv> {
    Ok(ColorValue::from_hex(hex)?.hpluv())
}

/// Convert HSLuv coordinates to a hex color
pub fn hsluv_to_hex(hsluv: Hsluv) -> String {
    let mut color = ColorValue::default();
    color.set_hsluv(Some(hsluv.h), Some(hsluv.s), Some(hsluv.l));
    color.hex().to_owned()
}

/// Convert HPLuv coordinates to a hex color
pub fn hpluv_to_hex(hpluv: Hpluv) -> String {
    let mut color = ColorValue::default();
    color.set_hpluv(Some(hpluv.h), Some(hpluv.p), Some(hpluv.l));
    color.hex().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_helpers() {
        let hsluv = hex_to_hsluv("#FF0000").unwrap();
        assert!((hsluv.h - 12.177050630061776).abs() < 1e-6);
        assert_eq!(hsluv_to_hex(hsluv), "#ff0000");

        let hpluv = hex_to_hpluv("#ff0000").unwrap();
        assert!((hpluv.p - 426.7467891831252).abs() < 1e-6);
        assert_eq!(hpluv_to_hex(hpluv), "#ff0000");
    }

    #[test]
    fn test_one_shot_rejects_bad_hex() {
        assert!(matches!(
            hex_to_hsluv("red"),
            Err(Error::InvalidHexFormat(_))
        ));
    }
}
