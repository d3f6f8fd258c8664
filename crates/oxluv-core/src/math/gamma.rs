//! sRGB transfer function
//!
//! Two variants of the same curve live here. The colorimetric one
//! (threshold 0.04045) drives the XYZ pipeline; the WCAG one (threshold
//! 0.03928) is only used for relative luminance and contrast ratios.

/// Encoded values at or below this are on the linear segment
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;

/// Linear values at or below this are on the linear segment
pub const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

/// WCAG 2.x threshold for relative luminance
pub const WCAG_THRESHOLD: f64 = 0.03928;

/// sRGB gamma decode (encoded → linear)
///
/// Converts an sRGB-encoded channel [0,1] to linear light [0,1].
/// Uses the IEC 61966-2-1 transfer function.
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded > SRGB_DECODE_THRESHOLD {
        ((encoded + 0.055) / 1.055).powf(2.4)
    } else {
        encoded / 12.92
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts linear light [0,1] to an sRGB-encoded channel [0,1].
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= SRGB_ENCODE_THRESHOLD {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Linearize an encoded channel the way WCAG relative luminance does
#[inline]
pub fn wcag_channel_luminance(encoded: f64) -> f64 {
    if encoded <= WCAG_THRESHOLD {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}
