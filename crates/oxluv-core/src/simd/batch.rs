//! Whole-buffer HSLuv / HPLuv conversions
//!
//! Pixel buffers are packed `r, g, b` bytes.

use multiversion::multiversion;

use crate::color::{Hpluv, Hsluv, Lch, Luv, Rgb, Xyz};
use crate::error::Result;
use crate::hex;

#[inline(always)]
fn rgb8_to_lch(px: &[u8]) -> Lch {
    let rgb = Rgb::from_u8(px[0], px[1], px[2]);
    let xyz = Xyz::from_linear_rgb(rgb.to_linear());
    Lch::from_luv(Luv::from_xyz(xyz))
}

#[inline(always)]
fn lch_to_rgb8(lch: Lch, px: &mut [u8]) {
    let linear = lch.to_luv().to_xyz().to_linear_rgb();
    px.copy_from_slice(&Rgb::from_linear(linear).to_u8());
}

/// Convert packed RGB8 pixels to HSLuv
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn rgb8_to_hsluv_batch(src: &[u8], dst: &mut [Hsluv]) {
    assert!(src.len() % 3 == 0);
    assert!(dst.len() >= src.len() / 3);

    for (px, out) in src.chunks_exact(3).zip(dst.iter_mut()) {
        *out = Hsluv::from_lch(rgb8_to_lch(px));
    }
}

/// Convert HSLuv colors to packed RGB8 pixels
///
/// Channels are rounded and clamped, like hex formatting.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn hsluv_to_rgb8_batch(src: &[Hsluv], dst: &mut [u8]) {
    assert!(dst.len() >= src.len() * 3);

    for (hsluv, px) in src.iter().zip(dst.chunks_exact_mut(3)) {
        lch_to_rgb8(hsluv.to_lch(), px);
    }
}

/// Convert packed RGB8 pixels to HPLuv
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn rgb8_to_hpluv_batch(src: &[u8], dst: &mut [Hpluv]) {
    assert!(src.len() % 3 == 0);
    assert!(dst.len() >= src.len() / 3);

    for (px, out) in src.chunks_exact(3).zip(dst.iter_mut()) {
        *out = Hpluv::from_lch(rgb8_to_lch(px));
    }
}

/// Convert HPLuv colors to packed RGB8 pixels
///
/// Purities beyond the gamut are clamped per channel.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn hpluv_to_rgb8_batch(src: &[Hpluv], dst: &mut [u8]) {
    assert!(dst.len() >= src.len() * 3);

    for (hpluv, px) in src.iter().zip(dst.chunks_exact_mut(3)) {
        lch_to_rgb8(hpluv.to_lch(), px);
    }
}

/// Parse hex colors straight to HSLuv
///
/// Stops at the first malformed entry; earlier outputs are already written.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn hex_to_hsluv_batch<S>(src: &[S], dst: &mut [Hsluv]) -> Result<()>
where
    S: AsRef<str>,
{
    assert!(dst.len() >= src.len());

    for (hex, out) in src.iter().zip(dst.iter_mut()) {
        let px = hex::parse_bytes(hex.as_ref())?;
        *out = Hsluv::from_lch(rgb8_to_lch(&px));
    }
    Ok(())
}

/// WCAG relative luminance of packed RGB8 pixels
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn relative_luminance_batch(src: &[u8], dst: &mut [f64]) {
    assert!(src.len() % 3 == 0);
    assert!(dst.len() >= src.len() / 3);

    for (px, out) in src.chunks_exact(3).zip(dst.iter_mut()) {
        *out = Rgb::from_u8(px[0], px[1], px[2]).relative_luminance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorValue;

    const PIXELS: [u8; 15] = [
        255, 0, 0, //
        0, 255, 0, //
        0, 0, 255, //
        0x4d, 0x4d, 0xa1, //
        0xec, 0xec, 0xec,
    ];

    #[test]
    fn test_hsluv_batch_matches_color_value() {
        let mut hsluv = [Hsluv::default(); 5];
        rgb8_to_hsluv_batch(&PIXELS, &mut hsluv);

        for (px, batch) in PIXELS.chunks_exact(3).zip(&hsluv) {
            let hex = format!("#{:02x}{:02x}{:02x}", px[0], px[1], px[2]);
            let single = ColorValue::from_hex(&hex).unwrap().hsluv();
            assert_eq!(*batch, single, "{hex}");
        }
    }

    #[test]
    fn test_hsluv_batch_roundtrip() {
        let mut hsluv = [Hsluv::default(); 5];
        let mut back = [0u8; 15];

        rgb8_to_hsluv_batch(&PIXELS, &mut hsluv);
        hsluv_to_rgb8_batch(&hsluv, &mut back);

        assert_eq!(PIXELS, back);
    }

    #[test]
    fn test_hpluv_batch_roundtrip() {
        let mut hpluv = [Hpluv::default(); 5];
        let mut back = [0u8; 15];

        rgb8_to_hpluv_batch(&PIXELS, &mut hpluv);
        hpluv_to_rgb8_batch(&hpluv, &mut back);

        assert_eq!(PIXELS, back);
        assert!((hpluv[0].p - 426.7467891831252).abs() < 1e-6);
    }

    #[test]
    fn test_hex_batch() {
        let hexes = ["#FF0000", "#4d4da1", "#ececec"];
        let mut out = [Hsluv::default(); 3];
        hex_to_hsluv_batch(&hexes, &mut out).unwrap();
        assert_eq!(out[1], ColorValue::from_hex("#4d4da1").unwrap().hsluv());

        let bad = vec!["#000000".to_string(), "#00000g".to_string()];
        assert!(hex_to_hsluv_batch(&bad, &mut out).is_err());
    }

    #[test]
    fn test_luminance_batch() {
        let mut lum = [0.0; 5];
        relative_luminance_batch(&PIXELS, &mut lum);

        assert!((lum[0] - 0.2126).abs() < 1e-12);
        assert!((lum[1] - 0.7152).abs() < 1e-12);
        assert!((lum[2] - 0.0722).abs() < 1e-12);
        assert!((lum[4] - 0.8387990117407399).abs() < 1e-9);
    }
}
