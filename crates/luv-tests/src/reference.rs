//! Reference implementation wrappers
//!
//! `palette` implements HSLuv independently, with its own sRGB primaries and
//! D65 white, so agreement is expected to a small tolerance rather than to
//! the last bit.

use palette::white_point::D65;
use palette::{FromColor, Hsluv, Lchuv, Luv, Srgb};

/// HSLuv `(h, s, l)` of an 8-bit sRGB pixel according to `palette`
pub fn palette_hsluv(px: [u8; 3]) -> [f64; 3] {
    let rgb: Srgb<f64> = Srgb::new(px[0], px[1], px[2]).into_format();
    let hsluv = Hsluv::<D65, f64>::from_color(rgb);
    [
        hsluv.hue.into_positive_degrees(),
        hsluv.saturation,
        hsluv.l,
    ]
}

/// 8-bit sRGB pixel of an HSLuv `(h, s, l)` according to `palette`
pub fn palette_hsluv_to_rgb8(hsluv: [f64; 3]) -> [u8; 3] {
    let color = Hsluv::<D65, f64>::new(hsluv[0], hsluv[1], hsluv[2]);
    let rgb: Srgb<u8> = Srgb::<f64>::from_color(color).into_format();
    [rgb.red, rgb.green, rgb.blue]
}

/// CIE LUV `(l, u, v)` of an 8-bit sRGB pixel according to `palette`
pub fn palette_luv(px: [u8; 3]) -> [f64; 3] {
    let rgb: Srgb<f64> = Srgb::new(px[0], px[1], px[2]).into_format();
    let luv = Luv::<D65, f64>::from_color(rgb);
    [luv.l, luv.u, luv.v]
}

/// LCh(uv) `(l, c, h)` of an 8-bit sRGB pixel according to `palette`
pub fn palette_lchuv(px: [u8; 3]) -> [f64; 3] {
    let rgb: Srgb<f64> = Srgb::new(px[0], px[1], px[2]).into_format();
    let lch = Lchuv::<D65, f64>::from_color(rgb);
    [lch.l, lch.chroma, lch.hue.into_positive_degrees()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_red() {
        let [h, s, l] = palette_hsluv([255, 0, 0]);
        assert!((h - 12.18).abs() < 0.1, "h={h}");
        assert!((s - 100.0).abs() < 0.5, "s={s}");
        assert!((l - 53.24).abs() < 0.1, "l={l}");
    }

    #[test]
    fn test_palette_gray_lightness() {
        let [_, s, l] = palette_hsluv([128, 128, 128]);
        assert!(s < 0.1);
        assert!((l - 53.59).abs() < 0.1);
        let [l2, _, _] = palette_luv([128, 128, 128]);
        assert!((l - l2).abs() < 1e-9);
    }
}
