//! Gamut boundary properties
//!
//! Maximum HSLuv chroma must land exactly on a face of the sRGB cube, and
//! the HPLuv radius must stay inside it for every hue.

use oxluv_core::{ColorValue, GamutBoundary, Hpluv, Hsluv, Lch, Rgb};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const FACE_TOLERANCE: f64 = 1e-6;

fn encoded_rgb(lch: Lch) -> Rgb {
    let linear = lch.to_luv().to_xyz().to_linear_rgb();
    Rgb::from_linear(linear)
}

fn distance_to_face(rgb: Rgb) -> f64 {
    rgb.to_array()
        .iter()
        .map(|c| c.abs().min((c - 1.0).abs()))
        .fold(f64::INFINITY, f64::min)
}

fn overshoot(rgb: Rgb) -> f64 {
    rgb.to_array()
        .iter()
        .map(|c| (-c).max(c - 1.0))
        .fold(f64::NEG_INFINITY, f64::max)
}

#[test]
fn test_max_chroma_lands_on_face() {
    let mut worst_face = 0.0_f64;
    let mut worst_overshoot = f64::NEG_INFINITY;

    for li in 1..200 {
        let l = li as f64 * 0.5;
        let boundary = GamutBoundary::at_lightness(l);
        for h in (0..360).step_by(3) {
            let h = h as f64;
            let rgb = encoded_rgb(Lch::new(l, boundary.max_chroma_hsluv(h), h));
            worst_face = worst_face.max(distance_to_face(rgb));
            worst_overshoot = worst_overshoot.max(overshoot(rgb));
        }
    }

    eprintln!("max chroma: face distance {worst_face:e}, overshoot {worst_overshoot:e}");
    assert!(worst_face < FACE_TOLERANCE);
    assert!(worst_overshoot < FACE_TOLERANCE);
}

#[test]
fn test_full_saturation_color_values() {
    let expected = [
        "#ea0064", "#bc5c00", "#957200", "#777c00", "#3f8700", "#00885d", "#00867c", "#008393",
        "#007eb7", "#7959ff", "#cd00e2", "#de00aa",
    ];

    for (i, hex) in expected.iter().enumerate() {
        let h = i as f64 * 30.0;
        let color = ColorValue::from_hsluv(Hsluv::new(h, 100.0, 50.0));
        assert_eq!(color.hex(), *hex, "h={h}");
        assert!(distance_to_face(color.rgb()) < FACE_TOLERANCE, "h={h}");
    }
}

#[test]
fn test_hpluv_radius_inside_gamut() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..5000 {
        let l = rng.gen_range(0.5..99.5);
        let h = rng.gen_range(0.0..360.0);
        let lch = Hpluv::new(h, 100.0, l).to_lch();
        assert!(
            overshoot(encoded_rgb(lch)) < 1e-9,
            "l={l} h={h} c={}",
            lch.c
        );

        let boundary = GamutBoundary::at_lightness(l);
        assert!(boundary.max_chroma_hpluv() <= boundary.max_chroma_hsluv(h) + 1e-9);
    }
}

#[test]
fn test_reach_is_finite_and_positive() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..5000 {
        let l = rng.gen_range(0.01..99.99);
        let h = rng.gen_range(0.0..360.0);
        let reach = GamutBoundary::at_lightness(l).max_chroma_hsluv(h);
        assert!(reach.is_finite() && reach > 0.0, "l={l} h={h}: {reach}");
    }
}

#[test]
fn test_boundary_shrinks_towards_ends() {
    let mid = GamutBoundary::at_lightness(50.0).max_chroma_hpluv();
    let dark = GamutBoundary::at_lightness(2.0).max_chroma_hpluv();
    let light = GamutBoundary::at_lightness(98.0).max_chroma_hpluv();
    assert!(dark < mid);
    assert!(light < mid);
}
