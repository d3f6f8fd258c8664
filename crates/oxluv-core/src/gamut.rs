//! sRGB gamut boundary in the LUV plane
//!
//! At a fixed lightness L, each face of the sRGB cube (R, G or B equal to
//! 0 or 1) projects to a straight line in the (u, v) plane. The six lines
//! enclose the chromaticities reachable at that lightness. HSLuv measures
//! chroma against the wall hit along the hue ray; HPLuv against the
//! nearest wall in any direction.
//!
//! A [`GamutBoundary`] is only valid for the lightness that built it.

use crate::color::luv::{EPSILON, KAPPA};
use crate::math::matrix::XYZ_TO_SRGB;

/// One boundary line `v = slope * u + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundaryLine {
    pub slope: f64,
    pub intercept: f64,
}

impl BoundaryLine {
    /// Perpendicular distance from the origin
    #[inline]
    pub fn distance_from_origin(&self) -> f64 {
        self.intercept.abs() / (self.slope * self.slope + 1.0).sqrt()
    }

    /// Distance from the origin along the ray at `angle` radians
    ///
    /// Returns +∞ when the ray meets the line behind the origin (or never),
    /// since this wall then does not bound that hue.
    #[inline]
    pub fn ray_length(&self, angle: f64) -> f64 {
        let (sin, cos) = angle.sin_cos();
        let d = self.intercept / (sin - self.slope * cos);
        if d >= 0.0 { d } else { f64::INFINITY }
    }
}

/// Six lines bounding the sRGB gamut at one lightness
///
/// Ordered R=0, R=1, G=0, G=1, B=0, B=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutBoundary {
    lightness: f64,
    lines: [BoundaryLine; 6],
}

impl GamutBoundary {
    /// Compute the boundary lines at lightness `l`
    pub fn at_lightness(l: f64) -> Self {
        let sub1 = (l + 16.0).powi(3) / 1_560_896.0;
        let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

        let mut lines = [BoundaryLine::default(); 6];
        for (channel, faces) in lines.chunks_exact_mut(2).enumerate() {
            let [m1, m2, m3] = XYZ_TO_SRGB.row(channel);
            let top1 = sub2 * (284_517.0 * m1 - 94_839.0 * m3);
            let top2 = sub2 * (838_422.0 * m3 + 769_860.0 * m2 + 731_718.0 * m1);
            let bottom = sub2 * (632_260.0 * m3 - 126_452.0 * m2);

            faces[0] = BoundaryLine {
                slope: top1 / bottom,
                intercept: top2 * l / bottom,
            };
            faces[1] = BoundaryLine {
                slope: top1 / (bottom + 126_452.0),
                intercept: (top2 - 769_860.0) * l / (bottom + 126_452.0),
            };
        }

        Self {
            lightness: l,
            lines,
        }
    }

    /// Lightness these lines were computed for
    #[inline]
    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// The six lines, ordered R=0, R=1, G=0, G=1, B=0, B=1
    #[inline]
    pub fn lines(&self) -> &[BoundaryLine; 6] {
        &self.lines
    }

    /// Flattened as `(r0s, r0i, r1s, r1i, g0s, g0i, g1s, g1i, b0s, b0i, b1s, b1i)`
    pub fn to_array(&self) -> [f64; 12] {
        let mut out = [0.0; 12];
        for (pair, line) in out.chunks_exact_mut(2).zip(&self.lines) {
            pair[0] = line.slope;
            pair[1] = line.intercept;
        }
        out
    }

    /// Largest chroma in gamut for every hue at this lightness
    ///
    /// This is the radius of the circle inscribed in the boundary.
    pub fn max_chroma_hpluv(&self) -> f64 {
        self.lines
            .iter()
            .map(BoundaryLine::distance_from_origin)
            .fold(f64::INFINITY, f64::min)
    }

    /// Largest chroma in gamut at hue `h` (degrees) at this lightness
    pub fn max_chroma_hsluv(&self, h: f64) -> f64 {
        let angle = h.to_radians();
        self.lines
            .iter()
            .map(|line| line.ray_length(angle))
            .fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Lch, Luv, Xyz};

    fn lch_to_linear_rgb(lch: Lch) -> [f64; 3] {
        lch.to_luv().to_xyz().to_linear_rgb()
    }

    #[test]
    fn test_hsluv_chroma_touches_a_face() {
        for l in [5.0, 25.0, 50.0, 75.0, 95.0] {
            let boundary = GamutBoundary::at_lightness(l);
            for h in (0..360).step_by(15) {
                let h = h as f64;
                let c = boundary.max_chroma_hsluv(h);
                let rgb = lch_to_linear_rgb(Lch::new(l, c, h));
                let touches = rgb
                    .iter()
                    .any(|v| v.abs() < 1e-9 || (v - 1.0).abs() < 1e-9);
                assert!(touches, "l={l} h={h} rgb={rgb:?}");
                assert!(rgb.iter().all(|v| (-1e-9..=1.0 + 1e-9).contains(v)));
            }
        }
    }

    #[test]
    fn test_hpluv_chroma_is_inscribed() {
        for l in [10.0, 50.0, 90.0] {
            let boundary = GamutBoundary::at_lightness(l);
            let inscribed = boundary.max_chroma_hpluv();
            let mut touching = 0.0_f64;
            for h in 0..360 {
                let reach = boundary.max_chroma_hsluv(h as f64);
                assert!(inscribed <= reach + 1e-9, "l={l} h={h}");
                touching = touching.max(inscribed / reach);
            }
            assert!(touching > 0.99);
        }
    }

    #[test]
    fn test_red_hue_reaches_primary() {
        let red = Lch::from_luv(Luv::from_xyz(Xyz::from_linear_rgb([1.0, 0.0, 0.0])));
        let boundary = GamutBoundary::at_lightness(red.l);
        assert!((boundary.max_chroma_hsluv(red.h) - red.c).abs() < 1e-9);
    }

    #[test]
    fn test_flattened_order() {
        let boundary = GamutBoundary::at_lightness(50.0);
        let flat = boundary.to_array();
        assert_eq!(flat[0], boundary.lines()[0].slope);
        assert_eq!(flat[3], boundary.lines()[1].intercept);
        assert_eq!(flat[11], boundary.lines()[5].intercept);
        assert_eq!(boundary.lightness(), 50.0);
    }

    #[test]
    fn test_ray_behind_origin_is_infinite() {
        let line = BoundaryLine {
            slope: 0.0,
            intercept: 10.0,
        };
        assert!((line.ray_length(std::f64::consts::FRAC_PI_2) - 10.0).abs() < 1e-12);
        assert_eq!(line.ray_length(-std::f64::consts::FRAC_PI_2), f64::INFINITY);
        assert!((line.distance_from_origin() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_boundary_depends_on_lightness() {
        let a = GamutBoundary::at_lightness(30.0);
        let b = GamutBoundary::at_lightness(70.0);
        assert_ne!(a.to_array(), b.to_array());
    }
}
