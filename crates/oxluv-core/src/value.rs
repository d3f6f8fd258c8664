//! One color, every representation
//!
//! [`ColorValue`] stores hex, sRGB, linear RGB, XYZ, LUV, LCh, HSLuv, HPLuv
//! and HSL side by side. Each setter runs the whole pipeline once so the
//! fields always agree (up to 8-bit quantization of the hex form); the
//! getters only read.
//!
//! ```text
//! set_hex / set_rgb:   hex -> rgb -> linear -> xyz -> luv -> lch -> {hsluv, hpluv}
//! set_hsluv / hpluv:   hsluv|hpluv -> lch -> luv -> xyz -> linear -> rgb -> hex
//! ```

use std::fmt;
use std::str::FromStr;

use crate::color::{Hpluv, Hsl, Hsluv, Lab, Lch, Luv, Rgb, Xyz, delta_e_2000};
use crate::color::lch::normalize_hue;
use crate::contrast::{self, ContrastLevel};
use crate::error::{Error, Result};
use crate::hex;

/// A color held in all supported representations at once
#[derive(Debug, Clone, PartialEq)]
pub struct ColorValue {
    hex: String,
    rgb: Rgb,
    linear: [f64; 3],
    xyz: Xyz,
    luv: Luv,
    lch: Lch,
    hsluv: Hsluv,
    hpluv: Hpluv,
    hsl: Hsl,
}

impl ColorValue {
    /// Parse a `#rrggbb` color (case-insensitive)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let mut color = Self::default();
        color.set_hex(hex)?;
        Ok(color)
    }

    /// Create from gamma-encoded sRGB; channels are clamped to [0, 1]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let mut color = Self::black();
        color.set_rgb(rgb);
        color
    }

    /// Create from HSLuv coordinates
    pub fn from_hsluv(hsluv: Hsluv) -> Self {
        let mut color = Self::black();
        color.set_hsluv(Some(hsluv.h), Some(hsluv.s), Some(hsluv.l));
        color
    }

    /// Create from HPLuv coordinates
    pub fn from_hpluv(hpluv: Hpluv) -> Self {
        let mut color = Self::black();
        color.set_hpluv(Some(hpluv.h), Some(hpluv.p), Some(hpluv.l));
        color
    }

    fn black() -> Self {
        Self {
            hex: hex::format_bytes([0, 0, 0]),
            rgb: Rgb::BLACK,
            linear: [0.0; 3],
            xyz: Xyz::default(),
            luv: Luv::default(),
            lch: Lch::default(),
            hsluv: Hsluv::default(),
            hpluv: Hpluv::default(),
            hsl: Hsl::default(),
        }
    }

    // ------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------

    /// Replace the color with a `#rrggbb` value
    ///
    /// On error the color is left unchanged.
    pub fn set_hex(&mut self, hex: &str) -> Result<()> {
        let bytes = hex::parse_bytes(hex)?;
        self.rgb = Rgb::from(bytes);
        self.hex = hex::format_bytes(bytes);
        self.derive_from_rgb();
        Ok(())
    }

    /// Replace the color with gamma-encoded sRGB; channels are clamped to [0, 1]
    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.rgb = rgb.clamp();
        self.hex = hex::format(self.rgb);
        self.derive_from_rgb();
    }

    /// Set any of the HSLuv coordinates; `None` keeps the current value
    pub fn set_hsluv(&mut self, h: Option<f64>, s: Option<f64>, l: Option<f64>) {
        let mut hsluv = self.hsluv;
        if let Some(h) = h {
            hsluv.h = h;
        }
        if let Some(s) = s {
            hsluv.s = s;
        }
        if let Some(l) = l {
            hsluv.l = l;
        }
        self.apply_hsluv(hsluv);
    }

    /// Shift HSLuv coordinates by the given deltas; `None` leaves one unchanged
    pub fn add_hsluv(&mut self, dh: Option<f64>, ds: Option<f64>, dl: Option<f64>) {
        let hsluv = Hsluv::new(
            self.hsluv.h + dh.unwrap_or(0.0),
            self.hsluv.s + ds.unwrap_or(0.0),
            self.hsluv.l + dl.unwrap_or(0.0),
        );
        self.apply_hsluv(hsluv);
    }

    /// Set any of the HPLuv coordinates; `None` keeps the current value
    pub fn set_hpluv(&mut self, h: Option<f64>, p: Option<f64>, l: Option<f64>) {
        let mut hpluv = self.hpluv;
        if let Some(h) = h {
            hpluv.h = h;
        }
        if let Some(p) = p {
            hpluv.p = p;
        }
        if let Some(l) = l {
            hpluv.l = l;
        }
        self.apply_hpluv(hpluv);
    }

    /// Shift HPLuv coordinates by the given deltas; `None` leaves one unchanged
    pub fn add_hpluv(&mut self, dh: Option<f64>, dp: Option<f64>, dl: Option<f64>) {
        let hpluv = Hpluv::new(
            self.hpluv.h + dh.unwrap_or(0.0),
            self.hpluv.p + dp.unwrap_or(0.0),
            self.hpluv.l + dl.unwrap_or(0.0),
        );
        self.apply_hpluv(hpluv);
    }

    /// Mix towards `other` by `t` in [0, 1]
    ///
    /// Interpolates the raw 8-bit channel values, so this is a gamma-space
    /// blend, not physically linear light mixing. `t = 0` keeps this color,
    /// `t = 1` yields `other`.
    pub fn blend(&mut self, other: &str, t: f64) -> Result<()> {
        let from = hex::parse_bytes(&self.hex)?;
        let to = hex::parse_bytes(other)?;

        let mut mixed = [0u8; 3];
        for ((out, a), b) in mixed.iter_mut().zip(from).zip(to) {
            let (a, b) = (a as f64, b as f64);
            *out = (a + (b - a) * t).round().clamp(0.0, 255.0) as u8;
        }
        self.set_hex(&hex::format_bytes(mixed))
    }

    // ------------------------------------------------------------------
    // Pipelines
    // ------------------------------------------------------------------

    fn derive_from_rgb(&mut self) {
        self.hsl = Hsl::from_rgb(self.rgb);
        self.linear = self.rgb.to_linear();
        self.xyz = Xyz::from_linear_rgb(self.linear);
        self.luv = Luv::from_xyz(self.xyz);
        self.lch = Lch::from_luv(self.luv);
        self.hpluv = Hpluv::from_lch(self.lch);
        self.hsluv = Hsluv::from_lch(self.lch);
    }

    fn apply_hsluv(&mut self, mut hsluv: Hsluv) {
        hsluv.h = normalize_hue(hsluv.h);
        self.hsluv = hsluv;
        self.lch = hsluv.to_lch();
        self.derive_from_lch();
        self.hpluv = Hpluv::from_lch(self.lch);
    }

    fn apply_hpluv(&mut self, mut hpluv: Hpluv) {
        hpluv.h = normalize_hue(hpluv.h);
        self.hpluv = hpluv;
        self.lch = hpluv.to_lch();
        self.derive_from_lch();
        self.hsluv = Hsluv::from_lch(self.lch);
    }

    fn derive_from_lch(&mut self) {
        self.luv = self.lch.to_luv();
        self.xyz = self.luv.to_xyz();
        self.linear = self.xyz.to_linear_rgb();
        // Out-of-gamut HPLuv purities land outside the cube
        self.rgb = Rgb::from_linear(self.linear).clamp();
        self.hsl = Hsl::from_rgb(self.rgb);
        self.hex = hex::format(self.rgb);
    }

    // ------------------------------------------------------------------
    // Getters
    // ------------------------------------------------------------------

    /// Lowercase `#rrggbb`
    #[inline]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Gamma-encoded sRGB
    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Linear-light RGB, unclamped
    #[inline]
    pub fn linear_rgb(&self) -> [f64; 3] {
        self.linear
    }

    #[inline]
    pub fn xyz(&self) -> Xyz {
        self.xyz
    }

    #[inline]
    pub fn luv(&self) -> Luv {
        self.luv
    }

    #[inline]
    pub fn lch(&self) -> Lch {
        self.lch
    }

    #[inline]
    pub fn hsluv(&self) -> Hsluv {
        self.hsluv
    }

    #[inline]
    pub fn hpluv(&self) -> Hpluv {
        self.hpluv
    }

    #[inline]
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// CIELAB (D65) of this color
    #[inline]
    pub fn lab(&self) -> Lab {
        Lab::from_xyz(self.xyz)
    }

    // ------------------------------------------------------------------
    // Metrics
    // ------------------------------------------------------------------

    /// WCAG relative luminance, [0, 1]
    #[inline]
    pub fn luminance(&self) -> f64 {
        self.rgb.relative_luminance()
    }

    /// WCAG contrast ratio against `other`, [1, 21]
    #[inline]
    pub fn contrast_ratio(&self, other: &ColorValue) -> f64 {
        contrast::contrast_ratio(self.luminance(), other.luminance())
    }

    /// Whether this color and `other` reach the given WCAG level
    #[inline]
    pub fn meets_contrast(&self, other: &ColorValue, level: ContrastLevel) -> bool {
        level.is_met_by(self.contrast_ratio(other))
    }

    /// CIEDE2000 difference to `other`
    #[inline]
    pub fn delta_e(&self, other: &ColorValue) -> f64 {
        delta_e_2000(self.lab(), other.lab())
    }
}

impl Default for ColorValue {
    /// Black
    fn default() -> Self {
        Self::black()
    }
}

impl FromStr for ColorValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}
