//! Color space types and conversions
//!
//! This module provides:
//! - Gamma-encoded sRGB
//! - CIE XYZ
//! - CIE LUV and its polar form LCh(uv)
//! - HSLuv and HPLuv projections
//! - HSL and CIELAB side views

pub mod hsl;
pub mod hsluv;
pub mod lab;
pub mod lch;
pub mod luv;
pub mod rgb;
pub mod xyz;

pub use hsl::Hsl;
pub use hsluv::{Hpluv, Hsluv};
pub use lab::{Lab, delta_e_2000};
pub use lch::Lch;
pub use luv::Luv;
pub use rgb::Rgb;
pub use xyz::Xyz;
