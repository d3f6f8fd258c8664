//! Mathematical operations for the conversion pipeline
//!
//! This module provides:
//! - 3x3 matrix operations for linear RGB↔XYZ transforms
//! - The sRGB transfer function and the WCAG luminance variant

pub mod gamma;
pub mod matrix;

pub use gamma::{srgb_gamma_decode, srgb_gamma_encode, wcag_channel_luminance};
pub use matrix::{Matrix3x3, SRGB_TO_XYZ, XYZ_TO_SRGB};
