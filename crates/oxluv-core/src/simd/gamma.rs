//! sRGB transfer function over buffers

use multiversion::multiversion;

use crate::math::gamma::{srgb_gamma_decode, srgb_gamma_encode};

/// Decode gamma-encoded sRGB values to linear light
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn srgb_decode_batch(input: &[f64], output: &mut [f64]) {
    assert!(output.len() >= input.len());

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        *out = srgb_gamma_decode(*inp);
    }
}

/// Encode linear-light values to gamma-encoded sRGB
///
/// Values are not clamped, matching [`srgb_gamma_encode`].
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn srgb_encode_batch(input: &[f64], output: &mut [f64]) {
    assert!(output.len() >= input.len());

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        *out = srgb_gamma_encode(*inp);
    }
}
