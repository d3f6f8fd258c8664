//! Batch conversions with runtime CPU dispatch
//!
//! [`ColorValue`](crate::ColorValue) is convenient for one color at a time
//! but carries a `String` and every representation. These functions run the
//! bare pipeline over whole pixel buffers instead, using the `multiversion`
//! crate to pick the best instruction set at runtime.
//!
//! Supported instruction sets:
//! - x86-64: SSE4.1, AVX2
//! - ARM64: NEON
//!
//! The scalar fallback is always available.

mod batch;
mod gamma;

pub use batch::{
    hex_to_hsluv_batch, hpluv_to_rgb8_batch, hsluv_to_rgb8_batch, relative_luminance_batch,
    rgb8_to_hpluv_batch, rgb8_to_hsluv_batch,
};
pub use gamma::{srgb_decode_batch, srgb_encode_batch};

use crate::color::{Hpluv, Hsluv};

/// View a slice of HSLuv triples as flat `h, s, l, h, s, l, ...` values
#[inline]
pub fn hsluv_as_flat(colors: &[Hsluv]) -> &[f64] {
    bytemuck::cast_slice(colors)
}

/// View a slice of HPLuv triples as flat `h, p, l, h, p, l, ...` values
#[inline]
pub fn hpluv_as_flat(colors: &[Hpluv]) -> &[f64] {
    bytemuck::cast_slice(colors)
}

/// Get a description of the active SIMD features
pub fn active_features() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            "AVX2"
        } else if is_x86_feature_detected!("sse4.1") {
            "SSE4.1"
        } else {
            "scalar"
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        "NEON"
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        "scalar"
    }
}
