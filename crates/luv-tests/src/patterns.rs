//! Test pattern generation
//!
//! Patterns are packed `r, g, b` byte buffers, the layout the batch
//! conversions take.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum ColorPattern {
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Grayscale ramp 0-255
    Grayscale,
    /// Classic HSL hue ramp at full saturation
    HueRamp,
    /// Random pixels with seed
    Random(u64),
    /// Grays nudged by one step in a single channel
    NearNeutral,
    /// Very dark colors, where L* uses its linear segment
    Shadows,
    /// Skin tone samples
    SkinTones,
}

/// Generate `count` pixels of a pattern as an RGB8 buffer
pub fn generate_pattern(pattern: ColorPattern, count: usize) -> Vec<u8> {
    let mut data = vec![0u8; count * 3];

    match pattern {
        ColorPattern::ColorCube => {
            let corners: [[u8; 3]; 8] = [
                [0, 0, 0],
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 255],
            ];
            for (i, chunk) in data.chunks_exact_mut(3).enumerate() {
                chunk.copy_from_slice(&corners[i % 8]);
            }
        }
        ColorPattern::Grayscale => {
            for (i, chunk) in data.chunks_exact_mut(3).enumerate() {
                let v = ((i as f64 / count as f64) * 256.0) as u8;
                chunk.fill(v);
            }
        }
        ColorPattern::HueRamp => {
            for (i, chunk) in data.chunks_exact_mut(3).enumerate() {
                let hue = (i as f64 / count as f64) * 360.0;
                chunk.copy_from_slice(&hue_to_rgb8(hue));
            }
        }
        ColorPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.fill_bytes(&mut data);
        }
        ColorPattern::NearNeutral => {
            for (i, chunk) in data.chunks_exact_mut(3).enumerate() {
                let v = ((i * 7) % 255) as u8;
                chunk.fill(v);
                chunk[i % 3] = v + 1;
            }
        }
        ColorPattern::Shadows => {
            for (i, chunk) in data.chunks_exact_mut(3).enumerate() {
                chunk[0] = (i % 6) as u8;
                chunk[1] = ((i / 6) % 6) as u8;
                chunk[2] = ((i / 36) % 6) as u8;
            }
        }
        ColorPattern::SkinTones => {
            let tones: [[u8; 3]; 6] = [
                [255, 224, 189],
                [241, 194, 125],
                [224, 172, 105],
                [198, 134, 66],
                [141, 85, 36],
                [89, 47, 42],
            ];
            for (i, chunk) in data.chunks_exact_mut(3).enumerate() {
                chunk.copy_from_slice(&tones[i % 6]);
            }
        }
    }

    data
}

/// Every `step`-th value per channel of the 24-bit cube, always including 255
pub fn strided_cube(step: usize) -> Vec<[u8; 3]> {
    let mut levels: Vec<u8> = (0..=255u8).step_by(step.max(1)).collect();
    if levels.last() != Some(&255) {
        levels.push(255);
    }

    let mut out = Vec::with_capacity(levels.len().pow(3));
    for &r in &levels {
        for &g in &levels {
            for &b in &levels {
                out.push([r, g, b]);
            }
        }
    }
    out
}

/// Lowercase `#rrggbb` for one pixel
pub fn to_hex(px: &[u8]) -> String {
    format!("#{:02x}{:02x}{:02x}", px[0], px[1], px[2])
}

fn hue_to_rgb8(h: f64) -> [u8; 3] {
    let x = 1.0 - ((h / 60.0) % 2.0 - 1.0).abs();

    let (r, g, b) = if h < 60.0 {
        (1.0, x, 0.0)
    } else if h < 120.0 {
        (x, 1.0, 0.0)
    } else if h < 180.0 {
        (0.0, 1.0, x)
    } else if h < 240.0 {
        (0.0, x, 1.0)
    } else if h < 300.0 {
        (x, 0.0, 1.0)
    } else {
        (1.0, 0.0, x)
    };

    [
        (r * 255.0_f64).round() as u8,
        (g * 255.0_f64).round() as u8,
        (b * 255.0_f64).round() as u8,
    ]
}

/// Standard sample counts
pub mod sizes {
    pub const TINY: usize = 64;
    pub const SMALL: usize = 4096;
    pub const MEDIUM: usize = 65536;
}
