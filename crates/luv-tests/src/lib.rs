//! # luv-tests
//!
//! Parity and property testing for oxluv.
//!
//! This crate provides:
//! - Seeded color patterns for sweeps
//! - Wrappers around the `palette` crate as an independent HSLuv reference
//! - Coordinate difference statistics
//! - A JSON snapshot of reference conversions
//!
//! ## Test Categories
//!
//! 1. **Round trips**: hex -> HSLuv/HPLuv -> hex over the 24-bit cube
//! 2. **Gamut boundary**: maximum chroma lands on a face of the sRGB cube
//! 3. **Parity**: agreement with `palette`'s HSLuv
//! 4. **Snapshot**: every intermediate space against stored values
//! 5. **Theme adjustments**: lightness inversion, blending, WCAG contrast

pub mod accuracy;
pub mod patterns;
pub mod reference;
pub mod snapshot;

pub use accuracy::{CoordinateStats, HsluvDiff, hue_difference};
pub use patterns::{ColorPattern, generate_pattern, to_hex};
pub use snapshot::{SnapshotEntry, default_snapshot_path, load_snapshot};
