//! Coordinate difference statistics
//!
//! HSLuv coordinates are compared per axis. Hue is circular, so its
//! difference is taken the short way round.

/// Statistics over a set of absolute differences
#[derive(Debug, Clone, Default)]
pub struct CoordinateStats {
    /// Mean difference
    pub mean: f64,
    /// Maximum difference
    pub max: f64,
    /// 95th percentile difference
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl CoordinateStats {
    /// Summarize a list of absolute differences
    pub fn from_differences(mut diffs: Vec<f64>) -> Self {
        if diffs.is_empty() {
            return Self::default();
        }

        diffs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = diffs.iter().sum::<f64>() / diffs.len() as f64;
        let max = *diffs.last().unwrap_or(&0.0);
        let p95_idx = ((diffs.len() as f64 * 0.95) as usize).min(diffs.len() - 1);

        Self {
            mean,
            max,
            p95: diffs[p95_idx],
            count: diffs.len(),
        }
    }
}

/// Shortest angular distance between two hues in degrees, [0, 180]
pub fn hue_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Per-axis HSLuv differences between two implementations
#[derive(Debug, Clone, Default)]
pub struct HsluvDiff {
    pub hue: CoordinateStats,
    pub saturation: CoordinateStats,
    pub lightness: CoordinateStats,
}

impl HsluvDiff {
    /// Compare `(h, s, l)` triples pairwise
    ///
    /// Hue is only compared where both saturations are at least
    /// `min_saturation`; below that it is numerically meaningless.
    pub fn compare(ours: &[[f64; 3]], reference: &[[f64; 3]], min_saturation: f64) -> Self {
        assert_eq!(ours.len(), reference.len());

        let mut hue = Vec::new();
        let mut saturation = Vec::with_capacity(ours.len());
        let mut lightness = Vec::with_capacity(ours.len());

        for (a, b) in ours.iter().zip(reference) {
            if a[1] >= min_saturation && b[1] >= min_saturation {
                hue.push(hue_difference(a[0], b[0]));
            }
            saturation.push((a[1] - b[1]).abs());
            lightness.push((a[2] - b[2]).abs());
        }

        Self {
            hue: CoordinateStats::from_differences(hue),
            saturation: CoordinateStats::from_differences(saturation),
            lightness: CoordinateStats::from_differences(lightness),
        }
    }

    /// Print a one-block summary to stderr
    pub fn report(&self, label: &str) {
        eprintln!("=== {label} ===");
        for (axis, stats) in [
            ("h", &self.hue),
            ("s", &self.saturation),
            ("l", &self.lightness),
        ] {
            eprintln!(
                "  {axis}: mean={:.6} p95={:.6} max={:.6} (n={})",
                stats.mean, stats.max, stats.p95, stats.count
            );
        }
    }
}
