//! WCAG contrast ratios

use std::fmt;

/// WCAG 2.x contrast ratio between two relative luminances
///
/// Symmetric in its arguments; ranges from 1 (identical) to 21 (black on
/// white).
#[inline]
pub fn contrast_ratio(luminance_a: f64, luminance_b: f64) -> f64 {
    let lighter = luminance_a.max(luminance_b);
    let darker = luminance_a.min(luminance_b);
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG minimum contrast requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContrastLevel {
    /// 3:1, text of 18pt and larger, icons (AA large)
    LargeText,
    /// 4.5:1, body text (AA)
    #[default]
    Normal,
    /// 7:1, body text (AAA)
    Enhanced,
}

impl ContrastLevel {
    /// Minimum ratio for this level
    pub const fn threshold(self) -> f64 {
        match self {
            Self::LargeText => 3.0,
            Self::Normal => 4.5,
            Self::Enhanced => 7.0,
        }
    }

    /// Whether `ratio` satisfies this level
    #[inline]
    pub fn is_met_by(self, ratio: f64) -> bool {
        ratio >= self.threshold()
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LargeText => write!(f, "AA large (3:1)"),
            Self::Normal => write!(f, "AA (4.5:1)"),
            Self::Enhanced => write!(f, "AAA (7:1)"),
        }
    }
}
