//! Reference conversion snapshot
//!
//! `testdata/snapshot.json` holds, for a set of hex colors, every
//! intermediate representation produced by the reference HSLuv algorithm
//! (the 6x6x6 web-safe cube plus a few hand-picked colors).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

/// One color with all of its reference coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub hex: String,
    pub rgb: [f64; 3],
    pub xyz: [f64; 3],
    pub luv: [f64; 3],
    pub lch: [f64; 3],
    pub hsluv: [f64; 3],
    pub hpluv: [f64; 3],
    /// WCAG relative luminance
    pub luminance: f64,
}

/// Path of the bundled snapshot
pub fn default_snapshot_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/snapshot.json")
}

/// Load and sanity-check a snapshot file
pub fn load_snapshot(path: &Path) -> Result<Vec<SnapshotEntry>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let entries: Vec<SnapshotEntry> = serde_json::from_str(&text)
        .with_context(|| format!("parsing snapshot {}", path.display()))?;

    ensure!(!entries.is_empty(), "snapshot {} is empty", path.display());
    for entry in &entries {
        ensure!(
            entry.hex.len() == 7 && entry.hex.starts_with('#'),
            "bad hex {:?} in snapshot",
            entry.hex
        );
    }

    Ok(entries)
}
