use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BILATERAL_SIGMA_COLOR, DEFAULT_BILATERAL_SIGMA_SPACE, DEFAULT_MERGE_RADIUS,
    DEFAULT_MIN_BAND_AREA,
};

/// How to resolve two band candidates whose centroids fall within the
/// merge radius of each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergePolicy {
    /// A strictly larger-area candidate replaces the nearby slot entry;
    /// equal or smaller candidates are dropped.
    #[default]
    KeepLargest,
    /// The first entry stored for a slot wins; later nearby candidates are
    /// always dropped, whatever their area.
    KeepExisting,
}

/// Configuration for band detection in a single frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Near-duplicate slot resolution policy.
    #[serde(default)]
    pub merge_policy: MergePolicy,
    /// Regions with pixel area at or below this count are rejected as noise.
    #[serde(default = "default_min_band_area")]
    pub min_band_area: usize,
    /// Centroids closer than this (pixels) share one slot.
    #[serde(default = "default_merge_radius")]
    pub merge_radius: i32,
    /// Bilateral filter color sigma.
    #[serde(default = "default_sigma_color")]
    pub sigma_color: f32,
    /// Bilateral filter spatial sigma.
    #[serde(default = "default_sigma_space")]
    pub sigma_space: f32,
}

fn default_min_band_area() -> usize {
    DEFAULT_MIN_BAND_AREA
}
fn default_merge_radius() -> i32 {
    DEFAULT_MERGE_RADIUS
}
fn default_sigma_color() -> f32 {
    DEFAULT_BILATERAL_SIGMA_COLOR
}
fn default_sigma_space() -> f32 {
    DEFAULT_BILATERAL_SIGMA_SPACE
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            merge_policy: MergePolicy::default(),
            min_band_area: DEFAULT_MIN_BAND_AREA,
            merge_radius: DEFAULT_MERGE_RADIUS,
            sigma_color: DEFAULT_BILATERAL_SIGMA_COLOR,
            sigma_space: DEFAULT_BILATERAL_SIGMA_SPACE,
        }
    }
}
