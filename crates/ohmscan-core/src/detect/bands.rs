use std::collections::BTreeMap;

use tracing::debug;

use crate::color::{color_table, ColorCode};
use crate::frame::HsvFrame;

use super::components::connected_regions;
use super::config::{DetectorConfig, MergePolicy};
use super::mask::color_mask;

/// Winning candidate for one horizontal band slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub code: ColorCode,
    pub area: usize,
}

/// Detect colored band slots in a preprocessed HSV window.
///
/// Runs one masking pass per color in the code table, extracts connected
/// regions, drops regions at or below the noise area threshold and merges
/// near-duplicate centroids into a single slot. The returned map is keyed
/// by horizontal centroid, so iteration yields bands left to right.
pub fn detect_bands(hsv: &HsvFrame, config: &DetectorConfig) -> BTreeMap<i32, Slot> {
    let mut slots = BTreeMap::new();

    for spec in color_table() {
        let mask = color_mask(hsv, spec);
        let regions = connected_regions(&mask);

        for region in &regions {
            if region.area <= config.min_band_area {
                continue;
            }
            let cx = region.cx() as i32;
            place_candidate(&mut slots, cx, spec.code, region.area, config);
        }

        debug!(color = %spec.code, regions = regions.len(), "color pass complete");
    }

    debug!(slots = slots.len(), "band detection complete");
    slots
}

/// Insert a candidate into the slot map, resolving near-duplicates.
///
/// A color band split into multiple regions (or caught by more than one
/// color pass) yields several centroids within a few pixels of each other;
/// those are treated as one physical band per the configured policy.
fn place_candidate(
    slots: &mut BTreeMap<i32, Slot>,
    cx: i32,
    code: ColorCode,
    area: usize,
    config: &DetectorConfig,
) {
    let nearby = slots
        .keys()
        .copied()
        .find(|key| (key - cx).abs() < config.merge_radius);

    match nearby {
        Some(key) => match config.merge_policy {
            MergePolicy::KeepExisting => {}
            MergePolicy::KeepLargest => {
                if area > slots[&key].area {
                    slots.remove(&key);
                    slots.insert(cx, Slot { code, area });
                }
            }
        },
        None => {
            slots.insert(cx, Slot { code, area });
        }
    }
}
