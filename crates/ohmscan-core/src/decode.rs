use std::collections::BTreeMap;

use tracing::debug;

use crate::color::ColorCode;
use crate::consts::{BAND_COUNT, MAX_DISPLAY_OHMS};
use crate::detect::Slot;

/// A decoded resistance reading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reading {
    /// Resistance in ohms.
    pub ohms: u64,
    /// The three band colors consumed, left to right
    /// (tens digit, units digit, multiplier power).
    pub bands: [ColorCode; BAND_COUNT],
    /// Human-readable value with unit suffix, e.g. "47 Kohm".
    pub label: String,
}

/// Decode the three left-most band slots into a resistance value.
///
/// Returns `None` when fewer than three slots were detected, or when the
/// decoded value exceeds the plausibility ceiling (likely a misdetection).
pub fn decode(slots: &BTreeMap<i32, Slot>) -> Option<Reading> {
    if slots.len() < BAND_COUNT {
        return None;
    }

    let mut bands = [ColorCode::Black; BAND_COUNT];
    for (band, slot) in bands.iter_mut().zip(slots.values()) {
        *band = slot.code;
    }

    let tens = bands[0].digit() as u64;
    let units = bands[1].digit() as u64;
    let power = bands[2].digit();
    let ohms = (10 * tens + units) * 10u64.pow(power);

    if ohms > MAX_DISPLAY_OHMS {
        debug!(ohms, "reading above plausibility ceiling, suppressed");
        return None;
    }

    Some(Reading {
        ohms,
        bands,
        label: format_ohms(ohms),
    })
}

/// Format a resistance with a Kohm/Mohm suffix where appropriate.
/// Whole scaled values print without a decimal point ("47 Kohm"),
/// fractional ones keep it ("4.7 Kohm").
pub fn format_ohms(ohms: u64) -> String {
    if ohms >= 1_000_000 {
        format!("{} Mohm", format_scaled(ohms as f64 / 1e6))
    } else if ohms >= 1_000 {
        format!("{} Kohm", format_scaled(ohms as f64 / 1e3))
    } else {
        format!("{ohms} ohm")
    }
}

fn format_scaled(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as u64)
    } else {
        format!("{value}")
    }
}
