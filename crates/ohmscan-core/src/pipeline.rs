use tracing::info;

use crate::decode::{decode, Reading};
use crate::detect::{detect_bands, DetectorConfig};
use crate::error::Result;
use crate::frame::RgbFrame;
use crate::roi::{preprocess, WindowRect};

/// Per-frame analysis output handed back to the presentation layer.
#[derive(Clone, Debug)]
pub struct FrameAnalysis {
    /// The decoded reading, if at least three bands resolved to a
    /// plausible value this frame.
    pub reading: Option<Reading>,
    /// The analysis window in full-frame coordinates; its outline is
    /// what the presentation layer draws over the frame.
    pub window: WindowRect,
}

/// Run the full per-frame pipeline: window selection and preprocessing,
/// per-color band detection and value decoding.
///
/// Stateless across calls; every working buffer is allocated fresh per
/// invocation. The only fatal condition is a frame too small to contain
/// the analysis window.
pub fn scan_frame(frame: &RgbFrame, config: &DetectorConfig) -> Result<FrameAnalysis> {
    let (hsv, window) = preprocess(frame, config)?;
    let slots = detect_bands(&hsv, config);
    let reading = decode(&slots);

    match &reading {
        Some(r) => info!(ohms = r.ohms, label = %r.label, "resistor value decoded"),
        None => info!(slots = slots.len(), "no resistor value this frame"),
    }

    Ok(FrameAnalysis { reading, window })
}
