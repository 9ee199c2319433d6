use ndarray::s;
use tracing::debug;

use crate::color::convert::rgb_frame_to_hsv;
use crate::consts::{BILATERAL_DIAMETER, WINDOW_HALF_HEIGHT, WINDOW_HALF_WIDTH};
use crate::detect::DetectorConfig;
use crate::error::{Result, ScanError};
use crate::filters::bilateral::bilateral_filter;
use crate::frame::{HsvFrame, RgbFrame};

/// A rectangle in full-frame pixel coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// A line segment in full-frame pixel coordinates, endpoints inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub start: (usize, usize),
    pub end: (usize, usize),
}

impl WindowRect {
    /// The fixed analysis window centered on a frame of the given size.
    ///
    /// Fails with `FrameTooSmall` when the frame cannot contain the window.
    pub fn centered(frame_width: usize, frame_height: usize) -> Result<WindowRect> {
        if frame_width < 2 * WINDOW_HALF_WIDTH || frame_height < 2 * WINDOW_HALF_HEIGHT {
            return Err(ScanError::FrameTooSmall {
                width: frame_width,
                height: frame_height,
                min_width: 2 * WINDOW_HALF_WIDTH,
                min_height: 2 * WINDOW_HALF_HEIGHT,
            });
        }

        Ok(WindowRect {
            x: frame_width / 2 - WINDOW_HALF_WIDTH,
            y: frame_height / 2 - WINDOW_HALF_HEIGHT,
            width: 2 * WINDOW_HALF_WIDTH,
            height: 2 * WINDOW_HALF_HEIGHT,
        })
    }

    /// The four border segments of the window (top, bottom, left, right),
    /// as (x, y) endpoints for overlay rendering.
    pub fn outline(&self) -> [Segment; 4] {
        let left = self.x;
        let right = self.x + self.width - 1;
        let top = self.y;
        let bottom = self.y + self.height - 1;

        [
            Segment {
                start: (left, top),
                end: (right, top),
            },
            Segment {
                start: (left, bottom),
                end: (right, bottom),
            },
            Segment {
                start: (left, top),
                end: (left, bottom),
            },
            Segment {
                start: (right, top),
                end: (right, bottom),
            },
        ]
    }
}

/// Crop the window's pixels out of a full frame.
pub fn crop_window(frame: &RgbFrame, rect: &WindowRect) -> RgbFrame {
    let view = frame.data.slice(s![
        rect.y..rect.y + rect.height,
        rect.x..rect.x + rect.width,
        ..
    ]);
    RgbFrame::new(view.to_owned())
}

/// Select the centered analysis window, denoise it with an edge-preserving
/// bilateral filter and convert it to HSV for band masking.
///
/// Returns the preprocessed window and its rectangle in full-frame
/// coordinates. The caller keeps the original frame for overlay rendering.
pub fn preprocess(frame: &RgbFrame, config: &DetectorConfig) -> Result<(HsvFrame, WindowRect)> {
    let rect = WindowRect::centered(frame.width(), frame.height())?;
    let cropped = crop_window(frame, &rect);
    let filtered = bilateral_filter(
        &cropped,
        BILATERAL_DIAMETER,
        config.sigma_color,
        config.sigma_space,
    );
    let hsv = rgb_frame_to_hsv(&filtered);

    debug!(
        x = rect.x,
        y = rect.y,
        width = rect.width,
        height = rect.height,
        "analysis window preprocessed"
    );

    Ok((hsv, rect))
}
