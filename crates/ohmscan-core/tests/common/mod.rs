use std::ops::Range;

use ndarray::Array3;

use ohmscan_core::frame::{HsvFrame, RgbFrame};

/// Build an HSV window filled with one background pixel value.
pub fn hsv_window(height: usize, width: usize, bg: [u8; 3]) -> HsvFrame {
    let mut data = Array3::<u8>::zeros((height, width, 3));
    for row in 0..height {
        for col in 0..width {
            for ch in 0..3 {
                data[[row, col, ch]] = bg[ch];
            }
        }
    }
    HsvFrame::new(data)
}

/// Paint an axis-aligned block of HSV pixels.
pub fn paint_hsv_block(frame: &mut HsvFrame, rows: Range<usize>, cols: Range<usize>, px: [u8; 3]) {
    for row in rows {
        for col in cols.clone() {
            for ch in 0..3 {
                frame.data[[row, col, ch]] = px[ch];
            }
        }
    }
}

/// Build an RGB frame filled with one color.
pub fn rgb_frame(height: usize, width: usize, px: [u8; 3]) -> RgbFrame {
    RgbFrame::from_fn(height, width, |_, _| px)
}

/// Paint a full-height vertical band of RGB pixels.
pub fn paint_rgb_band(frame: &mut RgbFrame, cols: Range<usize>, px: [u8; 3]) {
    let height = frame.height();
    for row in 0..height {
        for col in cols.clone() {
            frame.set_pixel(row, col, px);
        }
    }
}

/// Background HSV pixel no entry of the color table claims
/// (saturation above every range's upper bound).
pub const HSV_BACKGROUND: [u8; 3] = [90, 255, 255];

/// Pure cyan: converts to `HSV_BACKGROUND` and matches no band color.
pub const RGB_BACKGROUND: [u8; 3] = [0, 255, 255];

/// Converts to HSV [30, 204, 150], inside the yellow range (digit 4).
pub const RGB_YELLOW: [u8; 3] = [150, 150, 30];

/// Converts to HSV [144, 182, 140], inside the purple range (digit 7).
pub const RGB_PURPLE: [u8; 3] = [120, 40, 140];

/// Converts to HSV [13, 209, 220], inside the orange range (digit 3).
pub const RGB_ORANGE: [u8; 3] = [220, 120, 40];
