use ndarray::Array3;

use crate::frame::{HsvFrame, RgbFrame};

/// Convert an RGB triple to HSV on the OpenCV byte scale:
/// hue in half-degrees 0..=180, saturation and value 0..=255.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };
    let h = if h < 0.0 { h + 360.0 } else { h };

    let s = if max == 0.0 { 0.0 } else { delta / max };

    [
        (h / 2.0).round() as u8,
        (s * 255.0).round() as u8,
        (max * 255.0).round() as u8,
    ]
}

/// Convert a whole RGB frame to HSV.
pub fn rgb_frame_to_hsv(frame: &RgbFrame) -> HsvFrame {
    let (h, w, _) = frame.data.dim();
    let mut data = Array3::<u8>::zeros((h, w, 3));

    for row in 0..h {
        for col in 0..w {
            let [hue, sat, val] = {
                let px = frame.pixel(row, col);
                rgb_to_hsv(px[0], px[1], px[2])
            };
            data[[row, col, 0]] = hue;
            data[[row, col, 1]] = sat;
            data[[row, col, 2]] = val;
        }
    }

    HsvFrame::new(data)
}
