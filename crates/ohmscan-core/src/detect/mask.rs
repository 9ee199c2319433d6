use ndarray::Array2;

use crate::color::ColorSpec;
use crate::frame::HsvFrame;

/// Binary mask of the pixels falling inside any of the color's HSV ranges.
pub fn color_mask(hsv: &HsvFrame, spec: &ColorSpec) -> Array2<bool> {
    let (h, w) = (hsv.height(), hsv.width());
    let mut mask = Array2::from_elem((h, w), false);

    for row in 0..h {
        for col in 0..w {
            mask[[row, col]] = spec.matches(hsv.pixel(row, col));
        }
    }

    mask
}
