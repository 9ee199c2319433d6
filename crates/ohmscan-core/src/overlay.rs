use crate::frame::RgbFrame;
use crate::roi::{Segment, WindowRect};

/// Draw the analysis window border onto a copy of the frame.
pub fn draw_window_outline(
    frame: &RgbFrame,
    rect: &WindowRect,
    color: [u8; 3],
    thickness: usize,
) -> RgbFrame {
    let mut out = frame.clone();
    for segment in rect.outline() {
        draw_segment(&mut out, &segment, color, thickness);
    }
    out
}

/// Draw an axis-aligned segment with the given stroke thickness.
/// Endpoints are inclusive; the stroke extends down/right and is clipped
/// to the frame.
pub fn draw_segment(frame: &mut RgbFrame, segment: &Segment, color: [u8; 3], thickness: usize) {
    let (x0, y0) = segment.start;
    let (x1, y1) = segment.end;
    let t = thickness.max(1);

    if y0 == y1 {
        for col in x0.min(x1)..=x0.max(x1).min(frame.width() - 1) {
            for row in y0..(y0 + t).min(frame.height()) {
                frame.set_pixel(row, col, color);
            }
        }
    } else if x0 == x1 {
        for row in y0.min(y1)..=y0.max(y1).min(frame.height() - 1) {
            for col in x0..(x0 + t).min(frame.width()) {
                frame.set_pixel(row, col, color);
            }
        }
    }
}
