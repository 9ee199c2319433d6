mod common;

use common::rgb_frame;
use ohmscan_core::overlay::{draw_segment, draw_window_outline};
use ohmscan_core::roi::{Segment, WindowRect};

const RED: [u8; 3] = [255, 0, 0];
const BG: [u8; 3] = [40, 40, 40];

#[test]
fn test_outline_paints_the_border() {
    let frame = rgb_frame(80, 240, BG);
    let rect = WindowRect::centered(240, 80).unwrap();
    let out = draw_window_outline(&frame, &rect, RED, 2);

    // Corners and edge midpoints of the window border.
    assert_eq!(out.pixel(20, 60), RED);
    assert_eq!(out.pixel(20, 120), RED);
    assert_eq!(out.pixel(59, 179), RED);
    assert_eq!(out.pixel(40, 60), RED);
    assert_eq!(out.pixel(40, 179), RED);

    // Thickness 2 extends one pixel inward.
    assert_eq!(out.pixel(21, 120), RED);

    // Window interior and far corners stay untouched.
    assert_eq!(out.pixel(40, 120), BG);
    assert_eq!(out.pixel(0, 0), BG);
    assert_eq!(out.pixel(79, 239), BG);
}

#[test]
fn test_original_frame_is_not_mutated() {
    let frame = rgb_frame(80, 240, BG);
    let rect = WindowRect::centered(240, 80).unwrap();
    let _ = draw_window_outline(&frame, &rect, RED, 2);
    assert_eq!(frame.pixel(20, 60), BG);
}

#[test]
fn test_segment_is_clipped_to_frame() {
    let mut frame = rgb_frame(10, 10, BG);
    // Bottom edge with a thickness that would spill past the last row.
    let segment = Segment {
        start: (0, 9),
        end: (9, 9),
    };
    draw_segment(&mut frame, &segment, RED, 3);
    assert_eq!(frame.pixel(9, 5), RED);
    assert_eq!(frame.pixel(8, 5), BG);
}
