mod common;

use common::{rgb_frame, HSV_BACKGROUND, RGB_BACKGROUND};
use ohmscan_core::detect::DetectorConfig;
use ohmscan_core::error::ScanError;
use ohmscan_core::frame::RgbFrame;
use ohmscan_core::roi::{crop_window, preprocess, WindowRect};

// ---------------------------------------------------------------------------
// WindowRect::centered
// ---------------------------------------------------------------------------

#[test]
fn test_window_is_centered() {
    let rect = WindowRect::centered(240, 80).unwrap();
    assert_eq!(
        rect,
        WindowRect {
            x: 60,
            y: 20,
            width: 120,
            height: 40
        }
    );
}

#[test]
fn test_window_fits_exactly() {
    let rect = WindowRect::centered(120, 40).unwrap();
    assert_eq!(rect.x, 0);
    assert_eq!(rect.y, 0);
}

#[test]
fn test_window_on_odd_dimensions() {
    let rect = WindowRect::centered(121, 41).unwrap();
    assert_eq!(rect.x, 0);
    assert_eq!(rect.y, 0);
    assert_eq!(rect.width, 120);
    assert_eq!(rect.height, 40);
}

#[test]
fn test_frame_too_narrow_is_rejected() {
    let err = WindowRect::centered(119, 200).unwrap_err();
    assert!(matches!(err, ScanError::FrameTooSmall { .. }));
}

#[test]
fn test_frame_too_short_is_rejected() {
    let err = WindowRect::centered(640, 39).unwrap_err();
    assert!(matches!(err, ScanError::FrameTooSmall { .. }));
}

// ---------------------------------------------------------------------------
// Outline
// ---------------------------------------------------------------------------

#[test]
fn test_outline_segments_trace_the_border() {
    let rect = WindowRect::centered(240, 80).unwrap();
    let [top, bottom, left, right] = rect.outline();

    assert_eq!(top.start, (60, 20));
    assert_eq!(top.end, (179, 20));
    assert_eq!(bottom.start, (60, 59));
    assert_eq!(bottom.end, (179, 59));
    assert_eq!(left.start, (60, 20));
    assert_eq!(left.end, (60, 59));
    assert_eq!(right.start, (179, 20));
    assert_eq!(right.end, (179, 59));
}

// ---------------------------------------------------------------------------
// crop_window
// ---------------------------------------------------------------------------

#[test]
fn test_crop_extracts_window_pixels() {
    // Encode each pixel's absolute position into its color.
    let frame = RgbFrame::from_fn(80, 240, |row, col| [row as u8, col as u8, 7]);
    let rect = WindowRect::centered(240, 80).unwrap();
    let cropped = crop_window(&frame, &rect);

    assert_eq!(cropped.height(), 40);
    assert_eq!(cropped.width(), 120);
    assert_eq!(cropped.pixel(0, 0), [20, 60, 7]);
    assert_eq!(cropped.pixel(39, 119), [59, 179, 7]);
}

// ---------------------------------------------------------------------------
// preprocess
// ---------------------------------------------------------------------------

#[test]
fn test_preprocess_rejects_small_frame() {
    let frame = rgb_frame(30, 100, RGB_BACKGROUND);
    let err = preprocess(&frame, &DetectorConfig::default()).unwrap_err();
    assert!(matches!(err, ScanError::FrameTooSmall { .. }));
}

#[test]
fn test_preprocess_yields_hsv_window() {
    let frame = rgb_frame(80, 240, RGB_BACKGROUND);
    let (hsv, rect) = preprocess(&frame, &DetectorConfig::default()).unwrap();

    assert_eq!(rect, WindowRect::centered(240, 80).unwrap());
    assert_eq!(hsv.height(), 40);
    assert_eq!(hsv.width(), 120);
    // Uniform input stays uniform through the bilateral filter.
    assert_eq!(hsv.pixel(20, 60), HSV_BACKGROUND);
}
