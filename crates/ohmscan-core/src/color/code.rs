use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the ten standard resistor band colors, in digit order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorCode {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Gray,
    White,
}

impl ColorCode {
    /// Digit encoded by this band color (black = 0 .. white = 9).
    pub fn digit(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorCode::Black => "black",
            ColorCode::Brown => "brown",
            ColorCode::Red => "red",
            ColorCode::Orange => "orange",
            ColorCode::Yellow => "yellow",
            ColorCode::Green => "green",
            ColorCode::Blue => "blue",
            ColorCode::Purple => "purple",
            ColorCode::Gray => "gray",
            ColorCode::White => "white",
        }
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive HSV bounds on the OpenCV byte scale
/// (hue in half-degrees 0..=180, saturation and value 0..=255).
#[derive(Clone, Copy, Debug)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvRange {
    pub const fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        hsv.iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .all(|(&v, (&lo, &hi))| v >= lo && v <= hi)
    }
}

/// A band color together with the HSV range(s) that classify it.
/// Red carries two disjoint hue ranges because hue wraps at 0/360.
#[derive(Clone, Copy, Debug)]
pub struct ColorSpec {
    pub code: ColorCode,
    pub ranges: &'static [HsvRange],
}

impl ColorSpec {
    pub fn matches(&self, hsv: [u8; 3]) -> bool {
        self.ranges.iter().any(|r| r.contains(hsv))
    }
}

/// The fixed color-code lookup table, in digit order 0..=9.
pub fn color_table() -> &'static [ColorSpec; 10] {
    &COLOR_TABLE
}

static COLOR_TABLE: [ColorSpec; 10] = [
    ColorSpec {
        code: ColorCode::Black,
        ranges: &[HsvRange::new([0, 0, 0], [180, 250, 50])],
    },
    ColorSpec {
        code: ColorCode::Brown,
        ranges: &[HsvRange::new([0, 31, 41], [25, 250, 99])],
    },
    // Red straddles the hue wrap point, so it is the union of a low and
    // a high hue band.
    ColorSpec {
        code: ColorCode::Red,
        ranges: &[
            HsvRange::new([0, 65, 60], [8, 100, 100]),
            HsvRange::new([158, 65, 50], [180, 250, 150]),
        ],
    },
    ColorSpec {
        code: ColorCode::Orange,
        ranges: &[HsvRange::new([7, 150, 150], [18, 250, 250])],
    },
    ColorSpec {
        code: ColorCode::Yellow,
        ranges: &[HsvRange::new([25, 130, 100], [34, 250, 160])],
    },
    ColorSpec {
        code: ColorCode::Green,
        ranges: &[HsvRange::new([35, 60, 60], [75, 250, 150])],
    },
    ColorSpec {
        code: ColorCode::Blue,
        ranges: &[HsvRange::new([80, 50, 50], [106, 250, 150])],
    },
    ColorSpec {
        code: ColorCode::Purple,
        ranges: &[HsvRange::new([130, 60, 50], [165, 250, 150])],
    },
    ColorSpec {
        code: ColorCode::Gray,
        ranges: &[HsvRange::new([0, 0, 50], [180, 50, 80])],
    },
    ColorSpec {
        code: ColorCode::White,
        ranges: &[HsvRange::new([0, 0, 90], [180, 15, 140])],
    },
];
