pub mod code;
pub mod convert;

pub use code::{color_table, ColorCode, ColorSpec, HsvRange};
pub use convert::{rgb_frame_to_hsv, rgb_to_hsv};
