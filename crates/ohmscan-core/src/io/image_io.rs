use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use ndarray::Array3;

use crate::error::Result;
use crate::frame::RgbFrame;

/// Load an image file into an 8-bit RGB frame.
pub fn load_rgb(path: &Path) -> Result<RgbFrame> {
    let img = image::open(path)?;
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    let mut data = Array3::<u8>::zeros((h as usize, w as usize, 3));

    for row in 0..h as usize {
        for col in 0..w as usize {
            let pixel = rgb.get_pixel(col as u32, row as u32);
            for ch in 0..3 {
                data[[row, col, ch]] = pixel.0[ch];
            }
        }
    }

    Ok(RgbFrame::new(data))
}

/// Save an RGB frame as an 8-bit PNG.
pub fn save_png(frame: &RgbFrame, path: &Path) -> Result<()> {
    to_image(frame).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save an RGB frame, choosing the format from the file extension
/// (PNG when there is none).
pub fn save_rgb(frame: &RgbFrame, path: &Path) -> Result<()> {
    match path.extension() {
        Some(_) => to_image(frame).save(path)?,
        None => save_png(frame, path)?,
    }
    Ok(())
}

fn to_image(frame: &RgbFrame) -> RgbImage {
    let h = frame.height();
    let w = frame.width();

    let mut img = RgbImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            img.put_pixel(col as u32, row as u32, Rgb(frame.pixel(row, col)));
        }
    }
    img
}
