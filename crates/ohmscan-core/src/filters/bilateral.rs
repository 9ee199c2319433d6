use ndarray::Array3;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::frame::RgbFrame;

/// Edge-preserving bilateral filter over an RGB frame.
///
/// Each output pixel is a weighted average of its neighborhood where the
/// weight is the product of a spatial Gaussian (pixel distance) and a color
/// Gaussian (L1 color distance). Uniform areas are smoothed while strong
/// color edges keep their neighbors' contributions near zero.
pub fn bilateral_filter(
    frame: &RgbFrame,
    diameter: usize,
    sigma_color: f32,
    sigma_space: f32,
) -> RgbFrame {
    let (h, w, _) = frame.data.dim();
    let radius = (diameter / 2) as isize;

    let spatial = make_spatial_weights(radius, sigma_space);
    let color = make_color_weights(sigma_color);

    let rows: Vec<Vec<[u8; 3]>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h)
            .into_par_iter()
            .map(|row| filter_row(frame, row, radius, &spatial, &color))
            .collect()
    } else {
        (0..h)
            .map(|row| filter_row(frame, row, radius, &spatial, &color))
            .collect()
    };

    let mut data = Array3::<u8>::zeros((h, w, 3));
    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, px) in row_data.into_iter().enumerate() {
            for ch in 0..3 {
                data[[row, col, ch]] = px[ch];
            }
        }
    }
    RgbFrame::new(data)
}

fn filter_row(
    frame: &RgbFrame,
    row: usize,
    radius: isize,
    spatial: &[f32],
    color: &[f32],
) -> Vec<[u8; 3]> {
    let (h, w, _) = frame.data.dim();
    let side = (2 * radius + 1) as usize;

    (0..w)
        .map(|col| {
            let center = frame.pixel(row, col);
            let mut sum = [0.0f32; 3];
            let mut weight_sum = 0.0f32;

            for dr in -radius..=radius {
                for dc in -radius..=radius {
                    let src_row = (row as isize + dr).clamp(0, h as isize - 1) as usize;
                    let src_col = (col as isize + dc).clamp(0, w as isize - 1) as usize;
                    let neighbor = frame.pixel(src_row, src_col);

                    let l1 = center
                        .iter()
                        .zip(neighbor.iter())
                        .map(|(&a, &b)| (a as i32 - b as i32).unsigned_abs() as usize)
                        .sum::<usize>();
                    let spatial_idx = (dr + radius) as usize * side + (dc + radius) as usize;
                    let weight = spatial[spatial_idx] * color[l1];

                    for ch in 0..3 {
                        sum[ch] += neighbor[ch] as f32 * weight;
                    }
                    weight_sum += weight;
                }
            }

            let mut out = [0u8; 3];
            for ch in 0..3 {
                out[ch] = (sum[ch] / weight_sum).round().clamp(0.0, 255.0) as u8;
            }
            out
        })
        .collect()
}

fn make_spatial_weights(radius: isize, sigma_space: f32) -> Vec<f32> {
    let side = (2 * radius + 1) as usize;
    let s2 = 2.0 * sigma_space * sigma_space;
    let mut weights = vec![0.0f32; side * side];

    for dr in -radius..=radius {
        for dc in -radius..=radius {
            let d2 = (dr * dr + dc * dc) as f32;
            weights[(dr + radius) as usize * side + (dc + radius) as usize] = (-d2 / s2).exp();
        }
    }
    weights
}

/// Weight lookup table indexed by L1 color distance (0..=765 for 3 channels).
fn make_color_weights(sigma_color: f32) -> Vec<f32> {
    let s2 = 2.0 * sigma_color * sigma_color;
    (0..=3 * 255)
        .map(|d| {
            let d = d as f32;
            (-d * d / s2).exp()
        })
        .collect()
}
