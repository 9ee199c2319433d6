use ndarray::Array3;

/// An 8-bit RGB color frame.
/// Pixel data is channel-interleaved, shape = (height, width, 3).
#[derive(Clone, Debug)]
pub struct RgbFrame {
    pub data: Array3<u8>,
}

impl RgbFrame {
    pub fn new(data: Array3<u8>) -> Self {
        Self { data }
    }

    /// Build a frame by evaluating `f(row, col)` for every pixel.
    pub fn from_fn(height: usize, width: usize, f: impl Fn(usize, usize) -> [u8; 3]) -> Self {
        let mut data = Array3::<u8>::zeros((height, width, 3));
        for row in 0..height {
            for col in 0..width {
                let px = f(row, col);
                for ch in 0..3 {
                    data[[row, col, ch]] = px[ch];
                }
            }
        }
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        [
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
        ]
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, px: [u8; 3]) {
        for ch in 0..3 {
            self.data[[row, col, ch]] = px[ch];
        }
    }
}

/// A frame in HSV representation, OpenCV byte scale:
/// hue in half-degrees 0..=180, saturation and value 0..=255.
/// Shape = (height, width, 3).
#[derive(Clone, Debug)]
pub struct HsvFrame {
    pub data: Array3<u8>,
}

impl HsvFrame {
    pub fn new(data: Array3<u8>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        [
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
        ]
    }
}
