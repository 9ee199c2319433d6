/// Half-width (in pixels) of the centered analysis window.
pub const WINDOW_HALF_WIDTH: usize = 60;

/// Half-height (in pixels) of the centered analysis window.
pub const WINDOW_HALF_HEIGHT: usize = 20;

/// Kernel diameter of the edge-preserving bilateral filter.
pub const BILATERAL_DIAMETER: usize = 5;

/// Default color sigma for the bilateral filter (intensity distance falloff).
pub const DEFAULT_BILATERAL_SIGMA_COLOR: f32 = 80.0;

/// Default spatial sigma for the bilateral filter (pixel distance falloff).
pub const DEFAULT_BILATERAL_SIGMA_SPACE: f32 = 80.0;

/// Regions with pixel area at or below this count are rejected as noise.
pub const DEFAULT_MIN_BAND_AREA: usize = 20;

/// Candidate centroids closer than this (in pixels) to an existing slot
/// are treated as the same physical band.
pub const DEFAULT_MERGE_RADIUS: i32 = 10;

/// Readings above this many ohms are treated as misdetections and suppressed.
pub const MAX_DISPLAY_OHMS: u64 = 1_000_000_000;

/// Number of colored bands consumed by the decoder.
pub const BAND_COUNT: usize = 3;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;
