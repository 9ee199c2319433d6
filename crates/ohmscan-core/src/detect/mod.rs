pub mod bands;
pub mod components;
pub mod config;
pub mod mask;

pub use bands::{detect_bands, Slot};
pub use config::{DetectorConfig, MergePolicy};
