//! Image statistics used to reduce an H-alpha map to a surface brightness.

pub mod stats;

pub use stats::{mean_brightness, ImageSummary};
