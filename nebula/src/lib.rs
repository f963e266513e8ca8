//! Thermal energetics of ionized nebulae from H-alpha imaging
//!
//! This crate reduces an H-alpha surface-brightness FITS image to a mean
//! brightness and derives the electron density, thermal energy density, and
//! total thermal energy of the emitting gas under a fixed half-sphere model.

pub mod config;
pub mod error;
pub mod image_proc;
pub mod io;
pub mod physics;
pub mod pipeline;
pub mod report;
pub mod shared_args;

// Re-exports for easier access
pub use error::{NebulaError, Result};
pub use image_proc::{mean_brightness, ImageSummary};
pub use io::{read_halpha_image, read_image_hdu, write_image_hdus};
pub use physics::{NebulaModel, ThermalEstimate};
pub use pipeline::{run_pipeline, PipelineOutput};
pub use report::write_report;
