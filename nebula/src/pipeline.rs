//! Image-to-energetics pipeline: load, average, derive.

use crate::error::Result;
use crate::image_proc::ImageSummary;
use crate::io::read_image_hdu;
use crate::physics::{NebulaModel, ThermalEstimate};
use log::{debug, info, warn};
use std::path::Path;

/// Everything produced by one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub summary: ImageSummary,
    pub estimate: ThermalEstimate,
}

/// Load the image in `hdu_index` of `path`, average it, and derive the energetics.
///
/// NaN pixels are not masked: they produce a NaN estimate, logged as a warning.
/// Any loader, estimator, or calculator error aborts the run.
pub fn run_pipeline<P: AsRef<Path>>(
    path: P,
    hdu_index: usize,
    model: &NebulaModel,
) -> Result<PipelineOutput> {
    let path = path.as_ref();
    let image = read_image_hdu(path, hdu_index)?;
    let (height, width) = image.dim();
    info!(
        "Loaded {width}x{height} image from HDU {hdu_index} of {}",
        path.display()
    );

    let summary = ImageSummary::from_image(&image)?;
    drop(image);
    debug!(
        "Pixel stats: count={} nan={} min={:?} max={:?} mean={}",
        summary.pixel_count, summary.nan_count, summary.min, summary.max, summary.mean
    );
    if summary.has_nan() {
        warn!(
            "{} of {} pixels are NaN; derived quantities will be NaN",
            summary.nan_count, summary.pixel_count
        );
    }

    let estimate = ThermalEstimate::from_brightness(summary.mean, model)?;
    debug!(
        "n_e={} E_density={} volume={} E_total={}",
        estimate.electron_density,
        estimate.energy_density,
        estimate.volume_cm3,
        estimate.total_energy
    );

    Ok(PipelineOutput { summary, estimate })
}
