//! Surface-brightness statistics over H-alpha images
//!
//! The mean brightness is deliberately unmasked: every pixel, including NaN and
//! negative sky-subtracted values, contributes equally. A single NaN pixel
//! therefore turns the mean (and every quantity derived from it) into NaN.

use crate::error::{NebulaError, Result};
use ndarray::{ArrayBase, Data, Dimension};

/// Unweighted arithmetic mean of every pixel in the image.
///
/// # Errors
/// Returns `NebulaError::Computation` when the image has no pixels, since the
/// mean of zero elements is undefined.
pub fn mean_brightness<S, D>(image: &ArrayBase<S, D>) -> Result<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    image.mean().ok_or_else(|| {
        NebulaError::Computation(format!(
            "mean brightness undefined for empty image of shape {:?}",
            image.shape()
        ))
    })
}

/// Diagnostic summary of an image's pixel values
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSummary {
    /// Total number of pixels, NaN included
    pub pixel_count: usize,
    /// Number of NaN pixels
    pub nan_count: usize,
    /// Smallest non-NaN pixel, `None` if every pixel is NaN
    pub min: Option<f64>,
    /// Largest non-NaN pixel, `None` if every pixel is NaN
    pub max: Option<f64>,
    /// Unmasked mean, identical to [`mean_brightness`]
    pub mean: f64,
}

impl ImageSummary {
    /// Scan the image once for min, max and NaN count, then take the unmasked mean.
    pub fn from_image<S, D>(image: &ArrayBase<S, D>) -> Result<Self>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let mean = mean_brightness(image)?;

        let mut min: Option<f64> = None;
        let mut max: Option<f64> = None;
        let mut nan_count = 0;

        for &value in image.iter() {
            if value.is_nan() {
                nan_count += 1;
                continue;
            }
            min = Some(min.map_or(value, |m| m.min(value)));
            max = Some(max.map_or(value, |m| m.max(value)));
        }

        Ok(Self {
            pixel_count: image.len(),
            nan_count,
            min,
            max,
            mean,
        })
    }

    /// True if any pixel was NaN, meaning the mean is NaN as well
    pub fn has_nan(&self) -> bool {
        self.nan_count > 0
    }
}
