//! FITS image I/O for H-alpha surface-brightness maps
//!
//! Reads a single 2D image HDU into an `Array2<f64>` and writes named image
//! extensions behind an empty primary HDU, which is the layout produced by
//! most narrow-band imaging reductions (primary header, data in HDU 1).

use crate::error::{NebulaError, Result};
use fitsio::hdu::HduInfo;
use fitsio::images::{ImageDescription, ImageType};
use fitsio::FitsFile;
use log::debug;
use ndarray::{s, Array2};
use std::path::Path;

/// HDU index holding the H-alpha surface-brightness map (the first extension)
pub const HALPHA_HDU_INDEX: usize = 1;

/// Read the image stored in the given HDU as a 2D array of f64 pixels.
///
/// The file handle is owned by this function and closed on every return path.
/// Rows are flipped so that row 0 is the top of the image (FITS origin is
/// bottom-left, ndarray origin is top-left).
///
/// # Errors
/// * `NebulaError::FileNotFound` - `path` does not name a regular file
/// * `NebulaError::Format` - the file is not FITS, the HDU does not exist,
///   is not an image, or is not two-dimensional
pub fn read_image_hdu<P: AsRef<Path>>(path: P, hdu_index: usize) -> Result<Array2<f64>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(NebulaError::FileNotFound(path.to_path_buf()));
    }

    let mut fptr = FitsFile::open(path)?;
    debug!("Opened {} and seeking HDU {hdu_index}", path.display());

    let hdu = fptr.hdu(hdu_index).map_err(|e| {
        NebulaError::Format(format!(
            "HDU {hdu_index} not present in {}: {e}",
            path.display()
        ))
    })?;

    if !matches!(hdu.info, HduInfo::ImageInfo { .. }) {
        return Err(NebulaError::Format(format!(
            "HDU {hdu_index} in {} is not an image",
            path.display()
        )));
    }

    let naxis = hdu.read_key::<i64>(&mut fptr, "NAXIS")?;
    if naxis != 2 {
        return Err(NebulaError::Format(format!(
            "HDU {hdu_index} has NAXIS = {naxis}, expected a 2D image"
        )));
    }

    let naxis1 = hdu.read_key::<i64>(&mut fptr, "NAXIS1")? as usize;
    let naxis2 = hdu.read_key::<i64>(&mut fptr, "NAXIS2")? as usize;
    let image_data: Vec<f64> = hdu.read_image(&mut fptr)?;

    let fits_array = Array2::from_shape_vec((naxis2, naxis1), image_data).map_err(|e| {
        NebulaError::Format(format!(
            "Cannot reshape HDU {hdu_index} to {naxis2}x{naxis1}: {e}"
        ))
    })?;

    Ok(fits_array.slice(s![..;-1, ..]).to_owned())
}

/// Read the H-alpha map from its conventional location (HDU 1).
pub fn read_halpha_image<P: AsRef<Path>>(path: P) -> Result<Array2<f64>> {
    read_image_hdu(path, HALPHA_HDU_INDEX)
}

/// Write images as consecutive named extensions after an empty primary HDU.
///
/// The first image lands in HDU 1, the second in HDU 2, and so on. An existing
/// file at `path` is overwritten. Passing no images produces a primary-only file.
pub fn write_image_hdus<P: AsRef<Path>>(images: &[(&str, &Array2<f64>)], path: P) -> Result<()> {
    let mut fptr = FitsFile::create(path.as_ref()).overwrite().open()?;

    for (name, array) in images {
        let (height, width) = array.dim();
        let image_description = ImageDescription {
            data_type: ImageType::Double,
            dimensions: &[height, width],
        };

        let hdu = fptr.create_image(name.to_string(), &image_description)?;
        let flipped = array.slice(s![..;-1, ..]);
        let flat_data: Vec<f64> = flipped.iter().copied().collect();
        hdu.write_image(&mut fptr, &flat_data)?;
    }

    Ok(())
}
