//! I/O utilities for H-alpha image import and export

pub mod fits;

pub use fits::{read_halpha_image, read_image_hdu, write_image_hdus, HALPHA_HDU_INDEX};
