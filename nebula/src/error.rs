//! Error taxonomy for the H-alpha energetics pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an image or deriving physical quantities
#[derive(Error, Debug)]
pub enum NebulaError {
    /// Input path does not exist or is not a regular file
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// FITS container is unreadable or the requested HDU is missing or malformed
    #[error("Invalid FITS data: {0}")]
    Format(String),
    /// A statistic is undefined for the given input (e.g. mean of an empty array)
    #[error("Computation error: {0}")]
    Computation(String),
    /// Input lies outside the domain of a physical formula
    #[error("Domain error: {0}")]
    Domain(String),
    /// Model configuration could not be read or written
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<fitsio::errors::Error> for NebulaError {
    fn from(err: fitsio::errors::Error) -> Self {
        NebulaError::Format(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NebulaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = NebulaError::FileNotFound(PathBuf::from("missing.fits"));
        assert_eq!(error.to_string(), "File not found: missing.fits");

        let error = NebulaError::Format("HDU 1 not present".to_string());
        assert!(error.to_string().contains("Invalid FITS data: HDU 1"));

        let error = NebulaError::Domain("negative intensity".to_string());
        assert!(error.to_string().starts_with("Domain error"));
    }
}
