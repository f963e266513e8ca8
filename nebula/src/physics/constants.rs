//! Physical constants in CGS units for nebular energetics
//!
//! Values are the rounded literals conventionally used for quick H II region
//! estimates, not CODATA values.

/// Physical constants in CGS units.
pub struct CGS {}

impl CGS {
    /// Boltzmann constant
    /// Units: erg K⁻¹
    pub const BOLTZMANN_CONSTANT: f64 = 1.38e-16;

    /// One parsec
    /// Units: cm
    pub const PARSEC: f64 = 3.086e18;
}

/// Constants for converting H-alpha surface brightness to electron density.
pub struct HAlpha {}

impl HAlpha {
    /// Square arcseconds per steradian
    pub const ARCSEC2_PER_SR: f64 = 4.25e10;

    /// Effective recombination coefficient used to turn emission measure into n_e²
    pub const RECOMBINATION_COEFFICIENT: f64 = 1.36e-12;
}

/// Electron temperature typical of photoionized gas
/// Units: K
pub const TYPICAL_HII_TEMPERATURE_K: f64 = 10_000.0;

/// Radius adopted for NGC 7538
/// Units: pc
pub const NGC7538_RADIUS_PC: f64 = 2.45447;
