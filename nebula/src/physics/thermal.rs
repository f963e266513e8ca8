//! Electron density and thermal energy of an ionized nebula
//!
//! Converts a mean H-alpha surface brightness into an electron density via
//! the emission measure, then into a thermal energy density `(3/2) n_e k_B T_e`
//! and a total thermal energy over a half-sphere of fixed radius.
//!
//! Formulas are evaluated in a fixed operation order; a given brightness
//! always yields bit-identical f64 results.

use super::constants::{HAlpha, CGS, NGC7538_RADIUS_PC, TYPICAL_HII_TEMPERATURE_K};
use crate::error::{NebulaError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Physical assumptions used to turn a surface brightness into energetics.
///
/// The default reproduces the NGC 7538 estimate: 10⁴ K electrons filling a
/// half-sphere of radius 2.45447 pc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NebulaModel {
    /// Multiplier taking surface brightness to emission measure (sr per arcsec²)
    pub intensity_to_emission_measure: f64,
    /// Recombination coefficient dividing the emission measure
    pub recombination_coefficient: f64,
    /// Boltzmann constant, erg K⁻¹
    pub boltzmann_constant: f64,
    /// Assumed electron temperature, K
    pub electron_temperature_k: f64,
    /// Nebula radius, pc
    pub radius_pc: f64,
    /// Length of one parsec, cm
    pub parsec_cm: f64,
}

impl Default for NebulaModel {
    fn default() -> Self {
        Self {
            intensity_to_emission_measure: 1.0 / HAlpha::ARCSEC2_PER_SR,
            recombination_coefficient: HAlpha::RECOMBINATION_COEFFICIENT,
            boltzmann_constant: CGS::BOLTZMANN_CONSTANT,
            electron_temperature_k: TYPICAL_HII_TEMPERATURE_K,
            radius_pc: NGC7538_RADIUS_PC,
            parsec_cm: CGS::PARSEC,
        }
    }
}

impl NebulaModel {
    /// Nebula radius in centimeters
    pub fn radius_cm(&self) -> f64 {
        self.radius_pc * self.parsec_cm
    }

    /// Check that every parameter is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("intensity_to_emission_measure", self.intensity_to_emission_measure),
            ("recombination_coefficient", self.recombination_coefficient),
            ("boltzmann_constant", self.boltzmann_constant),
            ("electron_temperature_k", self.electron_temperature_k),
            ("radius_pc", self.radius_pc),
            ("parsec_cm", self.parsec_cm),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(NebulaError::Config(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Electron density in cm⁻³ from a mean H-alpha surface brightness.
///
/// `n_e = sqrt((I * conversion) / recombination_coefficient)`
///
/// NaN brightness is passed through and yields a NaN density.
///
/// # Errors
/// Returns `NebulaError::Domain` for negative brightness, whose square root
/// has no physical meaning.
pub fn electron_density(mean_brightness: f64, model: &NebulaModel) -> Result<f64> {
    if mean_brightness < 0.0 {
        return Err(NebulaError::Domain(format!(
            "mean H-alpha brightness {mean_brightness} is negative; electron density undefined"
        )));
    }

    let emission_measure = mean_brightness * model.intensity_to_emission_measure;
    Ok((emission_measure / model.recombination_coefficient).sqrt())
}

/// Thermal energy density `(3/2) n_e k_B T_e` in erg cm⁻³
pub fn thermal_energy_density(electron_density: f64, model: &NebulaModel) -> f64 {
    1.5 * electron_density * model.boltzmann_constant * model.electron_temperature_k
}

/// Volume of a full sphere, cm³
pub fn sphere_volume(radius_cm: f64) -> f64 {
    4.0 * PI * radius_cm.powf(3.0) / 3.0
}

/// Total thermal energy in erg over half of a full-sphere volume.
///
/// `sphere_volume_cm3` is the full-sphere volume; it is halved here.
pub fn total_thermal_energy(energy_density: f64, sphere_volume_cm3: f64) -> f64 {
    energy_density * (sphere_volume_cm3 / 2.0)
}

/// All quantities derived from one mean surface brightness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalEstimate {
    /// Input mean H-alpha surface brightness
    pub mean_brightness: f64,
    /// n_e, cm⁻³
    pub electron_density: f64,
    /// T_e, K
    pub electron_temperature_k: f64,
    /// erg cm⁻³
    pub energy_density: f64,
    /// Full-sphere volume, cm³
    pub volume_cm3: f64,
    /// Thermal energy of the half-sphere, erg
    pub total_energy: f64,
}

impl ThermalEstimate {
    /// Run the density, energy density, volume and total energy formulas in order.
    ///
    /// # Errors
    /// * `NebulaError::Config` - a model parameter is non-finite or not positive
    /// * `NebulaError::Domain` - negative mean brightness
    pub fn from_brightness(mean_brightness: f64, model: &NebulaModel) -> Result<Self> {
        model.validate()?;
        let electron_density = electron_density(mean_brightness, model)?;
        let energy_density = thermal_energy_density(electron_density, model);
        let volume_cm3 = sphere_volume(model.radius_cm());
        let total_energy = total_thermal_energy(energy_density, volume_cm3);

        Ok(Self {
            mean_brightness,
            electron_density,
            electron_temperature_k: model.electron_temperature_k,
            energy_density,
            volume_cm3,
            total_energy,
        })
    }
}
