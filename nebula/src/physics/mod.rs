//! Physical model of a photoionized nebula.

pub mod constants;
pub mod thermal;

pub use constants::{HAlpha, CGS};
pub use thermal::{
    electron_density, sphere_volume, thermal_energy_density, total_thermal_energy, NebulaModel,
    ThermalEstimate,
};
