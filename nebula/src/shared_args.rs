use crate::config::load_model;
use crate::error::Result;
use crate::physics::NebulaModel;
use clap::Args;
use std::path::PathBuf;

/// Model arguments shared by binaries that derive nebular energetics
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// JSON file with model parameters (missing fields use defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Nebula radius in parsecs, overrides the config file
    #[arg(long)]
    pub radius_pc: Option<f64>,

    /// Electron temperature in Kelvin, overrides the config file
    #[arg(long)]
    pub temperature: Option<f64>,
}

impl ModelArgs {
    /// Build the effective model: defaults, then config file, then CLI overrides.
    pub fn resolve(&self) -> Result<NebulaModel> {
        let mut model = match &self.config {
            Some(path) => load_model(path)?,
            None => NebulaModel::default(),
        };

        if let Some(radius_pc) = self.radius_pc {
            model.radius_pc = radius_pc;
        }
        if let Some(temperature) = self.temperature {
            model.electron_temperature_k = temperature;
        }

        model.validate()?;
        Ok(model)
    }
}
