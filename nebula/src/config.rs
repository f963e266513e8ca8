//! JSON storage for nebula model parameters

use crate::error::{NebulaError, Result};
use crate::physics::NebulaModel;
use log::debug;
use std::path::Path;

/// Load a model from a JSON file.
///
/// Missing fields take their default values, so a file containing only
/// `{"radius_pc": 3.1}` is valid. The loaded model is validated.
pub fn load_model(path: &Path) -> Result<NebulaModel> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| NebulaError::Config(format!("cannot read {}: {e}", path.display())))?;
    let model: NebulaModel = serde_json::from_str(&json)
        .map_err(|e| NebulaError::Config(format!("cannot parse {}: {e}", path.display())))?;
    model.validate()?;

    debug!("Loaded nebula model from {}: {model:?}", path.display());
    Ok(model)
}

/// Save a model as pretty-printed JSON.
pub fn save_model(model: &NebulaModel, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(model)
        .map_err(|e| NebulaError::Config(format!("cannot serialize model: {e}")))?;
    std::fs::write(path, json)
        .map_err(|e| NebulaError::Config(format!("cannot write {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::ThermalEstimate;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.json");
        let model = NebulaModel {
            radius_pc: 3.2,
            electron_temperature_k: 8000.0,
            ..NebulaModel::default()
        };

        save_model(&model, &path).unwrap();
        assert_eq!(load_model(&path).unwrap(), model);
    }

    #[test]
    fn test_reloaded_default_gives_identical_estimate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("default.json");
        let model = NebulaModel::default();

        save_model(&model, &path).unwrap();
        let reloaded = load_model(&path).unwrap();

        assert_eq!(
            reloaded.intensity_to_emission_measure.to_bits(),
            model.intensity_to_emission_measure.to_bits()
        );

        let expected = ThermalEstimate::from_brightness(1.0e-15, &model).unwrap();
        let actual = ThermalEstimate::from_brightness(1.0e-15, &reloaded).unwrap();
        assert_eq!(
            actual.electron_density.to_bits(),
            expected.electron_density.to_bits()
        );
        assert_eq!(
            actual.energy_density.to_bits(),
            expected.energy_density.to_bits()
        );
        assert_eq!(actual.total_energy.to_bits(), expected.total_energy.to_bits());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "radius_pc": 1.5 }"#).unwrap();

        let model = load_model(&path).unwrap();
        assert_eq!(model.radius_pc, 1.5);
        assert_eq!(model.electron_temperature_k, 10000.0);
        assert_eq!(model.boltzmann_constant, 1.38e-16);
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ radius_pc: ").unwrap();

        assert!(matches!(load_model(&path), Err(NebulaError::Config(_))));
    }

    #[test]
    fn test_rejects_non_physical_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("negative.json");
        std::fs::write(&path, r#"{ "electron_temperature_k": -5.0 }"#).unwrap();

        assert!(matches!(load_model(&path), Err(NebulaError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_model(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(NebulaError::Config(_))));
    }
}
