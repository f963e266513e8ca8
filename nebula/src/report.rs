//! Plain-text report of nebular energetics
//!
//! Values are printed in shortest round-trip form. Magnitudes below 1e-4 or at
//! least 1e16 switch to scientific notation with a signed two-digit exponent
//! (`1.315334104411641e-07`).

use crate::physics::ThermalEstimate;
use std::fmt;
use std::io::{self, Write};

/// Format a float in shortest round-trip form with repr-style exponents.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if value == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let plain = format!("{value}");
        if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        }
    } else {
        let sci = format!("{value:e}");
        match sci.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => sci,
        }
    }
}

/// Format a temperature: whole kelvin below 1e16 print without a fraction
/// (`10000`), anything else falls back to [`format_value`].
pub fn format_temperature(kelvin: f64) -> String {
    if kelvin.is_finite() && kelvin.fract() == 0.0 && kelvin.abs() < 1e16 {
        format!("{kelvin:.0}")
    } else {
        format_value(kelvin)
    }
}

impl fmt::Display for ThermalEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Electron Density (n_e): {} cm^-3",
            format_value(self.electron_density)
        )?;
        writeln!(
            f,
            "Electron Temperature (T_e): {} K",
            format_temperature(self.electron_temperature_k)
        )?;
        writeln!(
            f,
            "Thermal Energy Density: {} erg cm^-3",
            format_value(self.energy_density)
        )?;
        writeln!(
            f,
            "Total Thermal Energy: {} erg",
            format_value(self.total_energy)
        )
    }
}

/// Write the four-line energetics report to `out`.
pub fn write_report<W: Write>(estimate: &ThermalEstimate, out: &mut W) -> io::Result<()> {
    write!(out, "{estimate}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::NebulaModel;

    #[test]
    fn test_format_value_small_and_large() {
        assert_eq!(format_value(1.315334104411641e-07), "1.315334104411641e-07");
        assert_eq!(format_value(2.4781408678599258e38), "2.4781408678599258e+38");
        assert_eq!(format_value(1.8203276222615842e57), "1.8203276222615842e+57");
        assert_eq!(format_value(-3.5e-20), "-3.5e-20");
        assert_eq!(format_value(1e100), "1e+100");
    }

    #[test]
    fn test_format_value_plain_range() {
        assert_eq!(format_value(6.576670522058205), "6.576670522058205");
        assert_eq!(format_value(10000.0), "10000.0");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(0.0001), "0.0001");
    }

    #[test]
    fn test_format_value_non_finite() {
        assert_eq!(format_value(f64::NAN), "nan");
        assert_eq!(format_value(f64::INFINITY), "inf");
        assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(10000.0), "10000");
        assert_eq!(format_temperature(7500.5), "7500.5");
        assert_eq!(format_temperature(1e20), "1e+20");
        assert_eq!(format_temperature(f64::NAN), "nan");
    }

    #[test]
    fn test_report_large_temperature() {
        let model = NebulaModel {
            electron_temperature_k: 1e20,
            ..NebulaModel::default()
        };
        let estimate = ThermalEstimate::from_brightness(1.0e-15, &model).unwrap();
        let text = estimate.to_string();

        assert!(text.contains("Electron Temperature (T_e): 1e+20 K"));
    }

    #[test]
    fn test_report_lines() {
        let estimate = ThermalEstimate::from_brightness(1.0e-15, &NebulaModel::default()).unwrap();
        let mut out = Vec::new();
        write_report(&estimate, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Electron Density (n_e): 1.315334"));
        assert!(lines[0].ends_with("e-07 cm^-3"));
        assert_eq!(lines[1], "Electron Temperature (T_e): 10000 K");
        assert!(lines[2].starts_with("Thermal Energy Density: 2.72274"));
        assert!(lines[2].ends_with("e-19 erg cm^-3"));
        assert!(lines[3].starts_with("Total Thermal Energy: 2.47814"));
        assert!(lines[3].ends_with("e+38 erg"));
    }

    #[test]
    fn test_report_nan() {
        let estimate = ThermalEstimate::from_brightness(f64::NAN, &NebulaModel::default()).unwrap();
        let text = estimate.to_string();

        assert!(text.contains("Electron Density (n_e): nan cm^-3"));
        assert!(text.contains("Total Thermal Energy: nan erg"));
    }
}
