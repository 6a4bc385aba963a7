//! Report export formats.

use crate::analysis::MixtureReport;
use crate::error::{AppError, AppResult};

/// Sampled liquidus curves as CSV: `x_A, T_BA [K], T_AB [K]`.
pub fn liquidus_csv(report: &MixtureReport) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["x_a", "t_ba_k", "t_ab_k"])?;

    let curves = &report.curves;
    for i in 0..curves.len() {
        writer.write_record([
            curves.mole_fraction_a[i].to_string(),
            curves.temperature_ba[i].to_string(),
            curves.temperature_ab[i].to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Serialize(format!("Failed to flush CSV: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::Serialize(e.to_string()))
}

pub fn report_json(report: &MixtureReport) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn report_yaml(report: &MixtureReport) -> AppResult<String> {
    serde_yaml::to_string(report)
        .map_err(|e| AppError::Serialize(format!("Failed to serialize report: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_components;
    use pcm_props::ComponentProperties;
    use pcm_solver::SolverConfig;

    fn report() -> MixtureReport {
        let a = ComponentProperties::from_positional(
            "A",
            [100.0, 76.85, 200.0, 150.0, 0.5, 0.0, 200.0, 0.3, 0.0, 0.0],
        )
        .unwrap();
        let b = ComponentProperties::from_positional(
            "B",
            [100.0, 46.85, 180.0, 150.0, 0.5, 0.0, 200.0, 0.3, 0.0, 0.0],
        )
        .unwrap();
        let mut config = SolverConfig::default();
        config.grid.step = 0.01;
        analyze_components(&a, &b, config).unwrap()
    }

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let report = report();
        let csv = liquidus_csv(&report).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "x_a,t_ba_k,t_ab_k");
        assert_eq!(lines.len(), report.curves.len() + 1);
        assert!(lines[1].starts_with("0.0005,"));
    }

    #[test]
    fn json_carries_point_and_legs_without_curves() {
        let report = report();
        let json = report_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["component_a"]["name"], "A");
        assert_eq!(value["entropy"]["legs"].as_array().map(Vec::len), Some(7));
        assert_eq!(value["enthalpy"]["quantity"], "Enthalpy");
        assert!(value["eutectic"]["temperature_k"].is_f64());
        assert!(value.get("curves").is_none());
        assert!(value["liquidus_min_temperature_k"].is_f64());
    }

    #[test]
    fn yaml_lists_both_components() {
        let yaml = report_yaml(&report()).unwrap();
        assert!(yaml.contains("component_a:"));
        assert!(yaml.contains("name: B"));
        assert!(yaml.contains("gas_constant: 8.314"));
    }
}
