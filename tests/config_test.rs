//! Configuration loading and validation tests.

use indoc::indoc;
use pretty_assertions::assert_eq;
use riskmap::{NormalizationMethod, RiskConfig, RiskmapError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn empty_file_loads_the_default_configuration() {
    let file = write_config("");
    let config = RiskConfig::load(file.path()).unwrap();
    assert_eq!(config, RiskConfig::default());
}

#[test]
fn partial_override_keeps_remaining_defaults() {
    let file = write_config(indoc! {r#"
        [normalization]
        method = "minmax"
        pre_normalized = false

        [weights]
        hazard = 0.50
        exposure = 0.25
        adaptive_capacity = 0.25
    "#});

    let config = RiskConfig::load(file.path()).unwrap();
    assert_eq!(config.normalization.method, NormalizationMethod::MinMax);
    assert!(!config.normalization.pre_normalized);
    assert_eq!(config.normalization.percentile_low, 5.0);
    assert_eq!(config.weights.hazard, 0.50);
    // The component tables are untouched.
    assert_eq!(config.hazard_weights.flood_risk, 0.25);
    assert_eq!(config.capacity_weights.poverty_rate, 0.35);
}

#[test]
fn scenario_tables_load_by_name() {
    let file = write_config(indoc! {r#"
        [scenarios.extreme_hazard]
        hazard = 0.80
        exposure = 0.10
        adaptive_capacity = 0.10
    "#});

    let config = RiskConfig::load(file.path()).unwrap();
    assert_eq!(config.scenarios.len(), 1);
    assert_eq!(config.scenarios["extreme_hazard"].hazard, 0.80);
}

#[test]
fn bad_weight_sum_fails_to_load() {
    let file = write_config(indoc! {r#"
        [weights]
        hazard = 0.90
        exposure = 0.90
        adaptive_capacity = 0.90
    "#});

    let err = RiskConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, RiskmapError::InvalidWeights { .. }));
}

#[test]
fn negative_scenario_weight_fails_to_load() {
    let file = write_config(indoc! {r#"
        [scenarios.broken]
        hazard = -0.50
        exposure = 0.75
        adaptive_capacity = 0.75
    "#});

    let err = RiskConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, RiskmapError::InvalidWeights { .. }));
}

#[test]
fn malformed_toml_reports_the_path() {
    let file = write_config("this is not [ toml");
    let err = RiskConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, RiskmapError::Config { .. }));
    assert!(err.to_string().contains("invalid configuration"));
}

#[test]
fn missing_file_surfaces_as_io_error() {
    let err = RiskConfig::load(std::path::Path::new("/nonexistent/riskmap.toml")).unwrap_err();
    assert!(matches!(err, RiskmapError::Io { .. }));
}

#[test]
fn default_config_serializes_and_reloads() {
    let config = RiskConfig::default();
    let toml_text = toml::to_string_pretty(&config).unwrap();
    let reloaded: RiskConfig = toml::from_str(&toml_text).unwrap();
    assert_eq!(reloaded, config);
}
