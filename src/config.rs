//! Weight and normalization configuration.
//!
//! All weight tables are fixed at load time and passed explicitly into the
//! scorer; nothing here is looked up ambiently. Missing TOML fields fall
//! back to the reference weighting, so a partial configuration file only
//! overrides what it names.

use crate::errors::RiskmapError;
use crate::normalize::{NormalizationMethod, DEFAULT_PERCENTILE_HIGH, DEFAULT_PERCENTILE_LOW};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Tolerance when checking that a weight table sums to 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

/// Top-level component weights.
///
/// The multiplicative risk composition does not consume these: it combines
/// hazard, exposure, and vulnerability as an unweighted geometric mean.
/// The table is retained because downstream consumers display it and the
/// sensitivity sweep is shaped around named variants of it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    #[serde(default = "default_component_hazard")]
    pub hazard: f64,
    #[serde(default = "default_component_exposure")]
    pub exposure: f64,
    #[serde(default = "default_component_capacity")]
    pub adaptive_capacity: f64,
}

fn default_component_hazard() -> f64 {
    0.40
}

fn default_component_exposure() -> f64 {
    0.30
}

fn default_component_capacity() -> f64 {
    0.30
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            hazard: default_component_hazard(),
            exposure: default_component_exposure(),
            adaptive_capacity: default_component_capacity(),
        }
    }
}

impl ComponentWeights {
    pub fn new(hazard: f64, exposure: f64, adaptive_capacity: f64) -> Self {
        Self {
            hazard,
            exposure,
            adaptive_capacity,
        }
    }

    pub fn sum(&self) -> f64 {
        self.hazard + self.exposure + self.adaptive_capacity
    }

    pub fn validate(&self) -> Result<(), RiskmapError> {
        validate_table(
            "component",
            &[
                ("hazard", self.hazard),
                ("exposure", self.exposure),
                ("adaptive_capacity", self.adaptive_capacity),
            ],
        )
    }
}

/// Hazard sub-indicator weights.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HazardWeights {
    #[serde(default = "default_rainfall_variability_weight")]
    pub rainfall_variability: f64,
    #[serde(default = "default_drought_frequency_weight")]
    pub drought_frequency: f64,
    #[serde(default = "default_flood_risk_weight")]
    pub flood_risk: f64,
    #[serde(default = "default_temperature_extremes_weight")]
    pub temperature_extremes: f64,
    #[serde(default = "default_cyclone_exposure_weight")]
    pub cyclone_exposure: f64,
}

fn default_rainfall_variability_weight() -> f64 {
    0.20
}

fn default_drought_frequency_weight() -> f64 {
    0.20
}

fn default_flood_risk_weight() -> f64 {
    0.25
}

fn default_temperature_extremes_weight() -> f64 {
    0.20
}

fn default_cyclone_exposure_weight() -> f64 {
    0.15
}

impl Default for HazardWeights {
    fn default() -> Self {
        Self {
            rainfall_variability: default_rainfall_variability_weight(),
            drought_frequency: default_drought_frequency_weight(),
            flood_risk: default_flood_risk_weight(),
            temperature_extremes: default_temperature_extremes_weight(),
            cyclone_exposure: default_cyclone_exposure_weight(),
        }
    }
}

impl HazardWeights {
    pub fn sum(&self) -> f64 {
        self.rainfall_variability
            + self.drought_frequency
            + self.flood_risk
            + self.temperature_extremes
            + self.cyclone_exposure
    }

    pub fn validate(&self) -> Result<(), RiskmapError> {
        validate_table(
            "hazard",
            &[
                ("rainfall_variability", self.rainfall_variability),
                ("drought_frequency", self.drought_frequency),
                ("flood_risk", self.flood_risk),
                ("temperature_extremes", self.temperature_extremes),
                ("cyclone_exposure", self.cyclone_exposure),
            ],
        )
    }
}

/// Exposure sub-indicator weights.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExposureWeights {
    #[serde(default = "default_exposed_population_weight")]
    pub exposed_population: f64,
    #[serde(default = "default_agricultural_dependence_weight")]
    pub agricultural_dependence: f64,
    #[serde(default = "default_infrastructure_deficit_weight")]
    pub infrastructure_deficit: f64,
    #[serde(default = "default_cropland_exposure_weight")]
    pub cropland_exposure: f64,
}

fn default_exposed_population_weight() -> f64 {
    0.35
}

fn default_agricultural_dependence_weight() -> f64 {
    0.35
}

fn default_infrastructure_deficit_weight() -> f64 {
    0.20
}

fn default_cropland_exposure_weight() -> f64 {
    0.10
}

impl Default for ExposureWeights {
    fn default() -> Self {
        Self {
            exposed_population: default_exposed_population_weight(),
            agricultural_dependence: default_agricultural_dependence_weight(),
            infrastructure_deficit: default_infrastructure_deficit_weight(),
            cropland_exposure: default_cropland_exposure_weight(),
        }
    }
}

impl ExposureWeights {
    pub fn sum(&self) -> f64 {
        self.exposed_population
            + self.agricultural_dependence
            + self.infrastructure_deficit
            + self.cropland_exposure
    }

    pub fn validate(&self) -> Result<(), RiskmapError> {
        validate_table(
            "exposure",
            &[
                ("exposed_population", self.exposed_population),
                ("agricultural_dependence", self.agricultural_dependence),
                ("infrastructure_deficit", self.infrastructure_deficit),
                ("cropland_exposure", self.cropland_exposure),
            ],
        )
    }
}

/// Adaptive capacity sub-indicator weights.
///
/// `poverty_rate` is weighted after inversion (higher poverty means lower
/// capacity); the weight itself is an ordinary non-negative share.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapacityWeights {
    #[serde(default = "default_poverty_rate_weight")]
    pub poverty_rate: f64,
    #[serde(default = "default_education_level_weight")]
    pub education_level: f64,
    #[serde(default = "default_service_access_weight")]
    pub service_access: f64,
    #[serde(default = "default_local_capacity_weight")]
    pub local_capacity: f64,
}

fn default_poverty_rate_weight() -> f64 {
    0.35
}

fn default_education_level_weight() -> f64 {
    0.25
}

fn default_service_access_weight() -> f64 {
    0.25
}

fn default_local_capacity_weight() -> f64 {
    0.15
}

impl Default for CapacityWeights {
    fn default() -> Self {
        Self {
            poverty_rate: default_poverty_rate_weight(),
            education_level: default_education_level_weight(),
            service_access: default_service_access_weight(),
            local_capacity: default_local_capacity_weight(),
        }
    }
}

impl CapacityWeights {
    pub fn sum(&self) -> f64 {
        self.poverty_rate + self.education_level + self.service_access + self.local_capacity
    }

    pub fn validate(&self) -> Result<(), RiskmapError> {
        validate_table(
            "adaptive capacity",
            &[
                ("poverty_rate", self.poverty_rate),
                ("education_level", self.education_level),
                ("service_access", self.service_access),
                ("local_capacity", self.local_capacity),
            ],
        )
    }
}

/// Normalization settings for the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizationConfig {
    #[serde(default = "default_normalization_method")]
    pub method: NormalizationMethod,
    #[serde(default = "default_percentile_low")]
    pub percentile_low: f64,
    #[serde(default = "default_percentile_high")]
    pub percentile_high: f64,
    /// Input rows arrive already normalized to 0-100. Set to `false` to
    /// have the pipeline normalize each indicator column first.
    #[serde(default = "default_pre_normalized")]
    pub pre_normalized: bool,
}

fn default_normalization_method() -> NormalizationMethod {
    NormalizationMethod::Robust
}

fn default_percentile_low() -> f64 {
    DEFAULT_PERCENTILE_LOW
}

fn default_percentile_high() -> f64 {
    DEFAULT_PERCENTILE_HIGH
}

fn default_pre_normalized() -> bool {
    true
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            method: default_normalization_method(),
            percentile_low: default_percentile_low(),
            percentile_high: default_percentile_high(),
            pre_normalized: default_pre_normalized(),
        }
    }
}

impl NormalizationConfig {
    pub fn validate(&self) -> Result<(), RiskmapError> {
        if !(0.0..=100.0).contains(&self.percentile_low)
            || !(0.0..=100.0).contains(&self.percentile_high)
        {
            return Err(RiskmapError::invalid_weights(
                "normalization percentiles must lie in 0-100",
            ));
        }
        if self.percentile_low >= self.percentile_high {
            return Err(RiskmapError::invalid_weights(format!(
                "percentile_low ({}) must be below percentile_high ({})",
                self.percentile_low, self.percentile_high
            )));
        }
        Ok(())
    }
}

/// Complete scoring configuration: four weight tables, normalization
/// settings, and the named weighting scenarios for sensitivity analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Top-level component weights. Not consumed by the multiplicative
    /// composer; see [`ComponentWeights`].
    #[serde(default)]
    pub weights: ComponentWeights,
    #[serde(default)]
    pub hazard_weights: HazardWeights,
    #[serde(default)]
    pub exposure_weights: ExposureWeights,
    #[serde(default)]
    pub capacity_weights: CapacityWeights,
    #[serde(default)]
    pub normalization: NormalizationConfig,
    /// Alternative top-level weightings swept by the sensitivity analysis.
    #[serde(default = "default_scenarios")]
    pub scenarios: BTreeMap<String, ComponentWeights>,
}

/// The reference scenario set: the baseline plus three alternatives that
/// shift emphasis between physical hazard and social equity.
pub fn default_scenarios() -> BTreeMap<String, ComponentWeights> {
    BTreeMap::from([
        ("baseline".to_string(), ComponentWeights::new(0.40, 0.30, 0.30)),
        (
            "hazard_focused".to_string(),
            ComponentWeights::new(0.50, 0.25, 0.25),
        ),
        (
            "equity_focused".to_string(),
            ComponentWeights::new(0.30, 0.30, 0.40),
        ),
        (
            "equal_weights".to_string(),
            ComponentWeights::new(0.333, 0.333, 0.334),
        ),
    ])
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            weights: ComponentWeights::default(),
            hazard_weights: HazardWeights::default(),
            exposure_weights: ExposureWeights::default(),
            capacity_weights: CapacityWeights::default(),
            normalization: NormalizationConfig::default(),
            scenarios: default_scenarios(),
        }
    }
}

impl RiskConfig {
    /// Load a configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self, RiskmapError> {
        let raw = fs::read_to_string(path).map_err(|e| RiskmapError::io(e, path))?;
        let config: RiskConfig =
            toml::from_str(&raw).map_err(|e| RiskmapError::config(e.to_string(), path))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every weight table and the normalization settings.
    pub fn validate(&self) -> Result<(), RiskmapError> {
        self.weights.validate()?;
        self.hazard_weights.validate()?;
        self.exposure_weights.validate()?;
        self.capacity_weights.validate()?;
        self.normalization.validate()?;
        for (name, scenario) in &self.scenarios {
            scenario.validate().map_err(|e| {
                RiskmapError::invalid_weights(format!("scenario '{name}': {e}"))
            })?;
        }
        Ok(())
    }
}

/// Check a weight table: every entry non-negative, entries summing to 1.0
/// within tolerance. Runs at load time and in tests, never during scoring.
fn validate_table(table: &str, entries: &[(&str, f64)]) -> Result<(), RiskmapError> {
    for (name, weight) in entries {
        if *weight < 0.0 || !weight.is_finite() {
            return Err(RiskmapError::invalid_weights(format!(
                "{table} weight '{name}' must be non-negative, got {weight}"
            )));
        }
    }
    let sum: f64 = entries.iter().map(|(_, w)| w).sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(RiskmapError::invalid_weights(format!(
            "{table} weights must sum to 1.0, but sum to {sum:.3}"
        )));
    }
    Ok(())
}
