//! Core value types for district risk assessment.
//!
//! Everything here is a plain value object: freely cloned, never mutated
//! after a scoring run emits it. Indicator presence is modelled with
//! `Option<f64>` fields rather than string-keyed maps, so the set of
//! recognized indicators is fixed at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Climate hazard indicators for one district, pre-normalized to 0-100.
///
/// A `None` field means the indicator was unavailable upstream; its term
/// is skipped during aggregation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HazardIndicators {
    /// Coefficient of variation of annual rainfall.
    pub rainfall_variability: Option<f64>,
    /// Share of time spent in drought conditions.
    pub drought_frequency: Option<f64>,
    /// Historical flood event score.
    pub flood_risk: Option<f64>,
    /// Heat wave day count.
    pub temperature_extremes: Option<f64>,
    /// Geographic cyclone track exposure.
    pub cyclone_exposure: Option<f64>,
}

/// Exposure indicators: how much population and assets sit in harm's way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExposureIndicators {
    pub exposed_population: Option<f64>,
    pub agricultural_dependence: Option<f64>,
    pub infrastructure_deficit: Option<f64>,
    pub cropland_exposure: Option<f64>,
}

/// Adaptive capacity indicators: ability to cope with and recover from
/// hazard impacts. Higher is better for every field except `poverty_rate`,
/// which is inverted during aggregation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CapacityIndicators {
    pub poverty_rate: Option<f64>,
    pub education_level: Option<f64>,
    pub service_access: Option<f64>,
    pub local_capacity: Option<f64>,
}

/// One row of the input table: a district plus its indicator fields.
///
/// This is the contract with the upstream acquisition/processing stage.
/// Indicator fields appear flat in the serialized row, named exactly as
/// the indicator structs name them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DistrictRow {
    pub district: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(flatten)]
    pub hazard: HazardIndicators,
    #[serde(flatten)]
    pub exposure: ExposureIndicators,
    #[serde(flatten)]
    pub capacity: CapacityIndicators,
}

/// Component and composite scores for one district.
///
/// Invariants: `vulnerability == 100 - adaptive_capacity` exactly, and
/// `risk` is the geometric mean of hazard, exposure, and vulnerability
/// fractions scaled back to 0-100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub hazard: f64,
    pub exposure: f64,
    pub adaptive_capacity: f64,
    pub vulnerability: f64,
    pub risk: f64,
}

/// Final per-district result: scores, category, and optional coordinates
/// carried through from the input row. Created once per scoring run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistrictResult {
    pub district: String,
    #[serde(flatten)]
    pub scores: ComponentScores,
    pub category: RiskCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Five-level ordinal risk classification.
///
/// Bucket boundaries are inclusive on the lower edge: a score of exactly
/// 60.0 is `High`, 59.999 is `Medium`. Scores outside 0-100 are not
/// validated here; callers own that domain (see `RiskScorer::with_strict`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "Very Low")]
    VeryLow,
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskCategory {
    /// Map a 0-100 risk score onto its category.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 75.0 => Self::VeryHigh,
            s if s >= 60.0 => Self::High,
            s if s >= 40.0 => Self::Medium,
            s if s >= 25.0 => Self::Low,
            _ => Self::VeryLow,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_boundaries_are_inclusive_on_the_lower_edge() {
        assert_eq!(RiskCategory::from_score(75.0), RiskCategory::VeryHigh);
        assert_eq!(RiskCategory::from_score(74.999), RiskCategory::High);
        assert_eq!(RiskCategory::from_score(60.0), RiskCategory::High);
        assert_eq!(RiskCategory::from_score(40.0), RiskCategory::Medium);
        assert_eq!(RiskCategory::from_score(25.0), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(24.999), RiskCategory::VeryLow);
    }

    #[test]
    fn category_extremes() {
        assert_eq!(RiskCategory::from_score(100.0), RiskCategory::VeryHigh);
        assert_eq!(RiskCategory::from_score(0.0), RiskCategory::VeryLow);
    }

    #[test]
    fn categories_order_by_severity() {
        assert!(RiskCategory::VeryLow < RiskCategory::Low);
        assert!(RiskCategory::High < RiskCategory::VeryHigh);
    }

    #[test]
    fn district_row_deserializes_with_missing_indicators() {
        let row: DistrictRow = serde_json::from_str(
            r#"{"district": "Nsanje", "flood_risk": 80.0, "poverty_rate": 60.0}"#,
        )
        .unwrap();
        assert_eq!(row.district, "Nsanje");
        assert_eq!(row.hazard.flood_risk, Some(80.0));
        assert_eq!(row.hazard.rainfall_variability, None);
        assert_eq!(row.capacity.poverty_rate, Some(60.0));
        assert_eq!(row.latitude, None);
    }

    #[test]
    fn category_serializes_with_spaced_labels() {
        let json = serde_json::to_string(&RiskCategory::VeryHigh).unwrap();
        assert_eq!(json, r#""Very High""#);
    }
}
