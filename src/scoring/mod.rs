//! Component aggregation and multiplicative risk composition.
//!
//! Each of the three components (Hazard, Exposure, Adaptive Capacity) is a
//! weighted sum of its pre-normalized sub-indicators. The composite score
//! combines them multiplicatively rather than additively: risk requires
//! hazard, exposure, AND vulnerability to be present at the same time.

pub mod sensitivity;

use crate::config::{CapacityWeights, ExposureWeights, HazardWeights, RiskConfig};
use crate::core::{CapacityIndicators, ComponentScores, ExposureIndicators, HazardIndicators};
use crate::errors::RiskmapError;

/// Climate risk scoring engine.
///
/// Holds the per-component weight tables, fixed at construction. All
/// scoring methods are pure; the scorer carries no run state.
#[derive(Clone, Debug, Default)]
pub struct RiskScorer {
    pub hazard_weights: HazardWeights,
    pub exposure_weights: ExposureWeights,
    pub capacity_weights: CapacityWeights,
    strict: bool,
}

impl RiskScorer {
    /// Build a scorer from a loaded configuration.
    pub fn from_config(config: &RiskConfig) -> Self {
        Self {
            hazard_weights: config.hazard_weights,
            exposure_weights: config.exposure_weights,
            capacity_weights: config.capacity_weights,
            strict: false,
        }
    }

    /// Enable strict validation: composition rejects component scores
    /// outside 0-100 instead of propagating them arithmetically. The
    /// default (non-strict) path never errors.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Hazard component: weighted sum of the climate threat indicators.
    ///
    /// An absent indicator contributes zero, which under-weights the total
    /// relative to districts reporting the full set. That is a known
    /// accuracy caveat of sparse inputs, deliberately not corrected here:
    /// the faithful sum is what anomaly checks downstream rely on. The
    /// result is not re-clipped for the same reason.
    pub fn hazard_score(&self, indicators: &HazardIndicators) -> f64 {
        let w = &self.hazard_weights;
        let mut score = 0.0;

        if let Some(v) = indicators.rainfall_variability {
            score += v * w.rainfall_variability;
        }
        if let Some(v) = indicators.drought_frequency {
            score += v * w.drought_frequency;
        }
        if let Some(v) = indicators.flood_risk {
            score += v * w.flood_risk;
        }
        if let Some(v) = indicators.temperature_extremes {
            score += v * w.temperature_extremes;
        }
        if let Some(v) = indicators.cyclone_exposure {
            score += v * w.cyclone_exposure;
        }

        score
    }

    /// Exposure component: weighted sum of the people-and-assets indicators.
    pub fn exposure_score(&self, indicators: &ExposureIndicators) -> f64 {
        let w = &self.exposure_weights;
        let mut score = 0.0;

        if let Some(v) = indicators.exposed_population {
            score += v * w.exposed_population;
        }
        if let Some(v) = indicators.agricultural_dependence {
            score += v * w.agricultural_dependence;
        }
        if let Some(v) = indicators.infrastructure_deficit {
            score += v * w.infrastructure_deficit;
        }
        if let Some(v) = indicators.cropland_exposure {
            score += v * w.cropland_exposure;
        }

        score
    }

    /// Adaptive capacity component: weighted sum of the coping-ability
    /// indicators. Higher capacity means lower vulnerability.
    ///
    /// `poverty_rate` runs opposite to the others (more poverty, less
    /// capacity), so it is inverted before weighting.
    pub fn adaptive_capacity_score(&self, indicators: &CapacityIndicators) -> f64 {
        let w = &self.capacity_weights;
        let mut score = 0.0;

        if let Some(v) = indicators.poverty_rate {
            score += (100.0 - v) * w.poverty_rate;
        }
        if let Some(v) = indicators.education_level {
            score += v * w.education_level;
        }
        if let Some(v) = indicators.service_access {
            score += v * w.service_access;
        }
        if let Some(v) = indicators.local_capacity {
            score += v * w.local_capacity;
        }

        score
    }

    /// Composite risk from the three component scores.
    ///
    /// The model is intentionally multiplicative, not additive:
    /// `Risk = (H x E x V)^(1/3) x 100`, with vulnerability the complement
    /// of adaptive capacity. A zero in any one component forces zero risk,
    /// matching the physical requirement that hazard, exposure, and
    /// vulnerability must all be present simultaneously for realized risk.
    /// High hazard over an empty floodplain is not risk. The cube root
    /// (geometric mean) keeps the output on the familiar 0-100 scale while
    /// preserving the multiplicative interaction. This is NOT a weighted
    /// average of components; weights apply only inside each component's
    /// own aggregation.
    pub fn risk_score(&self, hazard: f64, exposure: f64, adaptive_capacity: f64) -> f64 {
        let vulnerability = 100.0 - adaptive_capacity;

        let h = hazard / 100.0;
        let e = exposure / 100.0;
        let v = vulnerability / 100.0;

        let raw_product = h * e * v;

        // Mathematically bounded for in-domain inputs; the clamp only
        // guards floating-point overshoot.
        (raw_product.cbrt() * 100.0).clamp(0.0, 100.0)
    }

    /// [`Self::risk_score`], rejecting out-of-domain component inputs.
    pub fn risk_score_checked(
        &self,
        hazard: f64,
        exposure: f64,
        adaptive_capacity: f64,
    ) -> Result<f64, RiskmapError> {
        validate_component("hazard", hazard)?;
        validate_component("exposure", exposure)?;
        validate_component("adaptive_capacity", adaptive_capacity)?;
        Ok(self.risk_score(hazard, exposure, adaptive_capacity))
    }

    /// Aggregate all three components and compose the final risk score.
    pub fn calculate_all_scores(
        &self,
        hazard: &HazardIndicators,
        exposure: &ExposureIndicators,
        capacity: &CapacityIndicators,
    ) -> ComponentScores {
        let hazard_score = self.hazard_score(hazard);
        let exposure_score = self.exposure_score(exposure);
        let capacity_score = self.adaptive_capacity_score(capacity);
        let risk = self.risk_score(hazard_score, exposure_score, capacity_score);

        ComponentScores {
            hazard: hazard_score,
            exposure: exposure_score,
            adaptive_capacity: capacity_score,
            vulnerability: 100.0 - capacity_score,
            risk,
        }
    }

    /// [`Self::calculate_all_scores`], honoring the scorer's strict mode.
    pub fn score_all(
        &self,
        hazard: &HazardIndicators,
        exposure: &ExposureIndicators,
        capacity: &CapacityIndicators,
    ) -> Result<ComponentScores, RiskmapError> {
        if !self.strict {
            return Ok(self.calculate_all_scores(hazard, exposure, capacity));
        }

        let hazard_score = self.hazard_score(hazard);
        let exposure_score = self.exposure_score(exposure);
        let capacity_score = self.adaptive_capacity_score(capacity);
        let risk = self.risk_score_checked(hazard_score, exposure_score, capacity_score)?;

        Ok(ComponentScores {
            hazard: hazard_score,
            exposure: exposure_score,
            adaptive_capacity: capacity_score,
            vulnerability: 100.0 - capacity_score,
            risk,
        })
    }
}

fn validate_component(name: &'static str, value: f64) -> Result<(), RiskmapError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(RiskmapError::ScoreOutOfRange { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn hazard_score_weights_present_indicators() {
        let scorer = RiskScorer::default();
        let indicators = HazardIndicators {
            rainfall_variability: Some(70.0),
            drought_frequency: Some(60.0),
            flood_risk: Some(80.0),
            temperature_extremes: Some(50.0),
            cyclone_exposure: Some(40.0),
        };

        let expected = 70.0 * 0.20 + 60.0 * 0.20 + 80.0 * 0.25 + 50.0 * 0.20 + 40.0 * 0.15;
        assert_close(scorer.hazard_score(&indicators), expected);
    }

    #[test]
    fn hazard_score_skips_absent_cyclone_term() {
        let scorer = RiskScorer::default();
        let indicators = HazardIndicators {
            rainfall_variability: Some(70.0),
            drought_frequency: Some(60.0),
            flood_risk: Some(80.0),
            temperature_extremes: Some(50.0),
            cyclone_exposure: None,
        };

        assert_close(scorer.hazard_score(&indicators), 56.0);
    }

    #[test]
    fn empty_indicators_score_zero() {
        let scorer = RiskScorer::default();
        assert_close(scorer.hazard_score(&HazardIndicators::default()), 0.0);
        assert_close(scorer.exposure_score(&ExposureIndicators::default()), 0.0);
        assert_close(
            scorer.adaptive_capacity_score(&CapacityIndicators::default()),
            0.0,
        );
    }

    #[test]
    fn capacity_score_inverts_poverty() {
        let scorer = RiskScorer::default();
        let indicators = CapacityIndicators {
            poverty_rate: Some(60.0),
            education_level: Some(70.0),
            service_access: Some(65.0),
            local_capacity: Some(50.0),
        };

        let expected = 40.0 * 0.35 + 70.0 * 0.25 + 65.0 * 0.25 + 50.0 * 0.15;
        assert_close(scorer.adaptive_capacity_score(&indicators), expected);
        assert_close(expected, 55.25);
    }

    #[test]
    fn risk_is_zero_when_any_component_is_zero() {
        let scorer = RiskScorer::default();
        assert_close(scorer.risk_score(0.0, 60.0, 40.0), 0.0);
        assert_close(scorer.risk_score(80.0, 0.0, 40.0), 0.0);
        // Full adaptive capacity means zero vulnerability.
        assert_close(scorer.risk_score(80.0, 60.0, 100.0), 0.0);
    }

    #[test]
    fn risk_saturates_at_one_hundred() {
        let scorer = RiskScorer::default();
        assert_close(scorer.risk_score(100.0, 100.0, 0.0), 100.0);
    }

    #[test]
    fn risk_stays_in_bounds() {
        let scorer = RiskScorer::default();
        let risk = scorer.risk_score(80.0, 60.0, 40.0);
        assert!((0.0..=100.0).contains(&risk));
    }

    #[test]
    fn higher_capacity_means_lower_risk() {
        let scorer = RiskScorer::default();
        let high_capacity = scorer.risk_score(80.0, 60.0, 80.0);
        let low_capacity = scorer.risk_score(80.0, 60.0, 20.0);
        assert!(high_capacity < low_capacity);
    }

    #[test]
    fn risk_matches_geometric_mean_by_hand() {
        let scorer = RiskScorer::default();
        let risk = scorer.risk_score(80.0, 60.0, 40.0);
        let expected = (0.8f64 * 0.6 * 0.6).cbrt() * 100.0;
        assert_close(risk, expected);
    }

    #[test]
    fn all_scores_keep_vulnerability_complement_exact() {
        let scorer = RiskScorer::default();
        let scores = scorer.calculate_all_scores(
            &HazardIndicators {
                rainfall_variability: Some(70.0),
                drought_frequency: Some(60.0),
                flood_risk: Some(80.0),
                temperature_extremes: Some(50.0),
                cyclone_exposure: None,
            },
            &ExposureIndicators {
                exposed_population: Some(60.0),
                agricultural_dependence: Some(75.0),
                infrastructure_deficit: Some(50.0),
                cropland_exposure: Some(40.0),
            },
            &CapacityIndicators {
                poverty_rate: Some(60.0),
                education_level: Some(70.0),
                service_access: Some(65.0),
                local_capacity: Some(50.0),
            },
        );

        assert_close(scores.hazard, 56.0);
        assert_close(scores.adaptive_capacity, 55.25);
        assert_eq!(scores.vulnerability, 100.0 - scores.adaptive_capacity);
        assert_close(scores.vulnerability, 44.75);
        assert_close(
            scores.risk,
            scorer.risk_score(scores.hazard, scores.exposure, scores.adaptive_capacity),
        );
    }

    #[test]
    fn strict_mode_rejects_out_of_domain_components() {
        let scorer = RiskScorer::default();
        let err = scorer.risk_score_checked(120.0, 60.0, 40.0).unwrap_err();
        assert!(matches!(
            err,
            RiskmapError::ScoreOutOfRange { name: "hazard", .. }
        ));
        assert!(scorer.risk_score_checked(80.0, 60.0, 40.0).is_ok());
    }

    #[test]
    fn non_strict_score_all_propagates_silently() {
        let scorer = RiskScorer::default();
        // Out-of-range indicator values pass straight through the
        // aggregation in the default mode.
        let hazard = HazardIndicators {
            flood_risk: Some(500.0),
            ..HazardIndicators::default()
        };
        let scores = scorer
            .score_all(
                &hazard,
                &ExposureIndicators::default(),
                &CapacityIndicators::default(),
            )
            .unwrap();
        assert_close(scores.hazard, 125.0);
    }

    #[test]
    fn strict_score_all_surfaces_the_anomaly() {
        let scorer = RiskScorer::default().with_strict(true);
        let hazard = HazardIndicators {
            flood_risk: Some(500.0),
            ..HazardIndicators::default()
        };
        let err = scorer
            .score_all(
                &hazard,
                &ExposureIndicators::default(),
                &CapacityIndicators::default(),
            )
            .unwrap_err();
        assert!(matches!(err, RiskmapError::ScoreOutOfRange { .. }));
    }
}
