//! District ranking and risk distribution summaries.

use crate::core::{DistrictResult, RiskCategory};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which score a ranking is ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScoreField {
    Hazard,
    Exposure,
    AdaptiveCapacity,
    Vulnerability,
    Risk,
}

impl ScoreField {
    /// Extract this field's value from a district result.
    pub fn value_of(&self, result: &DistrictResult) -> f64 {
        match self {
            Self::Hazard => result.scores.hazard,
            Self::Exposure => result.scores.exposure,
            Self::AdaptiveCapacity => result.scores.adaptive_capacity,
            Self::Vulnerability => result.scores.vulnerability,
            Self::Risk => result.scores.risk,
        }
    }
}

/// A district result with its 1-based rank attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedDistrict {
    pub rank: usize,
    #[serde(flatten)]
    pub result: DistrictResult,
}

/// Rank districts descending by the chosen score.
///
/// Competition ranking: tied scores share the minimum rank of the tied
/// group, and the next distinct score takes its positional rank, so
/// scores [90, 90, 50] rank [1, 1, 3]. Equivalently, a district's rank is
/// one plus the count of strictly better districts. Ties use exact float
/// equality.
pub fn rank_districts(results: &[DistrictResult], field: ScoreField) -> Vec<RankedDistrict> {
    let mut sorted: Vec<DistrictResult> = results.to_vec();
    sorted.sort_by(|a, b| {
        field
            .value_of(b)
            .partial_cmp(&field.value_of(a))
            .unwrap_or(Ordering::Equal)
    });

    let mut ranked = Vec::with_capacity(sorted.len());
    let mut prev_score = f64::NAN;
    let mut prev_rank = 0;

    for (position, result) in sorted.into_iter().enumerate() {
        let score = field.value_of(&result);
        let rank = if position > 0 && score == prev_score {
            prev_rank
        } else {
            position + 1
        };
        prev_score = score;
        prev_rank = rank;
        ranked.push(RankedDistrict { rank, result });
    }

    ranked
}

/// How many districts fall into each risk category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub very_high_count: usize,
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,
    pub very_low_count: usize,
    pub total_districts: usize,
}

/// Tally results into a category distribution.
pub fn risk_distribution(results: &[DistrictResult]) -> RiskDistribution {
    results
        .iter()
        .fold(RiskDistribution::default(), |mut dist, result| {
            match result.category {
                RiskCategory::VeryHigh => dist.very_high_count += 1,
                RiskCategory::High => dist.high_count += 1,
                RiskCategory::Medium => dist.medium_count += 1,
                RiskCategory::Low => dist.low_count += 1,
                RiskCategory::VeryLow => dist.very_low_count += 1,
            }
            dist.total_districts += 1;
            dist
        })
}
