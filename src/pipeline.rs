//! End-to-end scoring runs over a district table.
//!
//! The pipeline is the only place where the pure scoring core meets a
//! whole table: optional column-wise normalization, parallel per-district
//! scoring, ranking, and the category distribution, wrapped into a
//! timestamped report. Districts are independent, so the scoring loop is
//! a rayon `par_iter`; that is an optimization, not a correctness
//! requirement.

use crate::config::RiskConfig;
use crate::core::{DistrictResult, DistrictRow, RiskCategory};
use crate::errors::RiskmapError;
use crate::normalize::NormalizationMethod;
use crate::ranking::{rank_districts, risk_distribution, RankedDistrict, RiskDistribution, ScoreField};
use crate::scoring::RiskScorer;
use chrono::{DateTime, Utc};
use im::Vector;
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A complete scoring run: ranked districts plus summary metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreReport {
    pub generated_at: DateTime<Utc>,
    pub method: NormalizationMethod,
    pub ranked_by: ScoreField,
    pub districts: Vector<RankedDistrict>,
    pub distribution: RiskDistribution,
}

type Getter = fn(&DistrictRow) -> Option<f64>;
type Setter = fn(&mut DistrictRow, f64);

/// Accessors for every indicator column of the input table.
fn indicator_columns() -> Vec<(Getter, Setter)> {
    vec![
        (
            |r| r.hazard.rainfall_variability,
            |r, v| r.hazard.rainfall_variability = Some(v),
        ),
        (
            |r| r.hazard.drought_frequency,
            |r, v| r.hazard.drought_frequency = Some(v),
        ),
        (|r| r.hazard.flood_risk, |r, v| r.hazard.flood_risk = Some(v)),
        (
            |r| r.hazard.temperature_extremes,
            |r, v| r.hazard.temperature_extremes = Some(v),
        ),
        (
            |r| r.hazard.cyclone_exposure,
            |r, v| r.hazard.cyclone_exposure = Some(v),
        ),
        (
            |r| r.exposure.exposed_population,
            |r, v| r.exposure.exposed_population = Some(v),
        ),
        (
            |r| r.exposure.agricultural_dependence,
            |r, v| r.exposure.agricultural_dependence = Some(v),
        ),
        (
            |r| r.exposure.infrastructure_deficit,
            |r, v| r.exposure.infrastructure_deficit = Some(v),
        ),
        (
            |r| r.exposure.cropland_exposure,
            |r, v| r.exposure.cropland_exposure = Some(v),
        ),
        (
            |r| r.capacity.poverty_rate,
            |r, v| r.capacity.poverty_rate = Some(v),
        ),
        (
            |r| r.capacity.education_level,
            |r, v| r.capacity.education_level = Some(v),
        ),
        (
            |r| r.capacity.service_access,
            |r, v| r.capacity.service_access = Some(v),
        ),
        (
            |r| r.capacity.local_capacity,
            |r, v| r.capacity.local_capacity = Some(v),
        ),
    ]
}

/// Normalize every indicator column across districts.
///
/// Each indicator is rescaled against its own cross-district distribution;
/// missing entries stay missing and do not participate. The input slice is
/// left untouched.
pub fn normalize_rows(
    rows: &[DistrictRow],
    method: NormalizationMethod,
    p_low: f64,
    p_high: f64,
) -> Vec<DistrictRow> {
    let mut out = rows.to_vec();

    for (get, set) in indicator_columns() {
        let present: Vec<(usize, f64)> = out
            .iter()
            .enumerate()
            .filter_map(|(i, row)| get(row).map(|v| (i, v)))
            .collect();
        if present.is_empty() {
            continue;
        }

        let values: Vec<f64> = present.iter().map(|(_, v)| *v).collect();
        let normalized = method.normalize(&values, p_low, p_high);
        for ((i, _), value) in present.iter().zip(normalized) {
            set(&mut out[*i], value);
        }
    }

    out
}

/// Score every district row. Rows are independent, so this runs in
/// parallel; the first strict-mode violation (if any) aborts the run.
pub fn score_districts(
    rows: &[DistrictRow],
    scorer: &RiskScorer,
) -> Result<Vec<DistrictResult>, RiskmapError> {
    rows.par_iter()
        .map(|row| {
            let scores = scorer.score_all(&row.hazard, &row.exposure, &row.capacity)?;
            Ok(DistrictResult {
                district: row.district.clone(),
                category: RiskCategory::from_score(scores.risk),
                scores,
                latitude: row.latitude,
                longitude: row.longitude,
            })
        })
        .collect()
}

/// Apply the configured normalization step, if any.
pub fn prepare_rows(rows: &[DistrictRow], config: &RiskConfig) -> Vec<DistrictRow> {
    if config.normalization.pre_normalized {
        rows.to_vec()
    } else {
        debug!(
            "normalizing indicator columns with {:?} ({}-{} band)",
            config.normalization.method,
            config.normalization.percentile_low,
            config.normalization.percentile_high
        );
        normalize_rows(
            rows,
            config.normalization.method,
            config.normalization.percentile_low,
            config.normalization.percentile_high,
        )
    }
}

/// Run the full pipeline: prepare, score, rank, summarize.
pub fn build_report(
    rows: &[DistrictRow],
    config: &RiskConfig,
    rank_by: ScoreField,
    strict: bool,
) -> Result<ScoreReport, RiskmapError> {
    info!("scoring {} districts", rows.len());

    let prepared = prepare_rows(rows, config);
    let scorer = RiskScorer::from_config(config).with_strict(strict);
    let results = score_districts(&prepared, &scorer)?;

    let distribution = risk_distribution(&results);
    let districts: Vector<RankedDistrict> = rank_districts(&results, rank_by).into_iter().collect();

    Ok(ScoreReport {
        generated_at: Utc::now(),
        method: config.normalization.method,
        ranked_by: rank_by,
        districts,
        distribution,
    })
}
