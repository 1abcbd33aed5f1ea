// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod normalize;
pub mod pipeline;
pub mod ranking;
pub mod scoring;

// Re-export commonly used types
pub use crate::config::{
    CapacityWeights, ComponentWeights, ExposureWeights, HazardWeights, NormalizationConfig,
    RiskConfig,
};

pub use crate::core::{
    CapacityIndicators, ComponentScores, DistrictResult, DistrictRow, ExposureIndicators,
    HazardIndicators, RiskCategory,
};

pub use crate::errors::RiskmapError;

pub use crate::normalize::{
    minmax_normalize, percentile, robust_normalize, robust_normalize_between, NormalizationMethod,
};

pub use crate::pipeline::{build_report, normalize_rows, score_districts, ScoreReport};

pub use crate::ranking::{
    rank_districts, risk_distribution, RankedDistrict, RiskDistribution, ScoreField,
};

pub use crate::scoring::{
    sensitivity::{sensitivity_analysis, ScenarioRisk},
    RiskScorer,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
