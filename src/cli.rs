use crate::io::output::OutputFormat;
use crate::normalize::NormalizationMethod;
use crate::ranking::ScoreField;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "riskmap")]
#[command(about = "District-level climate risk scoring and ranking", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score and rank districts from an indicator table
    Score {
        /// Indicator table (JSON array of district rows; use - for stdin)
        input: PathBuf,

        /// Configuration file (defaults to ./riskmap.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Score used for ordering the ranking
        #[arg(long = "rank-by", value_enum, default_value = "risk")]
        rank_by: ScoreField,

        /// Keep only the top N districts in the report
        #[arg(long)]
        top: Option<usize>,

        /// Normalize raw indicator columns before scoring
        #[arg(long)]
        normalize: bool,

        /// Normalization method override
        #[arg(long, value_enum)]
        method: Option<NormalizationMethod>,

        /// Reject component scores outside the 0-100 range
        #[arg(long)]
        strict: bool,
    },

    /// Sweep risk scores across the configured weighting scenarios
    Sensitivity {
        /// Indicator table (JSON array of district rows; use - for stdin)
        input: PathBuf,

        /// Configuration file (defaults to ./riskmap.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a default riskmap.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
