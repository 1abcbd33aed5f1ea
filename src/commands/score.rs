use super::load_config;
use crate::io::output::{create_writer, OutputFormat};
use crate::io::read_districts;
use crate::normalize::NormalizationMethod;
use crate::pipeline;
use crate::ranking::ScoreField;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

pub struct ScoreArgs {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub rank_by: ScoreField,
    pub top: Option<usize>,
    pub normalize: bool,
    pub method: Option<NormalizationMethod>,
    pub strict: bool,
}

pub fn run_score(args: ScoreArgs) -> Result<()> {
    let mut config = load_config(args.config.as_ref())?;
    if args.normalize {
        config.normalization.pre_normalized = false;
    }
    if let Some(method) = args.method {
        config.normalization.method = method;
    }

    let rows = read_districts(&args.input)
        .with_context(|| format!("reading district table from {}", args.input.display()))?;
    info!("loaded {} district rows", rows.len());

    let mut report = pipeline::build_report(&rows, &config, args.rank_by, args.strict)?;
    if let Some(top) = args.top {
        report.districts = report.districts.take(top);
    }

    let mut writer = create_writer(args.format, args.output.as_deref())?;
    writer.write_report(&report)?;
    Ok(())
}
