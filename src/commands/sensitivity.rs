use super::load_config;
use crate::io::output::{create_writer, OutputFormat};
use crate::io::read_districts;
use crate::pipeline;
use crate::scoring::sensitivity::sensitivity_analysis;
use crate::scoring::RiskScorer;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

pub struct SensitivityArgs {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn run_sensitivity(args: SensitivityArgs) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    let rows = read_districts(&args.input)
        .with_context(|| format!("reading district table from {}", args.input.display()))?;

    let prepared = pipeline::prepare_rows(&rows, &config);
    let scorer = RiskScorer::from_config(&config);
    let results = pipeline::score_districts(&prepared, &scorer)?;
    let table = sensitivity_analysis(&results, &config.scenarios, &scorer);
    info!(
        "swept {} districts across {} scenarios",
        results.len(),
        config.scenarios.len()
    );

    let mut writer = create_writer(args.format, args.output.as_deref())?;
    writer.write_sensitivity(&table)?;
    Ok(())
}
