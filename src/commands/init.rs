use crate::io;
use anyhow::Result;
use std::path::PathBuf;

/// The commented configuration template written by `riskmap init`.
/// Parses to the same values as `RiskConfig::default()`.
pub const DEFAULT_CONFIG: &str = r#"# riskmap configuration
#
# Weight tables for the composite climate risk score. Each table's weights
# sum to 1.0.

# Top-level component weights. The multiplicative risk composition does not
# consume these; they are kept for display and for the scenario sweep.
[weights]
hazard = 0.40
exposure = 0.30
adaptive_capacity = 0.30

[hazard_weights]
rainfall_variability = 0.20
drought_frequency = 0.20
flood_risk = 0.25
temperature_extremes = 0.20
cyclone_exposure = 0.15

[exposure_weights]
exposed_population = 0.35
agricultural_dependence = 0.35
infrastructure_deficit = 0.20
cropland_exposure = 0.10

# poverty_rate is inverted during aggregation: higher poverty, lower capacity.
[capacity_weights]
poverty_rate = 0.35
education_level = 0.25
service_access = 0.25
local_capacity = 0.15

[normalization]
method = "robust"       # "robust" or "minmax"
percentile_low = 5.0
percentile_high = 95.0
pre_normalized = true   # set false to normalize raw indicator columns

# Alternative top-level weightings swept by `riskmap sensitivity`.
[scenarios.baseline]
hazard = 0.40
exposure = 0.30
adaptive_capacity = 0.30

[scenarios.hazard_focused]
hazard = 0.50
exposure = 0.25
adaptive_capacity = 0.25

[scenarios.equity_focused]
hazard = 0.30
exposure = 0.30
adaptive_capacity = 0.40

[scenarios.equal_weights]
hazard = 0.333
exposure = 0.333
adaptive_capacity = 0.334
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from("riskmap.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created riskmap.toml configuration file");

    Ok(())
}
