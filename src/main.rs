use anyhow::Result;
use clap::Parser;
use riskmap::cli::{Cli, Commands};
use riskmap::commands::{self, ScoreArgs, SensitivityArgs};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            input,
            config,
            format,
            output,
            rank_by,
            top,
            normalize,
            method,
            strict,
        } => commands::run_score(ScoreArgs {
            input,
            config,
            format,
            output,
            rank_by,
            top,
            normalize,
            method,
            strict,
        }),
        Commands::Sensitivity {
            input,
            config,
            format,
            output,
        } => commands::run_sensitivity(SensitivityArgs {
            input,
            config,
            format,
            output,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
