//! `generate` subcommand: merge config file and flags, then run the pipeline.
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;

use llm_compare::config::load_config;
use llm_compare::{generate_visualizations, GeneratedFiles, OutputFormat, UnknownRatingPolicy, VisualizationConfig};

pub fn validate_input_file(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("tsv") | Some("csv") => {}
        _ => anyhow::bail!("Input must have a .csv or .tsv extension: {}", path.display()),
    }

    if !path.exists() {
        anyhow::bail!("Input file does not exist: {}", path.display());
    }

    Ok(())
}

/// Configuration from `--config` (or defaults) with command line overrides applied.
pub fn config_from_arguments(matches: &ArgMatches) -> Result<VisualizationConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("Using config: {:?}", path);
            load_config(path).with_context(|| format!("Failed to load config {}", path.display()))?
        }
        None => VisualizationConfig::default(),
    };

    if let Some(prefix) = matches.get_one::<String>("output_prefix") {
        config.output_prefix = prefix.clone();
    }
    if let Some(format) = matches.get_one::<String>("format") {
        config.format = OutputFormat::from_str(format).map_err(anyhow::Error::msg)?;
    }
    if matches.get_flag("report") {
        config.report = true;
    }
    if matches.get_flag("allow_unknown") {
        config.unknown_ratings = UnknownRatingPolicy::Blank;
    }

    Ok(config)
}

pub fn run_generate(input: &Path, config: &VisualizationConfig) -> Result<GeneratedFiles> {
    validate_input_file(input)?;
    let generated = generate_visualizations(input, config)
        .with_context(|| format!("Failed to generate visualizations from {}", input.display()))?;
    Ok(generated)
}
