use anyhow::Result;
use clap::ArgMatches;
use log::LevelFilter;
use std::path::PathBuf;

use llm_compare::VisualizationConfig;
use llm_compare_cli::cli::build_cli;
use llm_compare_cli::generate::{config_from_arguments, run_generate};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("LLM_COMPARE_LOG", "error,llm_compare=info"))
        .init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", sub_m)) => handle_generate(sub_m),
        Some(("config", _)) => {
            let json = serde_json::to_string_pretty(&VisualizationConfig::default())?;
            println!("{}", json);
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_generate(matches: &ArgMatches) -> Result<()> {
    let input: &PathBuf = matches
        .get_one("input")
        .expect("input is a required argument");
    log::info!("[LLM-Compare] Generating charts from: {:?}", input);

    let generated = config_from_arguments(matches).and_then(|config| run_generate(input, &config));

    match generated {
        Ok(generated) => {
            println!("{}", generated.summary());
            Ok(())
        }
        Err(e) => {
            log::error!("Generation failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
