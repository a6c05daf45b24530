use clap::{Arg, ArgAction, Command, ValueHint};
use std::path::PathBuf;

const USAGE_GUIDE: &str = "\
Usage instructions:
  1. Update the comparison CSV with current model data
  2. Run `llm-compare generate <csv> -o <prefix>` to regenerate the charts
  3. Include the generated images in your course material

Example:
  llm-compare generate llm_comparison.csv -o course_2025_q2";

pub fn build_cli() -> Command {
    Command::new("llm-compare")
        .version(clap::crate_version!())
        .about("\u{1F4CA} LLM Comparison Visualization Tool")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .after_help(USAGE_GUIDE)
        .subcommand(
            Command::new("generate")
                .about("Generate capability, context window and SDK charts from a CSV file")
                .arg(
                    Arg::new("input")
                        .help("Path to the model comparison CSV (or TSV) file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_prefix")
                        .short('o')
                        .long("output-prefix")
                        .help(
                            "Prefix for the generated files. Overrides the prefix \
                             specified in the configuration file.",
                        )
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help("Output format. PNG export needs a build with the `kaleido` feature.")
                        .value_parser(["png", "html", "json"]),
                )
                .arg(
                    Arg::new("report")
                        .long("report")
                        .help("Also write <prefix>_report.html bundling all charts.")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("allow_unknown")
                        .long("allow-unknown")
                        .help("Render unrecognised ratings as blank cells instead of failing.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("config").about("Print the default configuration as JSON"),
        )
}
