//! End-to-end generation: load, build every chart, then write them out.
use std::path::{Path, PathBuf};

use crate::charts::{
    create_capabilities_matrix, create_context_window_chart, create_sdk_comparison, Chart,
};
use crate::config::VisualizationConfig;
use crate::data::{load_llm_data, Dataset};
use crate::error::{Result, VizError};
use crate::output::save_chart;
use crate::report::write_report;

/// Files produced by one run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFiles {
    pub prefix: String,
    /// Chart files in capabilities, context window, SDK order.
    pub charts: Vec<PathBuf>,
    pub report: Option<PathBuf>,
}

impl GeneratedFiles {
    /// Human readable confirmation naming the prefix.
    pub fn summary(&self) -> String {
        format!("Generated visualizations with prefix: {}", self.prefix)
    }
}

/// Build the capability, context window and SDK charts for `dataset`.
pub fn build_charts(dataset: &Dataset, config: &VisualizationConfig) -> Result<Vec<Chart>> {
    if dataset.is_empty() {
        return Err(VizError::DataSource("no model rows in input".to_string()));
    }
    Ok(vec![
        create_capabilities_matrix(dataset, config)?,
        create_context_window_chart(dataset, config)?,
        create_sdk_comparison(dataset, config)?,
    ])
}

/// Load `input`, build all charts and write them using `config.output_prefix`.
///
/// Every chart is built before the first file is written, so bad data leaves
/// nothing behind. Writes are independent: if one fails, files written
/// before it remain.
pub fn generate_visualizations<P: AsRef<Path>>(input: P, config: &VisualizationConfig) -> Result<GeneratedFiles> {
    let dataset = load_llm_data(&input)?;
    log::info!(
        "Loaded {} models from {}",
        dataset.len(),
        input.as_ref().display()
    );

    let charts = build_charts(&dataset, config)?;

    let prefix = config.output_prefix.as_str();
    let mut paths = Vec::with_capacity(charts.len());
    for chart in &charts {
        paths.push(save_chart(chart, prefix, config.format, config.scale)?);
    }

    let report = if config.report {
        Some(write_report(&charts, &dataset, prefix)?)
    } else {
        None
    };

    let generated = GeneratedFiles {
        prefix: prefix.to_string(),
        charts: paths,
        report,
    };
    log::info!("{}", generated.summary());
    Ok(generated)
}

/// [`generate_visualizations`] with default settings and the given prefix.
pub fn generate_visualizations_with_prefix<P: AsRef<Path>>(input: P, prefix: &str) -> Result<GeneratedFiles> {
    generate_visualizations(input, &VisualizationConfig::with_prefix(prefix))
}
