use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VizError};
use crate::output::OutputFormat;
use crate::scores::UnknownRatingPolicy;

pub const DEFAULT_OUTPUT_PREFIX: &str = "llm_comparison";

/// Title and pixel size of one chart.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub title: String,
    pub width: usize,
    pub height: usize,
}

impl ChartStyle {
    pub fn new(title: &str, width: usize, height: usize) -> Self {
        Self {
            title: title.to_string(),
            width,
            height,
        }
    }
}

/// Settings for one run of the chart generator.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VisualizationConfig {
    pub version: String,
    pub output_prefix: String,
    pub format: OutputFormat,
    /// Raster scale factor; 3.0 on the default sizes gives roughly 300 dpi.
    pub scale: f64,
    /// Also write `<prefix>_report.html`.
    pub report: bool,
    pub unknown_ratings: UnknownRatingPolicy,
    pub capabilities: ChartStyle,
    pub context_window: ChartStyle,
    pub sdk_support: ChartStyle,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            format: OutputFormat::Png,
            scale: 3.0,
            report: false,
            unknown_ratings: UnknownRatingPolicy::Reject,
            capabilities: ChartStyle::new("LLM Capabilities Comparison", 1200, 800),
            context_window: ChartStyle::new("Context Window Size Comparison (K tokens)", 1200, 600),
            sdk_support: ChartStyle::new("SDK Availability by Language", 1000, 600),
        }
    }
}

impl VisualizationConfig {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            output_prefix: prefix.to_string(),
            ..Self::default()
        }
    }

    /// Parse a JSON configuration, falling back to the default for every
    /// field that is missing or cannot be read.
    pub fn from_json(json: &str) -> Result<Self> {
        let partial: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| VizError::Config(format!("Invalid JSON: {}", e)))?;
        if !partial.is_object() {
            return Err(VizError::Config("Expected a JSON object".to_string()));
        }
        let mut config = VisualizationConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config Invalid value for '{}', using default: {:?}",
                            stringify!($field),
                            config.$field
                        );
                    }
                } else {
                    log::debug!(
                        "Config Missing field '{}', using default: {:?}",
                        stringify!($field),
                        config.$field
                    );
                }
            };
        }

        load_or_default!(output_prefix);
        load_or_default!(format);
        load_or_default!(scale);
        load_or_default!(report);
        load_or_default!(unknown_ratings);
        load_or_default!(capabilities);
        load_or_default!(context_window);
        load_or_default!(sdk_support);

        if !(config.scale.is_finite() && config.scale > 0.0) {
            return Err(VizError::Config(format!("scale must be positive, got {}", config.scale)));
        }

        Ok(config)
    }
}

/// Load a configuration file written as JSON.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<VisualizationConfig> {
    let content = fs::read_to_string(&path).map_err(|e| {
        VizError::Config(format!("Failed to read config {}: {}", path.as_ref().display(), e))
    })?;
    VisualizationConfig::from_json(&content)
}
