//! llm-compare: comparison charts for large language models.
//!
//! Reads a table with one row per model (type, capability ratings, SDK
//! availability, context window) and renders three charts: a capability
//! heatmap, a context window bar chart and an SDK availability heatmap.
//! Charts are built as in-memory values and rendered through `plotly`;
//! PNG export goes through Kaleido and is enabled with the `kaleido` feature.
pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod math;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod scores;

pub use config::{ChartStyle, VisualizationConfig, DEFAULT_OUTPUT_PREFIX};
pub use error::{Result, VizError};
pub use output::OutputFormat;
pub use pipeline::{generate_visualizations, generate_visualizations_with_prefix, GeneratedFiles};
pub use scores::{build_score_matrix, ScoreMatrix, UnknownRatingPolicy};
