use crate::charts::heatmap::HeatmapData;
use crate::charts::palette::CAPABILITY_GRADIENT;
use crate::charts::{Chart, ChartBody, ChartKind};
use crate::config::VisualizationConfig;
use crate::data::{Capability, Dataset};
use crate::error::Result;
use crate::scores::build_score_matrix;

/// Heatmap of the six capability ratings per model, row labels colored by model type.
pub fn create_capabilities_matrix(dataset: &Dataset, config: &VisualizationConfig) -> Result<Chart> {
    let matrix = build_score_matrix(dataset, &Capability::ALL, config.unknown_ratings)?;

    Ok(Chart {
        kind: ChartKind::Capabilities,
        style: config.capabilities.clone(),
        body: ChartBody::Heatmap(HeatmapData {
            matrix,
            row_types: dataset.iter().map(|r| r.model_type).collect(),
            gradient: CAPABILITY_GRADIENT,
            colorbar_title: Some("Capability Level".to_string()),
        }),
    })
}
