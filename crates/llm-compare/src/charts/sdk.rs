use crate::charts::heatmap::HeatmapData;
use crate::charts::palette::SDK_GRADIENT;
use crate::charts::{Chart, ChartBody, ChartKind};
use crate::config::VisualizationConfig;
use crate::data::{Dataset, SdkLanguage};
use crate::error::Result;
use crate::scores::build_score_matrix;

/// Heatmap of SDK availability per language (Python, Java, TypeScript).
pub fn create_sdk_comparison(dataset: &Dataset, config: &VisualizationConfig) -> Result<Chart> {
    let matrix = build_score_matrix(dataset, &SdkLanguage::ALL, config.unknown_ratings)?;

    Ok(Chart {
        kind: ChartKind::SdkSupport,
        style: config.sdk_support.clone(),
        body: ChartBody::Heatmap(HeatmapData {
            matrix,
            row_types: dataset.iter().map(|r| r.model_type).collect(),
            gradient: SDK_GRADIENT,
            colorbar_title: None,
        }),
    })
}
