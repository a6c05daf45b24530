use crate::charts::bar::BarData;
use crate::charts::palette::{bar_color, format_thousands};
use crate::charts::{Chart, ChartBody, ChartKind};
use crate::config::VisualizationConfig;
use crate::data::{ContextWindow, Dataset, ModelType};
use crate::error::{Result, VizError};

const LEGEND_ORDER: [ModelType; 2] = [ModelType::Commercial, ModelType::OpenSource];

/// Context window of every model in thousands of tokens, in dataset order.
pub fn context_sizes_k(dataset: &Dataset) -> Result<Vec<f64>> {
    dataset
        .iter()
        .map(|record| {
            record
                .context_window
                .parse::<ContextWindow>()
                .map(|cw| cw.size_k())
                .map_err(|reason| VizError::Parse {
                    model: record.name.clone(),
                    value: record.context_window.clone(),
                    reason,
                })
        })
        .collect()
}

/// Bar chart of context window sizes, one bar per model colored by model type.
pub fn create_context_window_chart(dataset: &Dataset, config: &VisualizationConfig) -> Result<Chart> {
    let values = context_sizes_k(dataset)?;

    let group_of = dataset
        .iter()
        .map(|r| LEGEND_ORDER.iter().position(|t| *t == r.model_type).unwrap_or(0))
        .collect();
    let groups = LEGEND_ORDER
        .iter()
        .map(|t| (t.label().to_string(), bar_color(*t)))
        .collect();

    Ok(Chart {
        kind: ChartKind::ContextWindow,
        style: config.context_window.clone(),
        body: ChartBody::Bar(BarData {
            categories: dataset.names(),
            labels: values.iter().map(|v| format_thousands(*v)).collect(),
            values,
            group_of,
            groups,
            y_title: "Tokens (thousands)".to_string(),
        }),
    })
}
