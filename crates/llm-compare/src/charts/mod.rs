//! Chart builders.
//!
//! Each builder turns a [`Dataset`](crate::data::Dataset) into a [`Chart`]: the
//! encoded values (scores, labels, bar heights, colors) plus the style used to
//! render them. Rendering itself is delegated to `plotly` via [`Chart::to_plot`].
pub mod bar;
pub mod capabilities;
pub mod context_window;
pub mod heatmap;
pub mod palette;
pub mod sdk;

use plotly::Plot;

use crate::config::ChartStyle;

pub use bar::BarData;
pub use capabilities::create_capabilities_matrix;
pub use context_window::{context_sizes_k, create_context_window_chart};
pub use heatmap::HeatmapData;
pub use sdk::create_sdk_comparison;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Capabilities,
    ContextWindow,
    SdkSupport,
}

impl ChartKind {
    /// Appended to the output prefix to name this chart's file.
    pub fn suffix(&self) -> &'static str {
        match self {
            ChartKind::Capabilities => "_capabilities",
            ChartKind::ContextWindow => "_context_window",
            ChartKind::SdkSupport => "_sdk_support",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartBody {
    Heatmap(HeatmapData),
    Bar(BarData),
}

/// An in-memory chart ready to be written out.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub kind: ChartKind,
    pub style: ChartStyle,
    pub body: ChartBody,
}

impl Chart {
    pub fn to_plot(&self) -> Plot {
        match &self.body {
            ChartBody::Heatmap(data) => data.to_plot(&self.style),
            ChartBody::Bar(data) => data.to_plot(&self.style),
        }
    }

    pub fn as_heatmap(&self) -> Option<&HeatmapData> {
        match &self.body {
            ChartBody::Heatmap(data) => Some(data),
            ChartBody::Bar(_) => None,
        }
    }

    pub fn as_bar(&self) -> Option<&BarData> {
        match &self.body {
            ChartBody::Bar(data) => Some(data),
            ChartBody::Heatmap(_) => None,
        }
    }
}
