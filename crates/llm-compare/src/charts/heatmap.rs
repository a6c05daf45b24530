//! Score heatmap shared by the capability and SDK charts.
use plotly::common::{ColorBar, ColorScale, ColorScaleElement, Font};
use plotly::layout::{Annotation, Axis, Layout, Margin};
use plotly::{HeatMap, Plot};

use crate::charts::palette::{format_score, gradient_color, label_color};
use crate::config::ChartStyle;
use crate::data::ModelType;
use crate::scores::ScoreMatrix;

/// A score matrix with the styling needed to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapData {
    pub matrix: ScoreMatrix,
    /// Type of each row's model, used to color its label.
    pub row_types: Vec<ModelType>,
    pub gradient: [&'static str; 3],
    pub colorbar_title: Option<String>,
}

impl HeatmapData {
    /// Text drawn inside a cell; blank cells have none.
    pub fn cell_text(&self, row: usize, col: usize) -> Option<String> {
        self.matrix.get(row, col).map(format_score)
    }

    /// Fill color of a cell; blank cells have none.
    pub fn cell_color(&self, row: usize, col: usize) -> Option<String> {
        self.matrix
            .get(row, col)
            .map(|score| gradient_color(&self.gradient, score))
    }

    pub fn row_label_colors(&self) -> Vec<&'static str> {
        self.row_types.iter().map(|t| label_color(*t)).collect()
    }

    pub fn to_plot(&self, style: &ChartStyle) -> Plot {
        let (n_rows, n_cols) = self.matrix.values.shape();

        // One (x, y, z) triple per cell; blank cells stay null and draw nothing.
        let mut xs = Vec::with_capacity(n_rows * n_cols);
        let mut ys = Vec::with_capacity(n_rows * n_cols);
        let mut zs = Vec::with_capacity(n_rows * n_cols);
        let mut annotations = Vec::new();
        for (row, col, value) in self.matrix.values.indexed_iter() {
            xs.push(col);
            ys.push(row);
            zs.push(*value);
            if let Some(text) = self.cell_text(row, col) {
                annotations.push(
                    Annotation::new()
                        .x(col as f64)
                        .y(row as f64)
                        .text(text.as_str())
                        .show_arrow(false)
                        .font(Font::new().size(12).color("black")),
                );
            }
        }

        let color_scale = ColorScale::Vector(vec![
            ColorScaleElement(0.0, self.gradient[0].to_string()),
            ColorScaleElement(0.5, self.gradient[1].to_string()),
            ColorScaleElement(1.0, self.gradient[2].to_string()),
        ]);

        let mut trace = HeatMap::new(xs, ys, zs)
            .color_scale(color_scale)
            .zmin(0.0)
            .zmax(1.0);
        if let Some(title) = &self.colorbar_title {
            trace = trace.color_bar(ColorBar::new().title(title.as_str()));
        }

        let row_ticks: Vec<String> = self
            .matrix
            .row_labels
            .iter()
            .zip(self.row_label_colors())
            .map(|(label, color)| format!("<span style=\"color:{}\">{}</span>", color, label))
            .collect();

        let layout = Layout::new()
            .title(style.title.as_str())
            .width(style.width)
            .height(style.height)
            .margin(Margin::new().left(10).right(10).top(60).bottom(10))
            .x_axis(
                Axis::new()
                    .tick_values((0..n_cols).map(|c| c as f64).collect())
                    .tick_text(self.matrix.column_labels.clone())
                    .show_grid(false)
                    .zero_line(false)
                    .auto_margin(true),
            )
            .y_axis(
                Axis::new()
                    .tick_values((0..n_rows).map(|r| r as f64).collect())
                    .tick_text(row_ticks)
                    // First model on top.
                    .range(vec![n_rows as f64 - 0.5, -0.5])
                    .show_grid(false)
                    .zero_line(false)
                    .auto_margin(true),
            )
            .annotations(annotations);

        let mut plot = Plot::new();
        plot.add_trace(trace);
        plot.set_layout(layout);
        plot
    }
}
