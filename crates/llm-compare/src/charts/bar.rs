//! Categorical bar chart with per-group colors.
use plotly::common::{Marker, TextPosition};
use plotly::layout::{Axis, BarMode, Layout, Margin};
use plotly::{Bar, Plot};

use crate::config::ChartStyle;

/// A bar series split into colored groups that share one category axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BarData {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    /// Text drawn above each bar.
    pub labels: Vec<String>,
    /// Legend group of each bar, as an index into `groups`.
    pub group_of: Vec<usize>,
    /// `(legend name, color)` per group, in legend order.
    pub groups: Vec<(String, &'static str)>,
    pub y_title: String,
}

impl BarData {
    pub fn bar_colors(&self) -> Vec<&'static str> {
        self.group_of.iter().map(|&g| self.groups[g].1).collect()
    }

    pub fn to_plot(&self, style: &ChartStyle) -> Plot {
        let mut plot = Plot::new();

        // Bars sit at their category index, so overlaying the per-group traces keeps input order.
        for (group_idx, (name, color)) in self.groups.iter().enumerate() {
            let members: Vec<usize> = (0..self.categories.len())
                .filter(|&i| self.group_of[i] == group_idx)
                .collect();
            if members.is_empty() {
                continue;
            }
            let xs: Vec<f64> = members.iter().map(|&i| i as f64).collect();
            let ys: Vec<f64> = members.iter().map(|&i| self.values[i]).collect();
            let texts: Vec<String> = members.iter().map(|&i| self.labels[i].clone()).collect();

            let trace = Bar::new(xs, ys)
                .name(name.as_str())
                .marker(Marker::new().color(*color))
                .text_array(texts)
                .text_position(TextPosition::Outside);
            plot.add_trace(trace);
        }

        let layout = Layout::new()
            .title(style.title.as_str())
            .width(style.width)
            .height(style.height)
            .bar_mode(BarMode::Overlay)
            .show_legend(true)
            .margin(Margin::new().left(10).right(10).top(60).bottom(10))
            .x_axis(
                Axis::new()
                    .tick_values((0..self.categories.len()).map(|i| i as f64).collect())
                    .tick_text(self.categories.clone())
                    .tick_angle(-45.0)
                    .auto_margin(true),
            )
            .y_axis(
                Axis::new()
                    .title(self.y_title.as_str())
                    .auto_margin(true),
            );
        plot.set_layout(layout);
        plot
    }
}
