//! Single-page HTML report bundling the three charts and a model summary.
use std::path::PathBuf;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::charts::palette::{format_thousands, label_color};
use crate::charts::{Chart, ChartKind};
use crate::data::Dataset;
use crate::error::{Result, VizError};
use crate::output::{ensure_parent_dir, write_file};

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";
pub const REPORT_SUFFIX: &str = "_report";

fn section_heading(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Capabilities => "Capabilities",
        ChartKind::ContextWindow => "Context Window",
        ChartKind::SdkSupport => "SDK Support",
    }
}

fn summary_table(dataset: &Dataset, context_sizes_k: &[f64]) -> Markup {
    html! {
        table class="summary" {
            thead {
                tr {
                    th { "Model" }
                    th { "Type" }
                    th { "Context Window" }
                    th { "K tokens" }
                }
            }
            tbody {
                @for (record, size) in dataset.iter().zip(context_sizes_k) {
                    tr {
                        td style={ "color:" (label_color(record.model_type)) } { (record.name) }
                        td { (record.model_type.label()) }
                        td { (record.context_window) }
                        td { (format_thousands(*size)) }
                    }
                }
            }
        }
    }
}

/// Render the report document.
///
/// `context_sizes_k` holds one context window size per model, in dataset order.
pub fn render_report(charts: &[Chart], dataset: &Dataset, context_sizes_k: &[f64], title: &str) -> String {
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                script src=(PLOTLY_JS) {}
                style {
                    "body { font-family: sans-serif; margin: 2em; }
                    table.summary { border-collapse: collapse; }
                    table.summary th, table.summary td { border: 1px solid #ccc; padding: 4px 10px; }"
                }
            }
            body {
                h1 { (title) }
                p { "Generated " (generated) " from " (dataset.len()) " models." }
                @for chart in charts {
                    section {
                        h2 { (section_heading(chart.kind)) }
                        (PreEscaped(chart.to_plot().to_inline_html(Some(chart.kind.suffix().trim_start_matches('_')))))
                    }
                }
                section {
                    h2 { "Models" }
                    (summary_table(dataset, context_sizes_k))
                }
            }
        }
    };
    markup.into_string()
}

/// Write `<prefix>_report.html`, taking the model sizes from the context window chart.
pub fn write_report(charts: &[Chart], dataset: &Dataset, prefix: &str) -> Result<PathBuf> {
    let path = PathBuf::from(format!("{}{}.html", prefix, REPORT_SUFFIX));
    let context_sizes_k = charts
        .iter()
        .filter(|c| c.kind == ChartKind::ContextWindow)
        .find_map(Chart::as_bar)
        .map(|bar| bar.values.as_slice())
        .ok_or_else(|| VizError::Output {
            path: path.clone(),
            message: "report needs the context window chart".to_string(),
        })?;
    if context_sizes_k.len() != dataset.len() {
        return Err(VizError::Output {
            path,
            message: format!(
                "{} context window sizes for {} models",
                context_sizes_k.len(),
                dataset.len()
            ),
        });
    }
    ensure_parent_dir(&path)?;
    let html = render_report(charts, dataset, context_sizes_k, "LLM Comparison Report");
    write_file(&path, html.as_bytes())?;
    log::info!("Wrote report {}", path.display());
    Ok(path)
}
