//! Writes charts to disk as `<prefix><suffix>.<ext>`.
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::charts::Chart;
use crate::error::{Result, VizError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Raster image rendered by Kaleido.
    #[default]
    Png,
    /// Standalone interactive page.
    Html,
    /// Plotly figure JSON.
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}. Expected png, html or json", s)),
        }
    }
}

/// Output file for a chart suffix under `prefix`.
pub fn output_path(prefix: &str, suffix: &str, format: OutputFormat) -> PathBuf {
    PathBuf::from(format!("{}{}.{}", prefix, suffix, format.extension()))
}

/// Render `chart` and write it next to `prefix`, replacing any existing file.
pub fn save_chart(chart: &Chart, prefix: &str, format: OutputFormat, scale: f64) -> Result<PathBuf> {
    let path = output_path(prefix, chart.kind.suffix(), format);
    ensure_parent_dir(&path)?;

    let plot = chart.to_plot();
    match format {
        OutputFormat::Html => write_file(&path, plot.to_html().as_bytes())?,
        OutputFormat::Json => write_file(&path, plot.to_json().as_bytes())?,
        OutputFormat::Png => write_png(&plot, &path, chart.style.width, chart.style.height, scale)?,
    }

    log::info!("Wrote {}", path.display());
    Ok(path)
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|e| VizError::Output {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })
        }
        _ => Ok(()),
    }
}

pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| VizError::Output {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Check that a Kaleido executable can be found before handing over to
/// `plotly_kaleido`, which terminates the process when it cannot locate one.
///
/// `kaleido_path` is the value of `KALEIDO_PATH`. Builds with
/// `kaleido_download` carry their own executable and skip the lookup.
#[cfg_attr(not(feature = "kaleido"), allow(dead_code))]
fn check_kaleido(kaleido_path: Option<PathBuf>, target: &Path) -> Result<()> {
    if cfg!(feature = "kaleido_download") {
        return Ok(());
    }
    let unavailable = |reason: String| VizError::Output {
        path: target.to_path_buf(),
        message: format!(
            "{}; set KALEIDO_PATH to a Kaleido executable, build with `kaleido_download`, or choose html/json output",
            reason
        ),
    };
    match kaleido_path {
        None => Err(unavailable("KALEIDO_PATH is not set".to_string())),
        Some(exe) if !exe.exists() => Err(unavailable(format!(
            "KALEIDO_PATH points to missing {}",
            exe.display()
        ))),
        Some(_) => Ok(()),
    }
}

#[cfg(feature = "kaleido")]
fn write_png(plot: &plotly::Plot, path: &Path, width: usize, height: usize, scale: f64) -> Result<()> {
    check_kaleido(std::env::var_os("KALEIDO_PATH").map(PathBuf::from), path)?;

    let figure: serde_json::Value = serde_json::from_str(&plot.to_json()).map_err(|e| VizError::Output {
        path: path.to_path_buf(),
        message: format!("Failed to serialize figure: {}", e),
    })?;
    plotly_kaleido::Kaleido::new()
        .save(path, &figure, "png", width, height, scale)
        .map_err(|e| VizError::Output {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if !path.exists() {
        return Err(VizError::Output {
            path: path.to_path_buf(),
            message: "Kaleido reported success but wrote no file".to_string(),
        });
    }
    Ok(())
}

#[cfg(not(feature = "kaleido"))]
fn write_png(_plot: &plotly::Plot, path: &Path, _width: usize, _height: usize, _scale: f64) -> Result<()> {
    Err(VizError::Output {
        path: path.to_path_buf(),
        message: "PNG export needs the `kaleido` feature; rebuild with it or choose html/json output"
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "kaleido_download"))]
    #[test]
    fn kaleido_lookup_fails_without_executable() {
        let target = Path::new("run_capabilities.png");

        let unset = check_kaleido(None, target).unwrap_err();
        assert!(matches!(unset, VizError::Output { .. }));
        assert!(unset.to_string().contains("KALEIDO_PATH is not set"));

        let missing = check_kaleido(Some(PathBuf::from("/nonexistent/kaleido")), target).unwrap_err();
        assert!(missing.to_string().contains("/nonexistent/kaleido"));
    }

    #[cfg(not(feature = "kaleido_download"))]
    #[test]
    fn kaleido_lookup_accepts_existing_executable() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("kaleido");
        std::fs::write(&exe, b"").unwrap();
        assert!(check_kaleido(Some(exe), Path::new("out.png")).is_ok());
    }
}
