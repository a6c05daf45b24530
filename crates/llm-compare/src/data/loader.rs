//! CSV/TSV reader for the model comparison table.
use std::collections::HashSet;
use std::path::Path;

use csv::StringRecord;

use crate::data::record::{Capability, Dataset, ModelRecord, ModelType, RatingColumn, SdkLanguage};
use crate::error::{Result, VizError};

pub const MODEL_NAME_COLUMN: &str = "Model Name";
pub const MODEL_TYPE_COLUMN: &str = "Model Type";
pub const CONTEXT_WINDOW_COLUMN: &str = "Context Window Size";

/// Every header the loader needs, in the order they are checked.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    MODEL_NAME_COLUMN,
    MODEL_TYPE_COLUMN,
    "Text Generation",
    "Code Generation",
    "Image Generation",
    "Image Understanding",
    "Research/Citation",
    "Function Calling",
    "Python SDK",
    "Java SDK",
    "TypeScript SDK",
    CONTEXT_WINDOW_COLUMN,
];

/// Resolved positions of the required columns in a header row.
struct ColumnIndex {
    name: usize,
    model_type: usize,
    capabilities: [usize; 6],
    sdk_support: [usize; 3],
    context_window: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| find_column(headers, name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(VizError::DataSource(format!(
                "Missing required column(s): {}",
                missing.join(", ")
            )));
        }

        let index_of = |name: &str| find_column(headers, name).unwrap_or_default();
        Ok(Self {
            name: index_of(MODEL_NAME_COLUMN),
            model_type: index_of(MODEL_TYPE_COLUMN),
            capabilities: Capability::ALL.map(|c| index_of(c.header())),
            sdk_support: SdkLanguage::ALL.map(|s| index_of(s.header())),
            context_window: index_of(CONTEXT_WINDOW_COLUMN),
        })
    }
}

/// Load the comparison table at `path`.
///
/// Files ending in `.tsv` are read tab-delimited, anything else as CSV.
/// Column order in the file is irrelevant and extra columns are ignored.
pub fn load_llm_data<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let is_tsv = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("tsv"))
        .unwrap_or(false);
    let delimiter = if is_tsv { b'\t' } else { b',' };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| {
            VizError::DataSource(format!("Failed to open {}: {}", path.display(), e))
        })?;

    let headers = reader
        .headers()
        .map_err(|e| VizError::DataSource(format!("Failed to read header row: {}", e)))?
        .clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for (row_idx, result) in reader.records().enumerate() {
        let row = row_idx + 1;
        let record = result
            .map_err(|e| VizError::DataSource(format!("Failed to read row {}: {}", row, e)))?;

        let name = cell(&record, columns.name, MODEL_NAME_COLUMN, row)?;
        if name.is_empty() {
            return Err(VizError::DataSource(format!("Empty '{}' at row {}", MODEL_NAME_COLUMN, row)));
        }
        if !seen.insert(name.to_string()) {
            return Err(VizError::DataSource(format!(
                "Duplicate model name '{}' at row {}",
                name, row
            )));
        }

        let model_type = cell(&record, columns.model_type, MODEL_TYPE_COLUMN, row)?
            .parse::<ModelType>()
            .map_err(|e| VizError::DataSource(format!("{} at row {}", e, row)))?;

        let mut capabilities: [String; 6] = Default::default();
        for (slot, (&idx, capability)) in capabilities
            .iter_mut()
            .zip(columns.capabilities.iter().zip(Capability::ALL))
        {
            *slot = cell(&record, idx, capability.header(), row)?.to_string();
        }

        let mut sdk_support: [String; 3] = Default::default();
        for (slot, (&idx, sdk)) in sdk_support
            .iter_mut()
            .zip(columns.sdk_support.iter().zip(SdkLanguage::ALL))
        {
            *slot = cell(&record, idx, sdk.header(), row)?.to_string();
        }

        let context_window = cell(&record, columns.context_window, CONTEXT_WINDOW_COLUMN, row)?.to_string();

        records.push(ModelRecord {
            name: name.to_string(),
            model_type,
            capabilities,
            sdk_support,
            context_window,
        });
    }

    log::debug!("Loaded {} model rows from {}", records.len(), path.display());
    Ok(Dataset::new(records))
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

fn cell<'r>(record: &'r StringRecord, idx: usize, column: &str, row: usize) -> Result<&'r str> {
    record
        .get(idx)
        .ok_or_else(|| VizError::DataSource(format!("Missing '{}' value at row {}", column, row)))
}
