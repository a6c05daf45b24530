//! Projection of tri-state columns into numeric score matrices.
use serde::{Deserialize, Serialize};

use crate::data::{Dataset, Rating, RatingColumn};
use crate::error::{Result, VizError};
use crate::math::Array2;

/// What to do with a rating cell that is not Yes, Limited or No.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownRatingPolicy {
    /// Abort with [`VizError::UnmappableValue`].
    #[default]
    Reject,
    /// Leave the cell empty.
    Blank,
}

/// Scores per model (rows, dataset order) and column (caller order).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub values: Array2<Option<f64>>,
}

impl ScoreMatrix {
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values[(row, col)]
    }

    /// Score of `column` for the model called `model`, if both exist and the cell is defined.
    pub fn lookup(&self, model: &str, column: &str) -> Option<f64> {
        let row = self.row_labels.iter().position(|l| l == model)?;
        let col = self.column_labels.iter().position(|l| l == column)?;
        self.get(row, col)
    }
}

/// Build the score matrix of `columns` over every record of `dataset`.
pub fn build_score_matrix<C: RatingColumn>(
    dataset: &Dataset,
    columns: &[C],
    policy: UnknownRatingPolicy,
) -> Result<ScoreMatrix> {
    let mut rows = Vec::with_capacity(dataset.len());
    for record in dataset.iter() {
        let mut row = Vec::with_capacity(columns.len());
        for column in columns {
            let raw = column.raw_value(record);
            let score = match raw.parse::<Rating>() {
                Ok(rating) => Some(rating.score()),
                Err(_) if policy == UnknownRatingPolicy::Blank => {
                    log::warn!(
                        "Unrecognised rating '{}' for '{}' / '{}', leaving cell blank",
                        raw,
                        record.name,
                        column.header()
                    );
                    None
                }
                Err(_) => {
                    return Err(VizError::UnmappableValue {
                        model: record.name.clone(),
                        column: column.header().to_string(),
                        value: raw.to_string(),
                    })
                }
            };
            row.push(score);
        }
        rows.push(row);
    }

    let values = Array2::from_rows(columns.len(), rows)
        .map_err(|e| VizError::DataSource(format!("Failed to build score matrix: {}", e)))?;

    Ok(ScoreMatrix {
        row_labels: dataset.names(),
        column_labels: columns.iter().map(|c| c.header().to_string()).collect(),
        values,
    })
}
