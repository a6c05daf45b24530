use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading comparison data or producing charts.
#[derive(Debug)]
pub enum VizError {
    /// Input missing, unreadable, malformed or lacking a required column.
    DataSource(String),
    /// A capability/SDK cell holds something other than Yes, Limited or No.
    UnmappableValue {
        model: String,
        column: String,
        value: String,
    },
    /// A context window that is not `<number>K` or `<number>M`.
    Parse {
        model: String,
        value: String,
        reason: String,
    },
    /// Rendering or writing an output artifact failed.
    Output { path: PathBuf, message: String },
    Config(String),
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VizError::DataSource(msg) => write!(f, "Data source error: {}", msg),
            VizError::UnmappableValue { model, column, value } => write!(
                f,
                "Unmappable value '{}' in column '{}' for model '{}' (expected Yes, Limited or No)",
                value, column, model
            ),
            VizError::Parse { model, value, reason } => write!(
                f,
                "Invalid context window '{}' for model '{}': {}",
                value, model, reason
            ),
            VizError::Output { path, message } => {
                write!(f, "Failed to write {}: {}", path.display(), message)
            }
            VizError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl Error for VizError {}

pub type Result<T> = std::result::Result<T, VizError>;
