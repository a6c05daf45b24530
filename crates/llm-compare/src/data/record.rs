//! Model records and the categorical values they carry.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Licensing category of a model, used to color labels and bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelType {
    Commercial,
    OpenSource,
}

impl ModelType {
    pub fn label(&self) -> &'static str {
        match self {
            ModelType::Commercial => "Commercial",
            ModelType::OpenSource => "Open Source",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "commercial" => Ok(ModelType::Commercial),
            "open source" => Ok(ModelType::OpenSource),
            _ => Err(format!(
                "Unknown model type: '{}'. Expected 'Commercial' or 'Open Source'",
                s
            )),
        }
    }
}

/// Tri-state support level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Yes,
    Limited,
    No,
}

impl Rating {
    /// Numeric projection used by the heatmaps.
    pub fn score(&self) -> f64 {
        match self {
            Rating::Yes => 1.0,
            Rating::Limited => 0.5,
            Rating::No => 0.0,
        }
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(Rating::Yes),
            "limited" => Ok(Rating::Limited),
            "no" => Ok(Rating::No),
            _ => Err(format!("Unknown rating: '{}'", s)),
        }
    }
}

/// A tri-state column of the input table that can be projected into a score matrix.
pub trait RatingColumn: Copy {
    /// Header text in the input table.
    fn header(&self) -> &'static str;

    /// Raw cell text of this column for `record`.
    fn raw_value<'a>(&self, record: &'a ModelRecord) -> &'a str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    TextGeneration,
    CodeGeneration,
    ImageGeneration,
    ImageUnderstanding,
    ResearchCitation,
    FunctionCalling,
}

impl Capability {
    /// Display order of the capability heatmap columns.
    pub const ALL: [Capability; 6] = [
        Capability::TextGeneration,
        Capability::CodeGeneration,
        Capability::ImageGeneration,
        Capability::ImageUnderstanding,
        Capability::ResearchCitation,
        Capability::FunctionCalling,
    ];

    fn index(&self) -> usize {
        *self as usize
    }
}

impl RatingColumn for Capability {
    fn header(&self) -> &'static str {
        match self {
            Capability::TextGeneration => "Text Generation",
            Capability::CodeGeneration => "Code Generation",
            Capability::ImageGeneration => "Image Generation",
            Capability::ImageUnderstanding => "Image Understanding",
            Capability::ResearchCitation => "Research/Citation",
            Capability::FunctionCalling => "Function Calling",
        }
    }

    fn raw_value<'a>(&self, record: &'a ModelRecord) -> &'a str {
        &record.capabilities[self.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SdkLanguage {
    Python,
    Java,
    TypeScript,
}

impl SdkLanguage {
    pub const ALL: [SdkLanguage; 3] = [SdkLanguage::Python, SdkLanguage::Java, SdkLanguage::TypeScript];

    fn index(&self) -> usize {
        *self as usize
    }
}

impl RatingColumn for SdkLanguage {
    fn header(&self) -> &'static str {
        match self {
            SdkLanguage::Python => "Python SDK",
            SdkLanguage::Java => "Java SDK",
            SdkLanguage::TypeScript => "TypeScript SDK",
        }
    }

    fn raw_value<'a>(&self, record: &'a ModelRecord) -> &'a str {
        &record.sdk_support[self.index()]
    }
}

/// One row of the comparison table.
///
/// Rating and context window cells are kept as written; the matrix builder
/// and the context window chart interpret them.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRecord {
    pub name: String,
    pub model_type: ModelType,
    /// Indexed in `Capability::ALL` order.
    pub capabilities: [String; 6],
    /// Indexed in `SdkLanguage::ALL` order.
    pub sdk_support: [String; 3],
    pub context_window: String,
}

/// Models in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<ModelRecord>,
}

impl Dataset {
    pub fn new(records: Vec<ModelRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModelRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name.clone()).collect()
    }
}
