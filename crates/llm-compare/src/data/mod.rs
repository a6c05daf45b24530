//! Comparison table model and loading.

pub mod context_window;
pub mod loader;
pub mod record;

pub use context_window::{ContextWindow, TokenUnit};
pub use loader::{load_llm_data, REQUIRED_COLUMNS};
pub use record::{Capability, Dataset, ModelRecord, ModelType, Rating, RatingColumn, SdkLanguage};
