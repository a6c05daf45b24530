//! Integration tests for reading the model comparison table.

use std::path::PathBuf;

use llm_compare::data::{load_llm_data, Capability, ModelType, RatingColumn, SdkLanguage};
use llm_compare::VizError;

const HEADER: &str = "Model Name,Model Type,Text Generation,Code Generation,Image Generation,Image Understanding,Research/Citation,Function Calling,Python SDK,Java SDK,TypeScript SDK,Context Window Size";

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn sample_csv() -> String {
    format!(
        "{}\n\
         Alpha,Commercial,Yes,Yes,No,Limited,No,Yes,Yes,Limited,Yes,128K\n\
         Beta,Open Source,Yes,Limited,No,No,No,No,Yes,No,No,1M\n",
        HEADER
    )
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[test]
fn loads_rows_in_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "models.csv", &sample_csv());

    let dataset = load_llm_data(&path).unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.names(), vec!["Alpha", "Beta"]);

    let alpha = &dataset.records[0];
    assert_eq!(alpha.model_type, ModelType::Commercial);
    assert_eq!(Capability::TextGeneration.raw_value(alpha), "Yes");
    assert_eq!(Capability::ImageUnderstanding.raw_value(alpha), "Limited");
    assert_eq!(SdkLanguage::Java.raw_value(alpha), "Limited");
    assert_eq!(alpha.context_window, "128K");

    assert_eq!(dataset.records[1].model_type, ModelType::OpenSource);
}

#[test]
fn column_order_in_file_does_not_matter() {
    let dir = tempfile::tempdir().unwrap();
    let content = "Context Window Size,Function Calling,Research/Citation,Image Understanding,Image Generation,Code Generation,Text Generation,TypeScript SDK,Java SDK,Python SDK,Model Type,Model Name,Notes\n\
                   32K,No,Limited,Yes,No,Yes,Yes,No,Yes,Limited,Commercial,Gamma,extra column\n";
    let path = write_file(&dir, "shuffled.csv", content);

    let dataset = load_llm_data(&path).unwrap();
    let gamma = &dataset.records[0];
    assert_eq!(gamma.name, "Gamma");
    assert_eq!(Capability::FunctionCalling.raw_value(gamma), "No");
    assert_eq!(Capability::ResearchCitation.raw_value(gamma), "Limited");
    assert_eq!(SdkLanguage::Python.raw_value(gamma), "Limited");
    assert_eq!(SdkLanguage::TypeScript.raw_value(gamma), "No");
    assert_eq!(gamma.context_window, "32K");
}

#[test]
fn reads_tab_separated_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "models.tsv", &sample_csv().replace(',', "\t"));

    let dataset = load_llm_data(&path).unwrap();
    assert_eq!(dataset.names(), vec!["Alpha", "Beta"]);
}

#[test]
fn header_only_file_loads_empty_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "empty.csv", &format!("{}\n", HEADER));
    assert!(load_llm_data(&path).unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Data source errors
// ---------------------------------------------------------------------------

#[test]
fn missing_file_is_data_source_error() {
    let err = load_llm_data("/nonexistent/models.csv").unwrap_err();
    assert!(matches!(err, VizError::DataSource(_)));
}

#[test]
fn missing_column_is_named_in_error() {
    let dir = tempfile::tempdir().unwrap();
    let content = sample_csv().replace("Function Calling", "Function Calls");
    let path = write_file(&dir, "models.csv", &content);

    match load_llm_data(&path).unwrap_err() {
        VizError::DataSource(msg) => assert!(msg.contains("Function Calling"), "{}", msg),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn short_row_is_data_source_error() {
    let dir = tempfile::tempdir().unwrap();
    let content = format!("{}\nAlpha,Commercial,Yes\n", HEADER);
    let path = write_file(&dir, "models.csv", &content);
    assert!(matches!(load_llm_data(&path).unwrap_err(), VizError::DataSource(_)));
}

#[test]
fn unknown_model_type_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let content = sample_csv().replace("Open Source", "Freeware");
    let path = write_file(&dir, "models.csv", &content);

    match load_llm_data(&path).unwrap_err() {
        VizError::DataSource(msg) => assert!(msg.contains("Freeware"), "{}", msg),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn duplicate_model_names_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let content = sample_csv().replace("Beta,", "Alpha,");
    let path = write_file(&dir, "models.csv", &content);

    match load_llm_data(&path).unwrap_err() {
        VizError::DataSource(msg) => assert!(msg.contains("Duplicate"), "{}", msg),
        other => panic!("unexpected error: {:?}", other),
    }
}
